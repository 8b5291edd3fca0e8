//! Run a validator against a single value and print the verdict.

use crate::cli::actions::Action;
use crate::config::rules;
use crate::validation::{
    format_otp, mask_email, validate_email, validate_full_name, validate_password,
};
use anyhow::Result;
use secrecy::ExposeSecret;
use serde_json::json;
use std::process::ExitCode;
use tracing::debug;

/// Handle the check action
/// # Errors
/// Returns an error if the value cannot be processed at all (e.g. masking an
/// address without an `@`); soft rejections are reported via the exit code.
pub fn execute(action: Action) -> Result<ExitCode> {
    match action {
        Action::Email { address, json } => {
            let is_valid = validate_email(&address);
            debug!(%address, is_valid, "email check");
            report("email", is_valid, rules::EMAIL.message, json);
            Ok(exit_code(is_valid))
        }
        Action::FullName { name, json } => {
            let is_valid = validate_full_name(&name);
            debug!(%name, is_valid, "full name check");
            report("name", is_valid, rules::FULL_NAME.message, json);
            Ok(exit_code(is_valid))
        }
        Action::Password { password, json } => {
            let verdict = validate_password(password.expose_secret());
            debug!(
                is_valid = verdict.is_valid,
                strength = %verdict.strength,
                "password check"
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                println!("strength: {}", verdict.strength);
                for line in &verdict.feedback {
                    println!("{line}");
                }
            }
            Ok(exit_code(verdict.is_valid))
        }
        Action::Otp { code, json } => {
            let formatted = format_otp(&code);
            debug!(%code, %formatted, "otp normalization");
            if json {
                println!("{}", json!({ "field": "otp", "value": formatted }));
            } else {
                println!("{formatted}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Action::Mask { address, json } => {
            let masked = mask_email(&address)?;
            debug!(%masked, "email masking");
            if json {
                println!("{}", json!({ "field": "email", "value": masked }));
            } else {
                println!("{masked}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report(field: &str, is_valid: bool, message: &str, json: bool) {
    if json {
        let mut body = json!({ "field": field, "is_valid": is_valid });
        if !is_valid {
            body["message"] = json!(message);
        }
        println!("{body}");
    } else if is_valid {
        println!("valid");
    } else {
        println!("invalid: {message}");
    }
}

fn exit_code(is_valid: bool) -> ExitCode {
    if is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
