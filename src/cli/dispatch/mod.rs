use crate::cli::actions::Action;
use anyhow::{bail, Context, Result};
use secrecy::SecretString;

/// Map parsed arguments onto an [`Action`].
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let json = matches.get_flag("json");

    // Closure to return subcommand matches
    let sub_m = |subcommand| -> Result<&clap::ArgMatches> {
        matches
            .subcommand_matches(subcommand)
            .context("arguments not found")
    };

    let value = |matches: &clap::ArgMatches, id: &str| -> Result<String> {
        matches
            .get_one::<String>(id)
            .cloned()
            .with_context(|| format!("missing required argument: <{}>", id.to_uppercase()))
    };

    match matches.subcommand_name() {
        Some("email") => Ok(Action::Email {
            address: value(sub_m("email")?, "address")?,
            json,
        }),
        Some("password") => Ok(Action::Password {
            password: SecretString::from(value(sub_m("password")?, "password")?),
            json,
        }),
        Some("name") => Ok(Action::FullName {
            name: value(sub_m("name")?, "name")?,
            json,
        }),
        Some("otp") => Ok(Action::Otp {
            code: value(sub_m("otp")?, "code")?,
            json,
        }),
        Some("mask") => Ok(Action::Mask {
            address: value(sub_m("mask")?, "address")?,
            json,
        }),
        _ => bail!("missing subcommand, try --help"),
    }
}
