use crate::cli::actions::{check, Action};
use anyhow::Result;
use std::process::ExitCode;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
// To add a new action, add a new `Action::*` variant and a corresponding call here.
/// # Errors
/// Returns an error if the action fails.
pub fn execute(action: Action) -> Result<ExitCode> {
    match action {
        Action::Email { .. }
        | Action::Password { .. }
        | Action::FullName { .. }
        | Action::Otp { .. }
        | Action::Mask { .. } => check::execute(action),
    }
}
