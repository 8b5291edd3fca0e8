pub mod check;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use secrecy::SecretString;
use std::process::ExitCode;

#[derive(Debug)]
pub enum Action {
    Email { address: String, json: bool },
    Password { password: SecretString, json: bool },
    FullName { name: String, json: bool },
    Otp { code: String, json: bool },
    Mask { address: String, json: bool },
}

impl Action {
    /// Execute the action.
    ///
    /// Returns the process exit code: success for valid input, failure for
    /// input the validators reject.
    ///
    /// # Errors
    /// Returns an error if the action fails (for example masking an address
    /// without an `@`).
    pub fn execute(self) -> anyhow::Result<ExitCode> {
        run::execute(self)
    }
}
