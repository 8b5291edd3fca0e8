use anyhow::Result;
use convalida::cli;
use std::process::ExitCode;

// Main function
fn main() -> Result<ExitCode> {
    let action = cli::start()?;

    action.execute()
}
