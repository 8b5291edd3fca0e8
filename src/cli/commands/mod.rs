use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("convalida")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Print verdicts as JSON instead of plain text")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("CONVALIDA_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("email")
                .about("Check that an address has a plausible local@domain.tld shape")
                .arg(Arg::new("address").help("Address to check").required(true)),
        )
        .subcommand(
            Command::new("password")
                .about("Score password complexity and report missing requirements")
                .arg(Arg::new("password").help("Password to score").required(true)),
        )
        .subcommand(
            Command::new("name")
                .about("Check a full name against the allow-list character class")
                .arg(Arg::new("name").help("Full name to check").required(true)),
        )
        .subcommand(
            Command::new("otp")
                .about("Normalize a one-time code to its digits")
                .arg(Arg::new("code").help("Raw code input").required(true)),
        )
        .subcommand(
            Command::new("mask")
                .about("Mask the local part of an address for display")
                .arg(Arg::new("address").help("Address to mask").required(true)),
        )
}
