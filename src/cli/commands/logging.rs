use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names in increasing verbosity; the index is the `-v` count.
const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// `APP_LOG_LEVEL` may hold a count (`0`..=`5`) or a level name.
fn parse_log_level(level: &str) -> Result<u8, String> {
    if let Ok(count) = level.parse::<u8>() {
        return if count <= 5 {
            Ok(count)
        } else {
            Err(format!("log level {count} is above 5"))
        };
    }

    let lowered = level.trim().to_ascii_lowercase();
    LEVEL_NAMES
        .iter()
        .position(|name| *name == lowered)
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| format!("invalid log level '{level}', expected one of {LEVEL_NAMES:?}"))
}

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(parse_log_level)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log verbosity, repeat for more: -v warn, -vv info, -vvv debug, -vvvv trace")
            .env("APP_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
