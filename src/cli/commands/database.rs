use clap::{Arg, ArgAction, Command};

pub const ARG_DB_USERNAME: &str = "db-username";
pub const ARG_DB_PASSWORD: &str = "db-password";
pub const ARG_DB_NAME: &str = "db-name";
pub const ARG_CREATE_TABLE: &str = "create-table";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_DB_USERNAME)
                .long(ARG_DB_USERNAME)
                .help("Database user")
                .env("APP_DB_USERNAME")
                .required(true),
        )
        .arg(
            Arg::new(ARG_DB_PASSWORD)
                .long(ARG_DB_PASSWORD)
                .help("Database password")
                .env("APP_DB_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_DB_NAME)
                .long(ARG_DB_NAME)
                .help("Database name")
                .env("APP_DB_NAME")
                .required(true),
        )
        .arg(
            Arg::new(ARG_CREATE_TABLE)
                .long(ARG_CREATE_TABLE)
                .help("Create the products table at startup if it does not exist")
                .env("APP_DB_CREATE_TABLE")
                .action(ArgAction::SetTrue),
        )
}
