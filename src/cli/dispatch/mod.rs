use crate::cli::{
    actions::{server, Action},
    commands::database::{ARG_CREATE_TABLE, ARG_DB_NAME, ARG_DB_PASSWORD, ARG_DB_USERNAME},
};
use anyhow::{Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

/// Turn parsed arguments into the action the binary runs.
///
/// # Errors
///
/// Returns an error if a required database argument is missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let db_username = matches
        .get_one::<String>(ARG_DB_USERNAME)
        .cloned()
        .context("missing required argument: --db-username")?;

    let db_password = matches
        .get_one::<String>(ARG_DB_PASSWORD)
        .cloned()
        .map(SecretString::from)
        .context("missing required argument: --db-password")?;

    let db_name = matches
        .get_one::<String>(ARG_DB_NAME)
        .cloned()
        .context("missing required argument: --db-name")?;

    Ok(Action::Server(server::Args {
        db_username,
        db_password,
        db_name,
        create_table: matches.get_flag(ARG_CREATE_TABLE),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn test_handler_builds_server_args() -> Result<()> {
        temp_env::with_vars(
            [
                ("APP_DB_USERNAME", None::<&str>),
                ("APP_DB_PASSWORD", None),
                ("APP_DB_NAME", None),
                ("APP_DB_CREATE_TABLE", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec![
                    "products",
                    "--db-username",
                    "postgres",
                    "--db-password",
                    "secret",
                    "--db-name",
                    "shop",
                    "--create-table",
                ]);

                let Action::Server(args) = handler(&matches)?;
                assert_eq!(args.db_username, "postgres");
                assert_eq!(args.db_password.expose_secret(), "secret");
                assert_eq!(args.db_name, "shop");
                assert!(args.create_table);
                Ok(())
            },
        )
    }

    #[test]
    fn test_handler_reports_missing_args() {
        let matches = clap::Command::new("products")
            .arg(clap::Arg::new(ARG_DB_USERNAME).long(ARG_DB_USERNAME))
            .get_matches_from(vec!["products"]);

        let err = handler(&matches).err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("missing required argument: --db-username")
        );
    }
}
