pub mod database;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

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

    let command = Command::new("products")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles);

    let command = database::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{ARG_CREATE_TABLE, ARG_DB_NAME, ARG_DB_PASSWORD, ARG_DB_USERNAME};
    use logging::ARG_VERBOSITY;

    const DB_ENV: [&str; 4] = [
        "APP_DB_USERNAME",
        "APP_DB_PASSWORD",
        "APP_DB_NAME",
        "APP_DB_CREATE_TABLE",
    ];

    fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
        DB_ENV
            .iter()
            .chain(["APP_LOG_LEVEL"].iter())
            .map(|key| (*key, None))
            .collect()
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "products");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_db_args() {
        temp_env::with_vars(cleared_env(), || {
            let matches = new().get_matches_from(vec![
                "products",
                "--db-username",
                "postgres",
                "--db-password",
                "secret",
                "--db-name",
                "shop",
            ]);

            assert_eq!(
                matches.get_one::<String>(ARG_DB_USERNAME).cloned(),
                Some("postgres".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(ARG_DB_PASSWORD).cloned(),
                Some("secret".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(ARG_DB_NAME).cloned(),
                Some("shop".to_string())
            );
            assert!(!matches.get_flag(ARG_CREATE_TABLE));
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("APP_DB_USERNAME", Some("app")),
                ("APP_DB_PASSWORD", Some("app-secret")),
                ("APP_DB_NAME", Some("catalog")),
                ("APP_DB_CREATE_TABLE", Some("true")),
                ("APP_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["products"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_DB_USERNAME).cloned(),
                    Some("app".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_DB_PASSWORD).cloned(),
                    Some("app-secret".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_DB_NAME).cloned(),
                    Some("catalog".to_string())
                );
                assert!(matches.get_flag(ARG_CREATE_TABLE));
                assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_missing_credentials_fail() {
        temp_env::with_vars(cleared_env(), || {
            let result = new().try_get_matches_from(vec!["products", "--db-name", "shop"]);
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(clap::error::ErrorKind::MissingRequiredArgument)
            );
        });
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("APP_LOG_LEVEL", Some(level)),
                    ("APP_DB_USERNAME", Some("postgres")),
                    ("APP_DB_PASSWORD", Some("postgres")),
                    ("APP_DB_NAME", Some("postgres")),
                ],
                || {
                    let matches = new().get_matches_from(vec!["products"]);
                    assert_eq!(
                        matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                        u8::try_from(index).ok()
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars(cleared_env(), || {
                let mut args = vec![
                    "products".to_string(),
                    "--db-username".to_string(),
                    "postgres".to_string(),
                    "--db-password".to_string(),
                    "postgres".to_string(),
                    "--db-name".to_string(),
                    "postgres".to_string(),
                ];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
