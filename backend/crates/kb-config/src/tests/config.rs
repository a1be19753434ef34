use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.database.path, eq(crate::DEFAULT_DATABASE_FILENAME));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
    assert_that!(config.auth.user_id, none());
    assert_eq!(
        config.board.default_columns,
        vec!["To Do", "In Progress", "Review", "Done"]
    );
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [database]
            path = "boards.db"

            [auth]
            user_id = "user_42"

            [logging]
            level = "debug"
            colored = false

            [board]
            default_columns = ["Backlog", "Doing", "Done"]
            recent_activity_days = 14
        "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.path, eq("boards.db"));
    assert_that!(config.auth.user_id, some(eq("user_42")));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.board.default_columns.len(), eq(3));
    assert_that!(config.board.recent_activity_days, eq(14));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [auth]
            user_id = "from_file"
        "#,
    );
    let _user = EnvGuard::set("KB_AUTH_USER_ID", "from_env");
    let _level = EnvGuard::set("KB_LOG_LEVEL", "warn");
    let _days = EnvGuard::set("KB_BOARD_RECENT_ACTIVITY_DAYS", "3");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.user_id, some(eq("from_env")));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
    assert_that!(config.board.recent_activity_days, eq(3));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_default() {
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("KB_DATABASE_MAX_CONNECTIONS", "lots");

    let config = Config::load().unwrap();

    assert_that!(
        config.database.max_connections,
        eq(crate::DEFAULT_DATABASE_MAX_CONNECTIONS)
    );
}

#[test]
#[serial]
fn given_config_dir_when_resolving_paths_then_joined_under_it() {
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("KB_LOG_FILE", "kb.log");

    let config = Config::load().unwrap();

    assert_eq!(
        config.database_path().unwrap(),
        temp.path().join(crate::DEFAULT_DATABASE_FILENAME)
    );
    assert_eq!(
        config.log_file_path().unwrap(),
        Some(temp.path().join("log").join("kb.log"))
    );
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[database\npath = ");

    let result = Config::load();

    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(crate::ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_logging_error() {
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("KB_LOG_FILE", "../escape.log");

    let config = Config::load().unwrap();
    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_eq!(result.unwrap_err().category(), Some("Logging"));
}

#[test]
#[serial]
fn given_blank_user_id_when_validate_then_auth_error() {
    let _temp = setup_config_dir();
    let _user = EnvGuard::set("KB_AUTH_USER_ID", "  ");

    let config = Config::load().unwrap();

    assert_eq!(config.validate().unwrap_err().category(), Some("Auth"));
}
