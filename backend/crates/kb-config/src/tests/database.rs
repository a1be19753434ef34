use crate::DatabaseConfig;

use std::time::Duration;

use googletest::prelude::*;

#[test]
fn given_default_database_config_then_valid() {
    let config = DatabaseConfig::default();

    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.busy_timeout(), eq(Duration::from_secs(5)));
}

#[test]
fn given_absolute_path_when_validate_then_error() {
    let config = DatabaseConfig {
        path: "/tmp/kanban.db".to_string(),
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_parent_traversal_when_validate_then_error() {
    let config = DatabaseConfig {
        path: "../kanban.db".to_string(),
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_connections_when_validate_then_error() {
    let config = DatabaseConfig {
        max_connections: 0,
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}
