use crate::{BoardConfig, LogLevel};

use googletest::prelude::*;
use log::LevelFilter;

#[test]
fn given_default_board_config_then_valid() {
    assert_that!(BoardConfig::default().validate(), ok(anything()));
}

#[test]
fn given_no_default_columns_when_validate_then_error() {
    let config = BoardConfig {
        default_columns: Vec::new(),
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_blank_column_title_when_validate_then_error() {
    let config = BoardConfig {
        default_columns: vec!["To Do".to_string(), " ".to_string()],
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_recent_activity_days_when_validate_then_error() {
    let config = BoardConfig {
        recent_activity_days: 0,
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn test_log_level_parse_is_lenient() {
    assert_eq!(LogLevel::parse_lenient("TRACE"), LogLevel(LevelFilter::Trace));
    assert_eq!(LogLevel::parse_lenient("verbose"), LogLevel(LevelFilter::Info));
    assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Off));
}
