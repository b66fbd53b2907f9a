use crate::SessionConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_session_config_when_validate_then_ok() {
    assert_that!(SessionConfig::default().validate(), ok(anything()));
}

#[test]
fn given_escaping_token_file_when_validate_then_error() {
    let config = SessionConfig {
        token_file: "../session.json".to_string(),
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_absolute_token_file_when_validate_then_error() {
    let config = SessionConfig {
        token_file: "/tmp/session.json".to_string(),
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_blank_token_file_when_validate_then_error() {
    let config = SessionConfig {
        token_file: "   ".to_string(),
    };

    assert_that!(config.validate(), err(anything()));
}
