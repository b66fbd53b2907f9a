use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok, some};
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
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_API_BASE_URL));
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_TIMEOUT_SECS));
    assert_that!(
        config.session.token_file.as_str(),
        eq(crate::DEFAULT_TOKEN_FILENAME)
    );
    assert_that!(config.directory.page_size, eq(cc_core::DEFAULT_PAGE_SIZE));
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
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".cutcard");
    let _guard = EnvGuard::set("CUTCARD_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              base_url = "https://api.cutcard.example"
              public_origin = "https://cutcard.example"
              timeout_secs = 30

              [directory]
              page_size = 25
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://api.cutcard.example")
    );
    assert_that!(
        config.api.public_origin.as_str(),
        eq("https://cutcard.example")
    );
    assert_that!(config.api.timeout_secs, eq(30));
    assert_that!(config.directory.page_size, eq(25));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"https://from-toml.example\"",
    )
    .unwrap();
    let _url = EnvGuard::set("CUTCARD_API_BASE_URL", "https://from-env.example");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://from-env.example")
    );
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("CUTCARD_API_TIMEOUT_SECS", "45");
    let _page = EnvGuard::set("CUTCARD_DIRECTORY_PAGE_SIZE", "50");
    let _colored = EnvGuard::set("CUTCARD_LOG_COLORED", "false");
    let _file = EnvGuard::set("CUTCARD_LOG_FILE", "cutcard.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(45));
    assert_that!(config.directory.page_size, eq(50));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("cutcard.log")));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_default() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("CUTCARD_API_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_TIMEOUT_SECS));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring("TOML parse error"));
}

#[test]
#[serial]
fn given_absolute_log_file_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("CUTCARD_LOG_FILE", "/var/log/cutcard.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

// =========================================================================
// Path Tests
// =========================================================================

#[test]
#[serial]
fn given_config_dir_when_session_path_then_joined() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let config = Config::load().unwrap();

    // When
    let path = config.session_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("session.json"));
}

#[test]
#[serial]
fn given_no_log_file_when_log_file_path_then_none() {
    // Given
    let _temp = setup_config_dir();
    let config = Config::load().unwrap();

    // When / Then
    assert!(config.log_file_path().unwrap().is_none());
}
