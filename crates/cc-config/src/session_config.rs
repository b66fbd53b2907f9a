use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session file holding the bearer token, relative to the config directory
    pub token_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_file: DEFAULT_TOKEN_FILENAME.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_file.trim().is_empty() {
            return Err(ConfigError::session("session.token_file cannot be empty"));
        }

        if Path::new(&self.token_file).is_absolute() || self.token_file.contains("..") {
            return Err(ConfigError::session(
                "session.token_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
