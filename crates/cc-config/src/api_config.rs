use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_PUBLIC_ORIGIN,
    DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Where the backend lives and where customer QR links point.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// REST backend root, e.g. `https://api.cutcard.example`
    pub base_url: String,
    /// Origin encoded into customer QR codes (`<origin>/customer/<id>`)
    pub public_origin: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            public_origin: DEFAULT_PUBLIC_ORIGIN.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_url("api.base_url", &self.base_url)?;
        Self::validate_url("api.public_origin", &self.public_origin)?;

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate_url(field: &str, value: &str) -> ConfigErrorResult<()> {
        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"));

        match rest {
            Some(host) if !host.trim_end_matches('/').is_empty() => Ok(()),
            _ => Err(ConfigError::api(format!(
                "{field} must be an absolute http(s) URL, got '{value}'"
            ))),
        }
    }
}
