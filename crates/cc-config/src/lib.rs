mod api_config;
mod config;
mod directory_config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use directory_config::DirectoryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "CUTCARD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".cutcard";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_PUBLIC_ORIGIN: &str = "http://127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_TOKEN_FILENAME: &str = "session.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
