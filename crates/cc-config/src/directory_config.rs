use crate::{ConfigError, ConfigErrorResult};

use cc_core::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Initial page size for the customer list
    pub page_size: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            return Err(ConfigError::directory(format!(
                "directory.page_size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS, self.page_size
            )));
        }
        Ok(())
    }
}
