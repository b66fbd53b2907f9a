use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Admin login request body.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(CoreError::Validation {
                message: "Username and password are required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
