use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Registration request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub phone_number: String,
    pub name: String,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Both fields are required. Format checks belong to the backend.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "Name is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.phone_number.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "Phone number is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
