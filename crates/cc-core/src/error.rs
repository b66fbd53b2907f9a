use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort key: {value} {location}")]
    InvalidSortKey {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid page size: {value} (allowed: {allowed}) {location}")]
    InvalidPageSize {
        value: usize,
        allowed: String,
        location: ErrorLocation,
    },

    #[error("Unknown route: {path} {location}")]
    UnknownRoute {
        path: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
