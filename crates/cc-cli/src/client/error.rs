use crate::session::SessionError;

use std::panic::Location;

use cc_core::CoreError;
use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during backend calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {} {location}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    /// The backend rejected the admin credentials. No session was stored.
    #[error("Login rejected: {} {location}", .message.as_deref().unwrap_or("no message"))]
    InvalidCredentials {
        message: Option<String>,
        location: ErrorLocation,
    },

    /// An authenticated call was refused. The session has been cleared.
    #[error("Session expired or missing: {} {location}", .message.as_deref().unwrap_or("no message"))]
    Unauthorized {
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input: {source}")]
    Validation {
        #[source]
        source: CoreError,
    },

    #[error("Session store error: {source}")]
    Session {
        #[source]
        source: SessionError,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, message: Option<String>) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: Option<String>) -> Self {
        ClientError::Unauthorized {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials(message: Option<String>) -> Self {
        ClientError::InvalidCredentials {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the caller must return to the login screen.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Message to show the operator: the backend's own text when it sent one,
    /// the local validation message, or `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Api { message, .. }
            | Self::InvalidCredentials { message, .. }
            | Self::Unauthorized { message, .. } => {
                message.clone().unwrap_or_else(|| fallback.to_string())
            }
            Self::Validation {
                source: CoreError::Validation { message, .. },
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    fn from(source: CoreError) -> Self {
        ClientError::Validation { source }
    }
}

impl From<SessionError> for ClientError {
    fn from(source: SessionError) -> Self {
        ClientError::Session { source }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
