use crate::qr_render::RenderError;
use crate::scanner::CameraError;
use crate::session::SessionError;
use crate::{ClientError, LedgerError};

use std::panic::Location;

use cc_config::ConfigError;
use cc_core::CoreError;
use error_location::ErrorLocation;
use thiserror::Error;

/// Top-level failure of a `cutcard` invocation.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Invalid input: {0}")]
    Core(#[from] CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
