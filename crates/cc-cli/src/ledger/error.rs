use crate::ClientError;

use std::panic::Location;

use cc_core::CoreError;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Another adjustment for the same customer has not returned yet.
    #[error("An adjustment for customer {customer_id} is already in progress {location}")]
    AlreadyInFlight {
        customer_id: String,
        location: ErrorLocation,
    },

    #[error("Invalid adjustment: {message} {location}")]
    InvalidAdjustment {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl LedgerError {
    #[track_caller]
    pub fn already_in_flight(customer_id: impl Into<String>) -> Self {
        Self::AlreadyInFlight {
            customer_id: customer_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_adjustment(message: impl Into<String>) -> Self {
        Self::InvalidAdjustment {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_unauthorized())
    }

    /// Operator-facing text, falling back to `fallback` when nothing better is known.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::AlreadyInFlight { .. } => {
                "An adjustment for this customer is already in progress".to_string()
            }
            Self::InvalidAdjustment { message, .. } => message.clone(),
            Self::Client(e) => e.message_or(fallback),
        }
    }
}

impl From<CoreError> for LedgerError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        LedgerError::invalid_adjustment(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
