//! Signed balance adjustments against the ledger endpoint.
//!
//! The backend exposes a single "deduct" route. A positive `cuts` value removes credit,
//! a negative one adds it, and an empty body removes exactly one. Callers work with the
//! explicit variants below and never build the signed value themselves.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A requested change to a customer's remaining cuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LedgerAdjustment {
    /// Backend default: remove one cut, sent as an empty body.
    #[default]
    DeductOne,
    /// Remove `n` cuts.
    Deduct(u32),
    /// Add `n` cuts.
    Credit(u32),
}

impl LedgerAdjustment {
    /// Build an adjustment from the raw signed delta of the ledger contract.
    ///
    /// Positive deducts, negative credits, zero is a no-op deduction.
    #[track_caller]
    pub fn from_delta(delta: i64) -> CoreErrorResult<Self> {
        let magnitude = u32::try_from(delta.unsigned_abs()).map_err(|_| CoreError::Validation {
            message: format!("Adjustment of {delta} cuts is out of range"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if delta < 0 {
            Ok(Self::Credit(magnitude))
        } else {
            Ok(Self::Deduct(magnitude))
        }
    }

    /// Signed delta as the backend interprets it (positive = deduction).
    pub fn delta(&self) -> i64 {
        match self {
            Self::DeductOne => 1,
            Self::Deduct(n) => i64::from(*n),
            Self::Credit(n) => -i64::from(*n),
        }
    }

    /// Request body for the ledger endpoint.
    pub fn to_request(&self) -> LedgerRequest {
        match self {
            Self::DeductOne => LedgerRequest { cuts: None },
            _ => LedgerRequest {
                cuts: Some(self.delta()),
            },
        }
    }

    /// Balance the backend is expected to return for a given starting balance.
    pub fn expected_balance(&self, current: i64) -> i64 {
        current - self.delta()
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Credit(_))
    }
}

/// Wire body: `{}` or `{"cuts": <int>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuts: Option<i64>,
}

/// Authoritative post-adjustment balance returned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerBalance {
    pub cuts_remaining: i64,
}
