//! Credit ledger: the one operation that changes a customer's remaining cuts.
//!
//! Callers pick an explicit direction (`deduct`, `credit`) with a non-negative count;
//! the sign convention of the backend's single "deduct" route is applied only at the
//! HTTP boundary (see [`cc_core::LedgerAdjustment`]).

pub(crate) mod credit_ledger;
pub(crate) mod error;
pub(crate) mod in_flight;
pub(crate) mod ledger_client;

pub use credit_ledger::CreditLedger;
pub use error::{LedgerError, Result as LedgerResult};
pub use ledger_client::LedgerClient;
