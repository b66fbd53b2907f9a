//! cc-cli library
//!
//! The Cutcard client: HTTP access to the loyalty backend, the local admin session,
//! the credit ledger, the QR scan adapter, and the headless screen controllers the
//! `cutcard` binary drives.

pub mod client;
pub mod error;
pub mod ledger;
pub mod logger;
pub mod qr_render;
pub mod scanner;
pub mod screens;
pub mod session;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientResult};
pub use error::{CliError, Result as CliResult};
pub use ledger::{CreditLedger, LedgerClient, LedgerError, LedgerResult};
pub use scanner::{
    Camera, CameraError, CameraLease, FrameSource, LineScannerDevice, PayloadDecoder,
    QrDecoder, QrScanner, ScanOutcome, ScannerState,
};
pub use qr_render::{QrFormat, RenderError};
pub use screens::{AdminDashboard, CustomerCard, CustomerPage, LoginForm, RegistrationForm};
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};
