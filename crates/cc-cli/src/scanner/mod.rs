//! QR decode adapter.
//!
//! `Idle -> RequestingCameraPermission -> Scanning -> (Decoded | Stopped | PermissionDenied) -> Idle`
//!
//! The camera is acquired twice per scan: once to probe permission (released at once)
//! and once for the scanning session. Both acquisitions are [`CameraLease`]s, which
//! release the device when dropped on every exit path.

pub(crate) mod camera;
pub(crate) mod error;
pub(crate) mod line_device;
pub(crate) mod qr_scanner;
pub(crate) mod scanner_state;

pub use camera::{Camera, CameraLease, FrameSource, QrDecoder};
pub use error::{CameraError, Result as CameraResult};
pub use line_device::{LineScannerDevice, LineStream, PayloadDecoder};
pub use qr_scanner::{QrScanner, ScanOutcome};
pub use scanner_state::ScannerState;
