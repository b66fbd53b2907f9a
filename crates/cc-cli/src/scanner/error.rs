use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Camera failures. Each carries the exact text shown to the operator.
#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Camera API not supported {location}")]
    Unsupported { location: ErrorLocation },

    #[error("Camera permission denied: {detail} {location}")]
    PermissionDenied {
        detail: String,
        location: ErrorLocation,
    },

    #[error("No camera device found: {detail} {location}")]
    NoDevice {
        detail: String,
        location: ErrorLocation,
    },

    #[error("Camera acquisition failed: {detail} {location}")]
    Acquisition {
        detail: String,
        location: ErrorLocation,
    },

    #[error("QR scanner failed to start: {detail} {location}")]
    StartFailed {
        detail: String,
        location: ErrorLocation,
    },

    #[error("Camera stream failed: {source} {location}")]
    Stream {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl CameraError {
    #[track_caller]
    pub fn unsupported() -> Self {
        Self::Unsupported {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn permission_denied(detail: impl Into<String>) -> Self {
        Self::PermissionDenied {
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_device(detail: impl Into<String>) -> Self {
        Self::NoDevice {
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn acquisition(detail: impl Into<String>) -> Self {
        Self::Acquisition {
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn start_failed(detail: impl Into<String>) -> Self {
        Self::StartFailed {
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn stream(source: std::io::Error) -> Self {
        Self::Stream {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map an I/O failure while opening a device.
    #[track_caller]
    pub fn from_io(device: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(device),
            std::io::ErrorKind::NotFound => Self::no_device(device),
            _ => Self::acquisition(err.to_string()),
        }
    }

    /// Whether the failure happened while asking for permission (as opposed to while
    /// starting or running the scanner).
    pub fn is_permission_failure(&self) -> bool {
        matches!(
            self,
            Self::Unsupported { .. }
                | Self::PermissionDenied { .. }
                | Self::NoDevice { .. }
                | Self::Acquisition { .. }
        )
    }

    /// Text shown to the operator.
    pub fn operator_message(&self) -> String {
        match self {
            Self::Unsupported { .. } => "Camera API not supported. Ensure HTTPS.".to_string(),
            Self::PermissionDenied { .. } => "Camera access denied. Allow permissions.".to_string(),
            Self::NoDevice { detail, .. } => format!("Error: No camera found ({detail})"),
            Self::Acquisition { detail, .. } => format!("Error: {detail}"),
            Self::StartFailed { detail, .. } => format!("Error starting QR scanner: {detail}"),
            Self::Stream { source, .. } => format!("Error: {source}"),
        }
    }

    /// Underlying cause without location, for wrapping into another variant.
    pub fn detail(&self) -> String {
        match self {
            Self::Unsupported { .. } => "camera API not supported".to_string(),
            Self::PermissionDenied { detail, .. }
            | Self::NoDevice { detail, .. }
            | Self::Acquisition { detail, .. }
            | Self::StartFailed { detail, .. } => detail.clone(),
            Self::Stream { source, .. } => source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CameraError>;
