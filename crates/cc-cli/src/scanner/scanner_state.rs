use serde::Serialize;

/// Where the scan adapter is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScannerState {
    #[default]
    Idle,
    RequestingCameraPermission,
    Scanning,
    Decoded,
    Stopped,
    PermissionDenied,
}

impl ScannerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::RequestingCameraPermission => "requesting_camera_permission",
            Self::Scanning => "scanning",
            Self::Decoded => "decoded",
            Self::Stopped => "stopped",
            Self::PermissionDenied => "permission_denied",
        }
    }

    /// Whether a camera lease may be alive in this state.
    pub fn holds_camera(&self) -> bool {
        matches!(self, Self::RequestingCameraPermission | Self::Scanning)
    }
}

impl std::fmt::Display for ScannerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
