use serde::{Deserialize, Serialize};

pub const SESSION_SCHEMA_VERSION: i32 = 1;

/// On-disk session record.
#[derive(Clone, Serialize, Deserialize)]
pub struct SessionFile {
    pub token: String,
    pub issued_at: String,
    pub schema_version: i32,
}

impl SessionFile {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            issued_at: chrono::Utc::now().to_rfc3339(),
            schema_version: SESSION_SCHEMA_VERSION,
        }
    }
}

impl std::fmt::Debug for SessionFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionFile")
            .field("token", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .field("schema_version", &self.schema_version)
            .finish()
    }
}
