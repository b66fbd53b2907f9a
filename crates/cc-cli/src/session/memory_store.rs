use crate::session::{SessionError, SessionResult, SessionStore};

use std::sync::RwLock;

/// Process-local session, gone when the process exits.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store(&self, token: &str) -> SessionResult<()> {
        if token.is_empty() {
            return Err(SessionError::empty_token());
        }
        let mut guard = self.token.write().unwrap_or_else(|p| p.into_inner());
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        let mut guard = self.token.write().unwrap_or_else(|p| p.into_inner());
        *guard = None;
        Ok(())
    }
}
