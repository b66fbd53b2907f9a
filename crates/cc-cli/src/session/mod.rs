//! Admin session: one opaque bearer token, present while logged in.
//!
//! The token is never inspected. It is set on login and cleared on logout or on any
//! 401 from the backend.

pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;
pub(crate) mod session_file;

pub use error::{Result as SessionResult, SessionError};
pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;
pub use session_file::SessionFile;

/// Storage for the admin bearer token.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;

    fn store(&self, token: &str) -> SessionResult<()>;

    fn clear(&self) -> SessionResult<()>;

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
