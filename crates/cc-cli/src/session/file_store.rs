use crate::session::{SessionError, SessionFile, SessionResult, SessionStore};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::{info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session persisted as JSON so it survives between runs.
///
/// The token is cached in memory after the first read; every write goes to disk
/// first and only then updates the cache.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    cached: RwLock<Option<String>>,
}

impl FileSessionStore {
    /// Open the store at `path`, loading any existing session.
    ///
    /// A missing file means logged out. A corrupted file is moved aside and also
    /// treated as logged out.
    pub fn open(path: impl Into<PathBuf>) -> SessionResult<Self> {
        let path = path.into();
        let token = Self::load(&path)?;
        Ok(Self {
            path,
            cached: RwLock::new(token),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> SessionResult<Option<String>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No session file at {path:?}");
                return Ok(None);
            }
            Err(e) => return Err(SessionError::file_read(path.to_path_buf(), e)),
        };

        match serde_json::from_str::<SessionFile>(&contents) {
            Ok(session) if !session.token.is_empty() => {
                info!(
                    "Loaded session issued at {} (schema v{})",
                    session.issued_at, session.schema_version
                );
                Ok(Some(session.token))
            }
            Ok(_) => {
                warn!("Session file at {path:?} has an empty token; ignoring it");
                Ok(None)
            }
            Err(e) => {
                warn!("Session file corrupted at {path:?}: {e}");
                Self::backup_corrupted(path);
                Ok(None)
            }
        }
    }

    /// Renames `session.json` to `session.json.corrupted.{timestamp}`.
    fn backup_corrupted(path: &Path) {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup = path.as_os_str().to_owned();
        backup.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup);

        match fs::rename(path, &backup_path) {
            Ok(()) => warn!("Backed up corrupted session to {backup_path:?}"),
            Err(e) => warn!("Failed to back up corrupted session: {e}"),
        }
    }

    /// Writes via temp file, fsync, then atomic rename.
    fn save(&self, session: &SessionFile) -> SessionResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| SessionError::dir_creation(dir.to_path_buf(), e))?;
        }

        let mut temp = self.path.as_os_str().to_owned();
        temp.push(format!(".tmp.{}", std::process::id()));
        let temp_path = PathBuf::from(temp);

        let json = serde_json::to_string_pretty(session)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        match self.cached.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store(&self, token: &str) -> SessionResult<()> {
        if token.is_empty() {
            return Err(SessionError::empty_token());
        }

        self.save(&SessionFile::new(token))?;

        let mut guard = self.cached.write().unwrap_or_else(|p| p.into_inner());
        *guard = Some(token.to_string());
        info!("Saved session to {:?}", self.path);
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        {
            let mut guard = self.cached.write().unwrap_or_else(|p| p.into_inner());
            *guard = None;
        }

        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed session file {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_remove(self.path.clone(), e)),
        }
    }
}
