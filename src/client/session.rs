// src/client/session.rs
//! Client-side session state.
//!
//! A [`Session`] is created when login or registration succeeds, persisted
//! through a [`SessionStorage`] and handed explicitly to the calls that need
//! it. The server never checks the token.

use super::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
}

impl Session {
    /// New session with a freshly generated opaque token.
    pub fn new(email: impl Into<String>, username: Option<String>) -> Self {
        Self {
            user: SessionUser {
                email: email.into(),
                username,
            },
            token: format!("session-{}", Uuid::new_v4()),
        }
    }
}

/// Raw persistence for one serialised session.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> ClientResult<Option<String>>;
    fn save(&self, raw: &str) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// Keeps the session JSON in a single file.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn storage_error(err: std::io::Error) -> ClientError {
    ClientError::Storage(err.to_string())
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> ClientResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(err)),
        }
    }

    fn save(&self, raw: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(storage_error)?;
        }
        fs::write(&self.path, raw).map_err(storage_error)
    }

    fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error(err)),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled storage, e.g. with data written by an earlier run.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    fn lock(&self) -> ClientResult<std::sync::MutexGuard<'_, Option<String>>> {
        self.slot
            .lock()
            .map_err(|_| ClientError::Storage("session slot poisoned".into()))
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, raw: &str) -> ClientResult<()> {
        *self.lock()? = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.lock()? = None;
        Ok(())
    }
}

/// Owns the current session and keeps it in step with storage.
pub struct SessionManager<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: SessionStorage> SessionManager<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Rehydrates from storage. Data that does not parse as a session is
    /// wiped so the next start begins logged out.
    pub fn restore(&mut self) -> ClientResult<Option<&Session>> {
        self.current = match self.storage.load()? {
            None => None,
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable stored session");
                    self.storage.clear()?;
                    None
                }
            },
        };
        Ok(self.current.as_ref())
    }

    pub fn establish(&mut self, session: Session) -> ClientResult<&Session> {
        let raw = serde_json::to_string(&session)?;
        self.storage.save(&raw)?;
        Ok(self.current.insert(session))
    }

    pub fn clear(&mut self) -> ClientResult<()> {
        self.current = None;
        self.storage.clear()
    }
}
