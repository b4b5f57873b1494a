//! Session persistence and navigation hooks
//!
//! The backend session is a bearer token plus the logged-in user record, kept
//! under the keys [`TOKEN_KEY`] and [`USER_KEY`]. [`SessionStore`] is the
//! key/value seam; [`Navigator`] is where the "go to the login page" side
//! effect lands after a 401.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use secrecy::SecretString;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ApiError;

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the serialized user record
pub const USER_KEY: &str = "user";

/// Synchronous key/value storage for session data
pub trait SessionStore: Send + Sync + fmt::Debug {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;

    /// Delete a value; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), ApiError>;
}

/// Process-local session storage
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.write().insert(TOKEN_KEY.to_string(), token.into());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ApiError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Session storage backed by a JSON file, rewritten on every change
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`, loading existing entries if the file exists
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ApiError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| ApiError::Storage(format!("{}: {e}", path.display())))?;
            if raw.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw)
                    .map_err(|e| ApiError::Storage(format!("{}: {e}", path.display())))?
            }
        } else {
            HashMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "Opened session store");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the backing file in one rename, owner-only on unix
    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), ApiError> {
        let storage_err =
            |e: std::io::Error| ApiError::Storage(format!("{}: {e}", self.path.display()));

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)
            .map_err(|e| ApiError::Storage(format!("{}: {e}", dir.display())))?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| ApiError::Storage(e.to_string()))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(storage_err)?;
        tmp.write_all(json.as_bytes()).map_err(storage_err)?;
        tmp.flush().map_err(storage_err)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o600))
                .map_err(storage_err)?;
        }
        tmp.persist(&self.path).map_err(|e| storage_err(e.error))?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), ApiError> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

/// Typed access to the session keys of a [`SessionStore`]
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Wrap a store
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Current bearer token, if logged in
    pub fn token(&self) -> Option<SecretString> {
        self.store
            .get(TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .map(SecretString::from)
    }

    /// Whether a token is present
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Stored user record, if any and if it parses as JSON
    pub fn user(&self) -> Option<serde_json::Value> {
        self.store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Persist a fresh login
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&self, token: &str, user: Option<&serde_json::Value>) -> Result<(), ApiError> {
        self.store.set(TOKEN_KEY, token)?;
        match user {
            Some(user) => self.store.set(USER_KEY, &user.to_string()),
            None => self.store.remove(USER_KEY),
        }
    }

    /// Remove the token and user record
    ///
    /// Both keys are attempted even if the first removal fails.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered.
    pub fn clear(&self) -> Result<(), ApiError> {
        let token = self.store.remove(TOKEN_KEY);
        let user = self.store.remove(USER_KEY);
        token.and(user)
    }
}

/// Performs navigation after the session is dropped
pub trait Navigator: Send + Sync + fmt::Debug {
    /// Navigate to an absolute route such as `/admin/login`
    fn navigate(&self, route: &str);
}

/// Navigator that ignores navigation requests
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, route: &str) {
        debug!(route = %route, "Navigation ignored");
    }
}

/// Navigator that remembers every route it was sent to
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes navigated to, oldest first
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().clone()
    }

    /// Most recent route
    pub fn current(&self) -> Option<String> {
        self.routes.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().push(route.to_string());
    }
}
