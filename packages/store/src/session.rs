//! # Session persistence
//!
//! [`SessionStore`] keeps the logged-in user's [`SessionRecord`] as JSON under
//! a single key of a [`KeyValueStorage`]. On the web that storage is the
//! browser's `localStorage` ([`crate::LocalStorage`]); tests and native builds
//! use [`crate::MemoryStorage`].
//!
//! A value that fails to decode is treated as "no session": it is logged,
//! removed, and [`SessionStore::load`] returns `None`. The recipes page is
//! gated solely on `load()` returning `Some`.

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::SessionRecord;

/// Storage key used by default for the session record.
pub const DEFAULT_SESSION_KEY: &str = "currentUser";

/// Synchronous string key-value storage.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Save, load and clear the current [`SessionRecord`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn save(&self, record: &SessionRecord) -> Result<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| crate::Error::Storage(e.to_string()))?;
        self.storage.set(&self.key, &json)?;
        debug!(username = %record.username, "Session saved");
        Ok(())
    }

    /// The stored session, or `None` when absent, unreadable or corrupt.
    pub fn load(&self) -> Option<SessionRecord> {
        let raw = match self.storage.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read session: {}", e.detail());
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Discarding unreadable session value: {e}");
                if let Err(e) = self.storage.remove(&self.key) {
                    warn!("Failed to remove session: {}", e.detail());
                }
                None
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)?;
        debug!("Session cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_some()
    }
}
