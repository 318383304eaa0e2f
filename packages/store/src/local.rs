//! # Browser `localStorage`
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] used on the **web platform**.
//! It is a zero-size handle that looks up `window.localStorage` on every
//! call, so it is `Copy` and can be captured freely by UI closures.
//!
//! Unlike a read miss, failing to reach the storage object at all (private
//! browsing modes, sandboxed iframes) surfaces as [`Error::Storage`].

use web_sys::Storage;

use crate::error::{Error, Result};
use crate::session::KeyValueStorage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage> {
        let window = web_sys::window().ok_or_else(|| Error::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| Error::Storage(format!("{e:?}")))?
            .ok_or_else(|| Error::Storage("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }
}
