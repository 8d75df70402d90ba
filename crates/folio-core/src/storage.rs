// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! Storage port and keyed persistence service for portfolio state.
//!
//! Values live under fixed string keys in a flat key-value scope, matching
//! the schema the public page writes: the document itself is JSON, while the
//! edit-mode flag and the theme/palette selections are bare strings.

use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Key holding the JSON-serialized portfolio document.
pub const DOCUMENT_KEY: &str = "portfolio-data";
/// Key holding the edit-mode flag (`"true"` or absent; absent means locked).
pub const EDIT_MODE_KEY: &str = "portfolio-edit-mode";
/// Key holding the theme selection (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "portfolio-theme";
/// Key holding the palette selection (`"blue-violet"` or `"sunset"`).
pub const PALETTE_KEY: &str = "portfolio-palette";

/// Storage port for raw blobs (keyed by logical name).
pub trait KvStore {
    /// Load a raw blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StorageError>;
    /// Persist a raw blob, unconditionally overwriting any prior value.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;
    /// Delete the blob under `key`. Removing an absent key is a no-op.
    fn remove_raw(&self, key: &str) -> Result<(), StorageError>;
}

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Thin service that serializes values and delegates storage to a `KvStore`.
pub struct KvService<S> {
    store: S,
}

impl<S> KvService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> KvService<S>
where
    S: KvStore,
{
    /// Load and deserialize a JSON value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                let value = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(StorageError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a JSON value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }

    /// Read a boolean flag stored as the bare string `"true"`.
    /// Anything else, including an absent key, reads as `false`.
    pub fn load_flag(&self, key: &str) -> bool {
        matches!(self.store.load_raw(key), Ok(bytes) if bytes == b"true")
    }

    /// Write a boolean flag: `true` stores the bare string `"true"`,
    /// `false` removes the key entirely.
    pub fn set_flag(&self, key: &str, on: bool) -> Result<(), StorageError> {
        if on {
            self.store.save_raw(key, b"true")
        } else {
            self.store.remove_raw(key)
        }
    }

    /// Read a bare (non-JSON) string value. Returns `None` if missing or
    /// not valid UTF-8.
    pub fn load_str(&self, key: &str) -> Option<String> {
        self.store
            .load_raw(key)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Write a bare (non-JSON) string value.
    pub fn save_str(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.save_raw(key, value.as_bytes())
    }
}

/// In-memory `KvStore` for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryKvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Other("poisoned lock".into()))?;
        entries.get(key).cloned().ok_or(StorageError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Other("poisoned lock".into()))?;
        entries.insert(key.to_owned(), data.to_vec());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Other("poisoned lock".into()))?;
        entries.remove(key);
        Ok(())
    }
}
