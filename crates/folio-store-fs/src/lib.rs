// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! Filesystem-backed `KvStore` for Folio (uses the platform config dir).
//!
//! One file per key, named exactly after the key, so the on-disk layout
//! mirrors the flat key-value schema the core expects.

use directories::ProjectDirs;
use folio_core::{KvStore, StorageError};
use std::fs;
use std::path::{Path, PathBuf};

/// Store values as flat files under a base directory.
pub struct FsKvStore {
    base: PathBuf,
}

impl FsKvStore {
    /// Create a store rooted at the user config directory
    /// (e.g. `~/.config/folio`).
    pub fn new() -> Result<Self, StorageError> {
        let proj = ProjectDirs::from("dev", "folio", "folio")
            .ok_or_else(|| StorageError::Other("could not resolve config dir".into()))?;
        Self::with_base(proj.config_dir().to_path_buf())
    }

    /// Create a store rooted at an explicit directory.
    pub fn with_base(base: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Directory the store writes into.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KvStore for FsKvStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(key);
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(StorageError::NotFound),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use folio_core::{KvService, EDIT_MODE_KEY, THEME_KEY};

    fn store_in(dir: &tempfile::TempDir) -> FsKvStore {
        FsKvStore::with_base(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn raw_values_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save_raw(THEME_KEY, b"dark").unwrap();
        assert_eq!(store.load_raw(THEME_KEY).unwrap(), b"dark");
        assert_eq!(fs::read(dir.path().join(THEME_KEY)).unwrap(), b"dark");
    }

    #[test]
    fn missing_keys_report_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            store_in(&dir).load_raw("absent"),
            Err(StorageError::NotFound)
        ));
    }

    #[test]
    fn removing_a_key_deletes_its_file_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save_raw(EDIT_MODE_KEY, b"true").unwrap();
        store.remove_raw(EDIT_MODE_KEY).unwrap();
        assert!(!dir.path().join(EDIT_MODE_KEY).exists());

        store.remove_raw(EDIT_MODE_KEY).unwrap();
    }

    #[test]
    fn json_documents_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let service = KvService::new(store_in(&dir));
        service.save("doc", &vec!["a", "b"]).unwrap();

        let service = KvService::new(store_in(&dir));
        let loaded: Vec<String> = service.load("doc").unwrap().unwrap();
        assert_eq!(loaded, ["a", "b"]);
    }
}
