//! File-backed snapshot store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::{validate_key, SnapshotStore};

/// Durable key/value store: one JSON document per key under a base
/// directory.
///
/// ## Atomic Replace
/// ```text
/// save("retailsports_cart", json)
///      │
///      ▼
/// write <dir>/retailsports_cart.json.tmp
///      │
///      ▼
/// rename to <dir>/retailsports_cart.json   (atomic on POSIX)
/// ```
///
/// A crash mid-write leaves either the previous document or the new one,
/// never a truncated file. Readers therefore always see a parseable
/// snapshot or nothing.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;

        Ok(FileStore { dir })
    }

    /// The base directory documents are stored under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn io_error(key: &str, source: io::Error) -> StoreError {
        StoreError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl SnapshotStore for FileStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;

        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error(key, err)),
        }
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp, value).map_err(|err| Self::io_error(key, err))?;
        fs::rename(&tmp, &path).map_err(|err| Self::io_error(key, err))?;

        debug!(key = %key, bytes = value.len(), "snapshot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        validate_key(key)?;

        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_error(key, err)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch_store() -> (TempDir, FileStore) {
        let tmp = TempDir::new().expect("temp dir");
        let store = FileStore::new(tmp.path().join("snapshots")).expect("store opens");
        (tmp, store)
    }

    #[test]
    fn test_load_absent_key() {
        let (_tmp, store) = scratch_store();
        assert_eq!(store.load("retailsports_cart").unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let (_tmp, store) = scratch_store();
        store.save("retailsports_cart", "{\"items\":[]}").unwrap();

        assert_eq!(
            store.load("retailsports_cart").unwrap().as_deref(),
            Some("{\"items\":[]}")
        );
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let (_tmp, store) = scratch_store();
        store.save("k", "first").unwrap();
        store.save("k", "second").unwrap();

        assert_eq!(store.load("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (_tmp, store) = scratch_store();
        store.save("k", "value").unwrap();

        assert!(store.dir().join("k.json").exists());
        assert!(!store.dir().join("k.json.tmp").exists());
    }

    #[test]
    fn test_remove() {
        let (_tmp, store) = scratch_store();
        store.save("k", "v").unwrap();
        store.remove("k").unwrap();

        assert_eq!(store.load("k").unwrap(), None);
        assert!(!store.dir().join("k.json").exists());

        // Removing an absent key is not an error
        store.remove("k").unwrap();
    }

    #[test]
    fn test_reopen_reads_existing_documents() {
        let (_tmp, store) = scratch_store();
        store.save("retailsports_cart", "persisted").unwrap();

        let reopened = FileStore::new(store.dir()).unwrap();
        assert_eq!(
            reopened.load("retailsports_cart").unwrap().as_deref(),
            Some("persisted")
        );
    }

    #[test]
    fn test_traversal_key_rejected() {
        let (_tmp, store) = scratch_store();
        assert!(matches!(
            store.save("../escape", "v"),
            Err(StoreError::InvalidKey(_))
        ));
    }
}
