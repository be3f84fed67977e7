//! File-backed storage - one file per key under a data directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use board_core::ports::{KeyValueStorage, StorageError};

/// Durable key-value slots stored as `<dir>/<key>.json`.
///
/// Writes go to a temporary file which is then renamed over the old one, so
/// a failed write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    quota: Option<usize>,
}

impl FileStorage {
    /// Open (and create if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "Opened file storage");
        Ok(Self { dir, quota: None })
    }

    /// Cap the size of any single stored value.
    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = Some(quota);
        self
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    size: value.len(),
                    quota,
                });
            }
        }

        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        if let Err(e) = write_file(&tmp, value).and_then(|()| fs::rename(&tmp, &path)) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                tracing::debug!(path = %tmp.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn write_file(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set("mock_posts", "[]").unwrap();

        let reopened = FileStorage::open(dir.path()).unwrap();
        assert_eq!(reopened.get("mock_posts").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("user").unwrap(), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set("accessToken", "abc").unwrap();
        storage.remove("accessToken").unwrap();
        storage.remove("accessToken").unwrap();
        assert_eq!(storage.get("accessToken").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        for key in ["../escape", "a/b", ".hidden", ""] {
            assert!(matches!(
                storage.set(key, "x"),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn test_quota_rejects_large_value_and_keeps_old() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap().with_quota(4);
        storage.set("k", "1234").unwrap();

        let err = storage.set("k", "12345").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { size: 5, quota: 4, .. }));
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("1234"));
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        // a non-empty directory where the value file belongs makes the rename fail
        fs::create_dir_all(dir.path().join("k.json").join("inner")).unwrap();

        assert!(matches!(storage.set("k", "1"), Err(StorageError::Io(_))));
        assert!(!dir.path().join(".k.json.tmp").exists());
    }
}
