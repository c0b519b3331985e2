use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place, so
/// a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Write {
            key: dir.display().to_string(),
            source,
        })?;
        tracing::debug!(dir = %dir.display(), "file store opened");
        Ok(Self { dir })
    }

    /// The directory holding the stored files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let write_err = |source| StoreError::Write {
            key: key.to_string(),
            source,
        };
        std::fs::write(&tmp, value).map_err(write_err)?;
        std::fs::rename(&tmp, &path).map_err(write_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn creates_directory_on_open() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested/data");
        let store = FileStore::open(&dir).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn missing_file_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).unwrap();
        assert_eq!(store.get("lostFoundItems").unwrap(), None);
    }

    #[test]
    fn value_survives_reopen() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::open(temp.path()).unwrap();
        store.set("lostFoundClaims", "[]".into()).unwrap();

        let reopened = FileStore::open(temp.path()).unwrap();
        assert_eq!(reopened.get("lostFoundClaims").unwrap().as_deref(), Some("[]"));
        assert!(temp.path().join("lostFoundClaims.json").is_file());
        assert!(!temp.path().join("lostFoundClaims.json.tmp").exists());
    }
}
