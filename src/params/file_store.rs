//! File-backed parameter store.
//!
//! One file per key under a root directory, the same layout the on-device
//! supervisor reads. Writes land in a hidden temp file and are renamed into
//! place so a concurrent reader never observes a torn value.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::{ParamStore, StoreError};

/// Persistent parameter store rooted at a directory.
pub struct FileParamStore {
    root: PathBuf,
}

impl FileParamStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Directory this store reads and writes.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn write_value(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let tmp = self.root.join(format!(".{}.tmp", key));
        let io_err = |source| StoreError::Io {
            path: tmp.clone(),
            source,
        };

        let mut file = fs::File::create(&tmp).map_err(&io_err)?;
        file.write_all(value.as_bytes()).map_err(&io_err)?;
        file.sync_all().map_err(&io_err)?;

        fs::rename(&tmp, self.key_path(key)).map_err(|source| StoreError::Io {
            path: self.key_path(key),
            source,
        })
    }
}

impl ParamStore for FileParamStore {
    fn get(&self, key: &str) -> String {
        fs::read_to_string(self.key_path(key)).unwrap_or_default()
    }

    fn put(&self, key: &str, value: &str) {
        if let Err(e) = self.write_value(key, value) {
            tracing::warn!("failed to write param {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("failed to remove param {}: {}", key, e),
        }
    }
}
