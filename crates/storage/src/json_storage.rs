//! JSON file storage implementation.
//!
//! Stores each key as `<key>.json` inside a data directory (`.finquest` by
//! default). Values are written verbatim; the caller owns the serialization.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{KeyValueStore, Result, StorageError};

/// File-based key-value store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory holding the stored files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::write(&path, value.as_bytes())?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::remove_file(&path).or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
        })?;
        debug!("Removed {}", path.display());
        Ok(())
    }
}
