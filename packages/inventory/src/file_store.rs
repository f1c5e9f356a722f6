//! # Filesystem-backed storage
//!
//! [`FileStore`] is a [`Storage`] implementation that keeps each key in its own
//! file. It is used on desktop and mobile platforms to retain the inventory
//! across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── schema_version.json
//! ├── materials.json
//! └── loans.json
//! ```
//!
//! The base directory is created on first write. A missing file reads as an
//! unset key; every other I/O failure is returned as [`StorageError::Io`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::Storage;

/// Filesystem-backed Storage for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl Storage for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.item_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.item_path(key), value)?;
        Ok(())
    }
}
