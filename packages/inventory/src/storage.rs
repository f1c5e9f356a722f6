//! # Storage — the key-value contract behind every backend
//!
//! [`Storage`] mirrors the browser's `localStorage`: string values addressed by
//! string keys, read and written synchronously. Implementations live in sibling
//! modules ([`crate::memory`], `file_store`, `local_storage`) and hold any
//! mutable state behind interior mutability, so every method takes `&self`.
//!
//! Unlike a UI cache, errors are surfaced: a write that did not land must reach
//! the caller as a [`StorageError`].

use crate::error::StorageError;

/// Synchronous key-value store holding serialised inventory records.
pub trait Storage {
    /// Read a key. `Ok(None)` when the key has never been written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a key, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
