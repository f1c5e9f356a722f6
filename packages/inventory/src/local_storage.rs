//! # Browser local storage — web persistence
//!
//! [`LocalStorageStore`] is the [`Storage`] implementation used on the **web
//! platform**. It reads and writes `window.localStorage` through `web-sys`, so the
//! inventory survives page reloads in the same browser profile.
//!
//! ## Keys
//!
//! | Store | localStorage key |
//! |-------|------------------|
//! | unscoped ([`LocalStorageStore::new`]) | `materials`, `loans`, `schema_version` |
//! | scoped to `"chem-lab"` | `chem-lab:materials`, `chem-lab:loans`, `chem-lab:schema_version` |
//!
//! The unscoped keys are the ones the single-page tracker has always used.
//!
//! ## Error handling
//!
//! A page without `window` or with storage disabled yields
//! [`StorageError::Unavailable`]. Exceptions thrown by `getItem`/`setItem`
//! (for example `QuotaExceededError`) become [`StorageError::Backend`].

use wasm_bindgen::JsValue;

use crate::error::StorageError;
use crate::storage::Storage;

/// `window.localStorage`-backed Storage for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore {
    namespace: Option<String>,
}

impl LocalStorageStore {
    /// Store using the bare `materials` / `loans` keys.
    pub fn new() -> Self {
        Self::with_namespace(None)
    }

    /// Store whose keys are prefixed with `<namespace>:`.
    pub fn with_namespace(namespace: Option<&str>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
        }
    }

    fn scoped_key(&self, key: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}:{key}"),
            None => key.to_string(),
        }
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no global window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Backend(format!("{value:?}"))
}

impl Storage for LocalStorageStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(&self.scoped_key(key))
            .map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(&self.scoped_key(key), value)
            .map_err(js_error)
    }
}
