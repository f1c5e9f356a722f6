//! # Error types
//!
//! Two layers, both built with `thiserror`:
//!
//! | Enum | Raised by |
//! |------|-----------|
//! | [`StorageError`] | A [`crate::Storage`] backend that could not read or write a key. |
//! | [`InventoryError`] | Every fallible [`crate::Inventory`] operation. Wraps [`StorageError`] and adds validation rejections and (de)serialisation failures. |
//!
//! Validation rejections leave the inventory and its backend untouched. Use
//! [`InventoryError::is_rejection`] to tell them apart from persistence failures,
//! which are not recoverable by the store itself.

use thiserror::Error;

/// Failure of a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("material name must not be empty")]
    EmptyName,

    #[error("quantity must not be negative, got {quantity}")]
    NegativeQuantity { quantity: i64 },

    #[error("missing required loan field: {field}")]
    MissingField { field: &'static str },

    #[error("material not found: {id}")]
    MaterialNotFound { id: String },

    #[error("invalid loan quantity {requested} ({available} available)")]
    InvalidQuantity { requested: i64, available: i64 },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stored `{key}` could not be parsed")]
    CorruptData {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize inventory: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("unsupported schema version {found} (this build reads up to {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },
}

impl InventoryError {
    /// True for input validation failures, which leave all state unchanged.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::EmptyName
                | Self::NegativeQuantity { .. }
                | Self::MissingField { .. }
                | Self::MaterialNotFound { .. }
                | Self::InvalidQuantity { .. }
        )
    }
}
