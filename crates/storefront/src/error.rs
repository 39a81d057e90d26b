//! Unified error handling for the cart engine.
//!
//! Decode failures while *reading* a collection never surface here; they
//! degrade to an empty collection in [`crate::store`]. `CartError` covers
//! the failures a caller can act on: storage writes, serialization, and
//! template rendering.

use thiserror::Error;

use crate::storage::StorageError;

/// Engine-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// Storage write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Collection serialization failed.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// View template rendering failed.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
