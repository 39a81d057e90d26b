//! Persisted collection load/save over injected storage.
//!
//! Every mutation is read-modify-write: load the whole collection, compute
//! the new one, write it back in full. There is no partial write and no
//! caching layer.

use farmstand_core::{CollectionKey, ProductEntry};

use crate::error::Result;
use crate::storage::Storage;

/// Load a collection, degrading to empty on any decode failure.
///
/// A missing key, or content that fails to parse as a product list, yields
/// an empty collection; the failure is logged but never surfaced.
pub fn load<S: Storage + ?Sized>(storage: &S, key: CollectionKey) -> Vec<ProductEntry> {
    let Some(raw) = storage.get(key.as_str()) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            tracing::debug!(key = %key, error = %err, "discarding undecodable collection");
            Vec::new()
        }
    }
}

/// Serialize and write a collection back in full.
///
/// # Errors
///
/// Returns an error when serialization or the storage write fails.
pub fn save<S: Storage + ?Sized>(
    storage: &mut S,
    key: CollectionKey,
    items: &[ProductEntry],
) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    storage.set(key.as_str(), raw)?;
    Ok(())
}
