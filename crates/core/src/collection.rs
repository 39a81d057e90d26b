//! Ordered, id-deduplicated collection operations.
//!
//! Collections are plain vectors of [`ProductEntry`] in insertion order.
//! All operations are pure: they take a collection by value and return the
//! updated one, leaving persistence to the caller.

use crate::types::{ProductEntry, ProductId};

/// Insert or merge an entry, keyed by id.
///
/// When no entry matches, the incoming entry is appended. When one does,
/// it is merged in place: incoming fields win, except a missing incoming
/// `quantity` keeps the existing one (fields absent from the payload are
/// never dropped). Position within the collection is preserved.
#[must_use]
pub fn upsert_by_id(mut items: Vec<ProductEntry>, entry: ProductEntry) -> Vec<ProductEntry> {
    match items.iter_mut().find(|item| item.id == entry.id) {
        Some(existing) => {
            let kept_quantity = existing.quantity;
            *existing = entry;
            if existing.quantity.is_none() {
                existing.quantity = kept_quantity;
            }
        }
        None => items.push(entry),
    }
    items
}

/// Remove the entry with the given id. No-op when absent.
#[must_use]
pub fn remove_by_id(mut items: Vec<ProductEntry>, id: ProductId) -> Vec<ProductEntry> {
    items.retain(|item| item.id != id);
    items
}

/// Whether the collection holds an entry with the given id.
#[must_use]
pub fn contains(items: &[ProductEntry], id: ProductId) -> bool {
    items.iter().any(|item| item.id == id)
}

/// Look up an entry by id.
#[must_use]
pub fn find_by_id(items: &[ProductEntry], id: ProductId) -> Option<&ProductEntry> {
    items.iter().find(|item| item.id == id)
}

/// Re-normalize every entry's quantity (coerce to number, clamp to the
/// unit minimum). Applied whenever the pre-order collection is read for
/// rendering or submission.
#[must_use]
pub fn normalize_quantities(items: Vec<ProductEntry>) -> Vec<ProductEntry> {
    items
        .into_iter()
        .map(|item| item.with_normalized_quantity())
        .collect()
}
