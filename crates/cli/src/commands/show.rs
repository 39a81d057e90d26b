//! Print a collection as pretty JSON.

use farmstand_core::CollectionKey;
use farmstand_storefront::Result;
use farmstand_storefront::storage::FileStorage;
use farmstand_storefront::store;

/// Load and print one collection. Corrupt or missing storage prints an
/// empty list, matching how the engine reads it.
pub fn run(storage: &FileStorage, key: CollectionKey) -> Result<()> {
    let items = store::load(storage, key);
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
