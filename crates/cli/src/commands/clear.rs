//! Clear persisted collections.

use farmstand_core::CollectionKey;
use farmstand_storefront::Result;
use farmstand_storefront::storage::FileStorage;
use farmstand_storefront::store;

/// Overwrite each given collection with an empty list.
pub fn run(mut storage: FileStorage, keys: &[CollectionKey]) -> Result<()> {
    for &key in keys {
        store::save(&mut storage, key, &[])?;
        println!("cleared {key}");
    }
    Ok(())
}
