//! Product extraction from control attributes.
//!
//! The only bridge between rendered product markup and the entry data
//! model. Every attribute except the id may be missing; defaults match
//! what the page templates emit for unknown values.

use farmstand_core::{ProductEntry, ProductId, SUPPLIER_PLACEHOLDER};

use crate::page::{Dataset, attrs};

/// Read a product entry off a control's data attributes.
///
/// Returns `None` when the `product-id` attribute is missing or not an
/// integer; the triggering event is then ignored. `quantity` is never
/// taken from markup.
#[must_use]
pub fn product_from_dataset(dataset: &Dataset) -> Option<ProductEntry> {
    let id: i64 = dataset.get(attrs::PRODUCT_ID)?.trim().parse().ok()?;

    let supplier = dataset
        .get(attrs::PRODUCT_SUPPLIER)
        .filter(|s| !s.is_empty())
        .unwrap_or(SUPPLIER_PLACEHOLDER);

    Some(ProductEntry {
        id: ProductId::new(id),
        name: dataset.get(attrs::PRODUCT_NAME).unwrap_or_default().to_string(),
        price: dataset.get(attrs::PRODUCT_PRICE).unwrap_or_default().to_string(),
        supplier_name: supplier.to_string(),
        image_url: dataset.get(attrs::PRODUCT_IMAGE).unwrap_or_default().to_string(),
        category_id: dataset
            .get(attrs::PRODUCT_CATEGORY_ID)
            .unwrap_or_default()
            .to_string(),
        is_weight_based: dataset.get(attrs::PRODUCT_IS_WEIGHT_BASED) == Some("1"),
        quantity: None,
    })
}

/// Re-emit an entry's full attribute set, enabling extraction to
/// round-trip the entry from rendered markup without a storage lookup.
#[must_use]
pub fn dataset_from_product(entry: &ProductEntry) -> Dataset {
    let mut dataset = Dataset::new();
    dataset.set(attrs::PRODUCT_ID, entry.id.to_string());
    dataset.set(attrs::PRODUCT_NAME, entry.name.clone());
    dataset.set(attrs::PRODUCT_PRICE, entry.price.clone());
    dataset.set(attrs::PRODUCT_SUPPLIER, entry.supplier_name.clone());
    dataset.set(attrs::PRODUCT_IMAGE, entry.image_url.clone());
    dataset.set(attrs::PRODUCT_CATEGORY_ID, entry.category_id.clone());
    dataset.set(
        attrs::PRODUCT_IS_WEIGHT_BASED,
        if entry.is_weight_based { "1" } else { "0" },
    );
    dataset
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_full_attribute_set() {
        let ds = Dataset::from_pairs([
            ("product-id", "7"),
            ("product-name", "Honey"),
            ("product-price", "250"),
            ("product-supplier", "Meadow Farm"),
            ("product-image", "/img/honey.jpg"),
            ("product-category-id", "3"),
            ("product-is-weight-based", "1"),
        ]);
        let entry = product_from_dataset(&ds).unwrap();
        assert_eq!(entry.id, ProductId::new(7));
        assert_eq!(entry.name, "Honey");
        assert_eq!(entry.supplier_name, "Meadow Farm");
        assert!(entry.is_weight_based);
        assert!(entry.quantity.is_none());
    }

    #[test]
    fn test_missing_attributes_get_defaults() {
        let ds = Dataset::from_pairs([("product-id", "5")]);
        let entry = product_from_dataset(&ds).unwrap();
        assert_eq!(entry.name, "");
        assert_eq!(entry.supplier_name, SUPPLIER_PLACEHOLDER);
        assert_eq!(entry.image_url, "");
        assert!(!entry.is_weight_based);
    }

    #[test]
    fn test_weight_flag_requires_exact_one() {
        for flag in ["0", "true", "yes", ""] {
            let ds = Dataset::from_pairs([("product-id", "1"), ("product-is-weight-based", flag)]);
            assert!(!product_from_dataset(&ds).unwrap().is_weight_based, "{flag}");
        }
    }

    #[test]
    fn test_missing_or_bad_id_yields_none() {
        assert!(product_from_dataset(&Dataset::new()).is_none());
        let ds = Dataset::from_pairs([("product-id", "seven")]);
        assert!(product_from_dataset(&ds).is_none());
    }

    #[test]
    fn test_round_trip_through_dataset() {
        let ds = Dataset::from_pairs([
            ("product-id", "9"),
            ("product-name", "Raspberries"),
            ("product-price", "420"),
            ("product-is-weight-based", "1"),
        ]);
        let entry = product_from_dataset(&ds).unwrap();
        let back = product_from_dataset(&dataset_from_product(&entry)).unwrap();
        assert_eq!(back, entry);
    }
}
