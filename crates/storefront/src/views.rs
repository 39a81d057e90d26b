//! View models and templates for the favorites and pre-order lists.
//!
//! Both views are fully regenerated from their collections on every
//! relevant state change; nothing is patched incrementally. Rendered
//! favorite cards re-emit the full `product-*` attribute set on their
//! controls so extraction can round-trip an entry straight from markup.

use askama::Template;

use farmstand_core::ProductEntry;

use crate::filters;

/// Favorite card display data.
#[derive(Debug, Clone)]
pub struct FavoriteItemView {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub supplier_name: String,
    pub image_url: String,
    pub category_id: String,
    /// `"1"`/`"0"`, re-emitted as the weight-based attribute.
    pub weight_flag: &'static str,
}

impl From<&ProductEntry> for FavoriteItemView {
    fn from(entry: &ProductEntry) -> Self {
        Self {
            id: entry.id.as_i64(),
            name: entry.name.clone(),
            price: entry.price.clone(),
            supplier_name: entry.supplier_name.clone(),
            image_url: entry.image_url.clone(),
            category_id: entry.category_id.clone(),
            weight_flag: if entry.is_weight_based { "1" } else { "0" },
        }
    }
}

/// Pre-order line display data.
#[derive(Debug, Clone)]
pub struct PreorderItemView {
    pub id: i64,
    pub name: String,
    pub supplier_name: String,
    /// Normalized quantity, formatted without trailing zeros.
    pub quantity: String,
    /// Input minimum for the entry's sale unit.
    pub min: String,
    /// Input step for the entry's sale unit.
    pub step: String,
    /// Human-readable unit suffix.
    pub suffix: &'static str,
}

impl From<&ProductEntry> for PreorderItemView {
    fn from(entry: &ProductEntry) -> Self {
        let unit = entry.sale_unit();
        Self {
            id: entry.id.as_i64(),
            name: entry.name.clone(),
            supplier_name: entry.supplier_name.clone(),
            quantity: entry.normalized_quantity().to_string(),
            min: unit.minimum().to_string(),
            step: unit.step().to_string(),
            suffix: unit.suffix(),
        }
    }
}

/// Favorites list fragment.
#[derive(Template)]
#[template(path = "favorites.html")]
pub struct FavoritesTemplate {
    pub items: Vec<FavoriteItemView>,
}

impl FavoritesTemplate {
    /// Build the view from the likes collection.
    #[must_use]
    pub fn from_entries(entries: &[ProductEntry]) -> Self {
        Self {
            items: entries.iter().map(FavoriteItemView::from).collect(),
        }
    }
}

/// Pre-order list fragment.
#[derive(Template)]
#[template(path = "preorder.html")]
pub struct PreorderTemplate {
    pub items: Vec<PreorderItemView>,
}

impl PreorderTemplate {
    /// Build the view from the pre-order collection. Quantities are
    /// re-normalized as part of building the view.
    #[must_use]
    pub fn from_entries(entries: &[ProductEntry]) -> Self {
        Self {
            items: entries.iter().map(PreorderItemView::from).collect(),
        }
    }
}
