//! The product entry record stored in persisted collections.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::unit::SaleUnit;

/// Placeholder shown when a product carries no supplier name.
pub const SUPPLIER_PLACEHOLDER: &str = "—";

/// One product instance within a persisted collection.
///
/// The same record shape backs both collections; `quantity` is only ever
/// populated for pre-order entries and is skipped during serialization when
/// absent, so liked entries round-trip without it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    /// Unique key within a collection.
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Display-only price string.
    #[serde(default)]
    pub price: String,
    /// Supplier display name; an em-dash placeholder when unknown.
    #[serde(default = "default_supplier")]
    pub supplier_name: String,
    /// Product image URL; empty when none (a placeholder is substituted at
    /// render time).
    #[serde(default)]
    pub image_url: String,
    /// Opaque category reference.
    #[serde(default)]
    pub category_id: String,
    /// Whether the product is sold by approximate weight.
    #[serde(default)]
    pub is_weight_based: bool,
    /// Pre-order quantity; `None` for entries outside the pre-order basket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

fn default_supplier() -> String {
    SUPPLIER_PLACEHOLDER.to_string()
}

impl ProductEntry {
    /// The sale unit derived from the weight-based flag.
    #[must_use]
    pub const fn sale_unit(&self) -> SaleUnit {
        SaleUnit::from_weight_flag(self.is_weight_based)
    }

    /// The entry's quantity coerced to a number and clamped to the unit
    /// minimum. A missing quantity counts as 1 before clamping.
    #[must_use]
    pub fn normalized_quantity(&self) -> f64 {
        self.sale_unit().normalize(self.quantity.unwrap_or(1.0))
    }

    /// Copy of this entry with its quantity re-normalized.
    #[must_use]
    pub fn with_normalized_quantity(&self) -> Self {
        let mut entry = self.clone();
        entry.quantity = Some(self.normalized_quantity());
        entry
    }
}
