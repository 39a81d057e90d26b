//! Sale-unit semantics for quantities.
//!
//! Products are sold either by approximate weight or by piece. The unit
//! governs the quantity minimum, step, and default used everywhere a
//! quantity is read, edited, or rendered.

use serde::{Deserialize, Serialize};

/// How a product is sold, governing quantity semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleUnit {
    /// Sold by approximate weight (kilograms).
    Weight,
    /// Sold by piece (packs).
    Piece,
}

impl SaleUnit {
    /// Derive the unit from the weight-based flag carried on product markup.
    #[must_use]
    pub const fn from_weight_flag(is_weight_based: bool) -> Self {
        if is_weight_based { Self::Weight } else { Self::Piece }
    }

    /// Smallest quantity a pre-order line may hold.
    #[must_use]
    pub const fn minimum(self) -> f64 {
        match self {
            Self::Weight => 0.1,
            Self::Piece => 1.0,
        }
    }

    /// Increment step for quantity inputs.
    #[must_use]
    pub const fn step(self) -> f64 {
        self.minimum()
    }

    /// Quantity assigned when a product first enters the pre-order basket.
    #[must_use]
    pub const fn default_quantity(self) -> f64 {
        match self {
            Self::Weight => 0.5,
            Self::Piece => 1.0,
        }
    }

    /// Human-readable unit suffix shown next to quantity inputs.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Weight => "kg (approx.)",
            Self::Piece => "packs",
        }
    }

    /// Clamp a raw quantity to this unit's valid range.
    ///
    /// Non-finite values (the result of unparseable input) and values below
    /// the minimum both come back as the minimum; everything else passes
    /// through unchanged.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let min = self.minimum();
        if !value.is_finite() || value < min {
            min
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimums() {
        assert!((SaleUnit::Weight.minimum() - 0.1).abs() < f64::EPSILON);
        assert!((SaleUnit::Piece.minimum() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_quantities() {
        assert!((SaleUnit::Weight.default_quantity() - 0.5).abs() < f64::EPSILON);
        assert!((SaleUnit::Piece.default_quantity() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_clamps_below_minimum() {
        assert!((SaleUnit::Weight.normalize(0.0) - 0.1).abs() < f64::EPSILON);
        assert!((SaleUnit::Piece.normalize(0.4) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_clamps_non_finite() {
        assert!((SaleUnit::Weight.normalize(f64::NAN) - 0.1).abs() < f64::EPSILON);
        assert!((SaleUnit::Piece.normalize(f64::INFINITY) - 1.0).abs() < f64::EPSILON);
        assert!((SaleUnit::Weight.normalize(f64::NEG_INFINITY) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_passes_valid_values() {
        assert!((SaleUnit::Weight.normalize(0.5) - 0.5).abs() < f64::EPSILON);
        assert!((SaleUnit::Piece.normalize(3.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_weight_flag() {
        assert_eq!(SaleUnit::from_weight_flag(true), SaleUnit::Weight);
        assert_eq!(SaleUnit::from_weight_flag(false), SaleUnit::Piece);
    }
}
