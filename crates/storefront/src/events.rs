//! Event delegation: typed UI events and control role resolution.
//!
//! Controls are never bound to handlers at render time. Events arrive at
//! the engine with their originating control's dataset, the control role
//! is resolved from marker attributes at handling time, and the dispatch
//! table routes from there. Re-rendering a view therefore never requires
//! re-attaching anything.

use crate::page::{Dataset, attrs};

/// What kind of control an event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    /// Like toggle button.
    Like,
    /// Pre-order toggle button.
    Preorder,
    /// Pre-order quantity input.
    QuantityEdit,
}

impl ControlRole {
    /// Resolve the role from a control's marker attributes.
    ///
    /// Mirrors delegation order: a like marker wins over a pre-order
    /// marker when both are present. `None` means the event came from an
    /// unrelated element and falls through.
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Option<Self> {
        if dataset.has(attrs::LIKE_BTN) {
            Some(Self::Like)
        } else if dataset.has(attrs::PREORDER_BTN) {
            Some(Self::Preorder)
        } else if dataset.has(attrs::PREORDER_QTY) {
            Some(Self::QuantityEdit)
        } else {
            None
        }
    }
}

/// A user-interaction event delegated to the engine.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A click somewhere on the page.
    Click {
        /// Dataset of the closest control.
        dataset: Dataset,
    },
    /// An input's value changed.
    Change {
        /// Dataset of the changed control.
        dataset: Dataset,
        /// The raw typed value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_resolution() {
        let like = Dataset::from_pairs([("like-btn", ""), ("product-id", "1")]);
        assert_eq!(ControlRole::from_dataset(&like), Some(ControlRole::Like));

        let preorder = Dataset::from_pairs([("preorder-btn", "")]);
        assert_eq!(
            ControlRole::from_dataset(&preorder),
            Some(ControlRole::Preorder)
        );

        let qty = Dataset::from_pairs([("preorder-qty", ""), ("product-id", "1")]);
        assert_eq!(
            ControlRole::from_dataset(&qty),
            Some(ControlRole::QuantityEdit)
        );
    }

    #[test]
    fn test_unrelated_controls_fall_through() {
        let plain = Dataset::from_pairs([("product-id", "1")]);
        assert_eq!(ControlRole::from_dataset(&plain), None);
    }
}
