//! Headless page model: the engine's view of the storefront page.
//!
//! The page carries the two render targets (favorites and pre-order lists),
//! the registered like controls whose visual state is recomputed after
//! every mutation, the free-text confirm inputs, and the banner stack.
//! A `None` region means the container is absent on this page; the
//! corresponding render is skipped silently rather than treated as an
//! error.

use crate::banners::BannerStack;

/// Data attribute names carried on product controls.
pub mod attrs {
    pub const PRODUCT_ID: &str = "product-id";
    pub const PRODUCT_NAME: &str = "product-name";
    pub const PRODUCT_PRICE: &str = "product-price";
    pub const PRODUCT_SUPPLIER: &str = "product-supplier";
    pub const PRODUCT_IMAGE: &str = "product-image";
    pub const PRODUCT_CATEGORY_ID: &str = "product-category-id";
    pub const PRODUCT_IS_WEIGHT_BASED: &str = "product-is-weight-based";

    /// Role markers resolved by event dispatch.
    pub const LIKE_BTN: &str = "like-btn";
    pub const PREORDER_BTN: &str = "preorder-btn";
    pub const PREORDER_QTY: &str = "preorder-qty";
}

/// Ordered bag of data attributes read off a UI control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<(String, String)>,
}

impl Dataset {
    /// Empty dataset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a dataset from attribute name/value pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the attribute is present at all (marker attributes carry an
    /// empty value).
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Set or replace an attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }
}

/// Displayed state of a like control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeAppearance {
    /// Button label.
    pub label: String,
    /// Button color class.
    pub css_class: &'static str,
}

impl LikeAppearance {
    /// The appearance for a given liked/unliked state.
    #[must_use]
    pub fn for_state(liked: bool) -> Self {
        if liked {
            Self {
                label: "💔 Remove like".to_string(),
                css_class: "btn-danger",
            }
        } else {
            Self {
                label: "❤️ Like".to_string(),
                css_class: "btn-outline-danger",
            }
        }
    }
}

/// A like button registered on the page.
///
/// The same product may appear behind several controls (product grid,
/// favorites card); each is registered separately and all of them are
/// resynced together.
#[derive(Debug, Clone)]
pub struct LikeControl {
    /// The control's product attributes.
    pub dataset: Dataset,
    /// Current displayed state.
    pub appearance: LikeAppearance,
}

impl LikeControl {
    /// Register a control; its appearance starts unliked until the first
    /// sync pass.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            appearance: LikeAppearance::for_state(false),
        }
    }
}

/// A render target holding the last generated HTML fragment.
#[derive(Debug, Clone, Default)]
pub struct Region {
    /// The fully regenerated fragment.
    pub html: String,
}

/// The engine's projection of the page.
#[derive(Debug, Clone)]
pub struct PageModel {
    /// Favorites list container; `None` when absent from the page.
    pub favorites: Option<Region>,
    /// Pre-order list container; `None` when absent from the page.
    pub preorder: Option<Region>,
    /// Registered like controls.
    pub like_controls: Vec<LikeControl>,
    /// Free-text pickup time for confirm.
    pub pickup_time: String,
    /// Free-text comment for confirm.
    pub comment: String,
    /// Stacked notification banners, newest first.
    pub banners: BannerStack,
}

impl Default for PageModel {
    /// A full page: both containers present, no controls registered yet.
    fn default() -> Self {
        Self {
            favorites: Some(Region::default()),
            preorder: Some(Region::default()),
            like_controls: Vec::new(),
            pickup_time: String::new(),
            comment: String::new(),
            banners: BannerStack::new(),
        }
    }
}

impl PageModel {
    /// A page with neither list container (e.g. a product detail page that
    /// only carries like/pre-order buttons).
    #[must_use]
    pub fn without_containers() -> Self {
        Self {
            favorites: None,
            preorder: None,
            ..Self::default()
        }
    }
}
