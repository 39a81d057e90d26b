//! Farmstand Storefront - headless client cart engine.
//!
//! This crate implements the client-side cart state for the storefront:
//! a favorites ("likes") collection and a pre-order basket, both persisted
//! through an injected key-value [`storage::Storage`], with HTML fragment
//! rendering for the two views and a stack of dismissible notification
//! banners.
//!
//! # Control flow
//!
//! UI event → load collection from storage → compute the new collection →
//! write it back in full → re-render the affected view(s) → optionally push
//! a banner. Storage is the sole source of truth; no in-memory cache is
//! kept between operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use farmstand_storefront::{CartManager, confirm::ConfirmClient};
//! use farmstand_storefront::page::{Dataset, PageModel};
//! use farmstand_storefront::storage::FileStorage;
//!
//! let confirm = ConfirmClient::new("https://shop.example/preorder/confirm".parse()?);
//! let mut cart = CartManager::new(FileStorage::new("./data"), PageModel::default(), confirm);
//! cart.init()?;
//! cart.dispatch(farmstand_storefront::events::UiEvent::Click {
//!     dataset: Dataset::from_pairs([("like-btn", ""), ("product-id", "7"), ("product-name", "Honey")]),
//! })?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod banners;
pub mod config;
pub mod confirm;
pub mod error;
pub mod events;
pub mod extract;
pub mod filters;
pub mod manager;
pub mod page;
pub mod storage;
pub mod store;
pub mod views;

mod likes;
mod preorder;

pub use error::{CartError, Result};
pub use manager::CartManager;
