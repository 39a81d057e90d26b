//! Farmstand Core - Shared types library.
//!
//! This crate provides common types used across all Farmstand components:
//! - `storefront` - Headless cart engine (favorites and pre-order basket)
//! - `cli` - Command-line tools for inspecting persisted collections
//!
//! # Architecture
//!
//! The core crate contains only types and pure collection operations - no
//! I/O, no storage access, no HTTP clients. This keeps it lightweight and
//! allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product entries, id newtypes, and sale-unit semantics
//! - [`collection`] - Ordered, id-deduplicated collection operations
//! - [`keys`] - Storage key names for the persisted collections

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collection;
pub mod keys;
pub mod types;

pub use keys::CollectionKey;
pub use types::*;
