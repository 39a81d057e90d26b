//! Core type definitions.

mod id;
mod product;
mod unit;

pub use id::*;
pub use product::*;
pub use unit::*;
