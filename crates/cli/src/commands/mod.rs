//! CLI command implementations.

pub mod clear;
pub mod show;
