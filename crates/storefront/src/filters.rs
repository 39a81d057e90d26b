//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Appends the currency sign to a display price.
///
/// Usage in templates: `{{ item.price|price }}`
#[askama::filter_fn]
pub fn price(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("{value} ₽"))
}

/// Substitutes the placeholder image for an empty image URL.
///
/// Usage in templates: `{{ item.image_url|or_placeholder }}`
#[askama::filter_fn]
pub fn or_placeholder(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let url = value.to_string();
    if url.is_empty() {
        Ok("https://placehold.co/400x250?text=Product".to_string())
    } else {
        Ok(url)
    }
}
