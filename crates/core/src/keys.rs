//! Storage key names for the persisted collections.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The two collections persisted in client storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    /// Liked ("favorite") products.
    Likes,
    /// The pre-order basket.
    Preorder,
}

impl CollectionKey {
    /// The storage key this collection is persisted under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Likes => "likes",
            Self::Preorder => "preorder",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a collection name.
#[derive(Debug, Error)]
#[error("unknown collection: {0} (expected \"likes\" or \"preorder\")")]
pub struct UnknownCollection(pub String);

impl FromStr for CollectionKey {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "likes" => Ok(Self::Likes),
            "preorder" => Ok(Self::Preorder),
            other => Err(UnknownCollection(other.to_string())),
        }
    }
}
