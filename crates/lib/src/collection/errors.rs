//! Error types for collection transformations.

use thiserror::Error;

/// Errors raised by [`Collection`](super::Collection) operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An entry being collapsed holds neither a list nor a map
    #[error("Cannot collapse entry '{key}': expected list or map, found {found}")]
    NonAggregable { key: String, found: &'static str },

    /// A value was asked to act as a key but has no key form
    #[error("Value of type {found} cannot be used as a collection key")]
    InvalidKey { found: &'static str },

    /// A collection can only be built from a list or a map
    #[error("Cannot build a collection from {found}")]
    NotAContainer { found: &'static str },

    /// No integer key is left after the largest one
    #[error("Cannot push: integer key {last} is the largest possible key")]
    KeySpaceExhausted { last: i64 },
}

impl CollectionError {
    /// Check if this error was caused by a value that cannot become a key
    pub fn is_key_error(&self) -> bool {
        matches!(self, CollectionError::InvalidKey { .. })
    }

    /// Check if this error was caused by running out of integer keys
    pub fn is_exhausted(&self) -> bool {
        matches!(self, CollectionError::KeySpaceExhausted { .. })
    }

    /// Check if this error was caused by an entry of the wrong shape
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            CollectionError::NonAggregable { .. } | CollectionError::NotAContainer { .. }
        )
    }
}

impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
