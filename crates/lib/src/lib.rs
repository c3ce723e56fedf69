//!
//! Sundry: small building blocks for working with loosely structured data.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A JSON-like tagged union with insertion-ordered maps. Every other module operates on it.
//! * **Paths (`arr`, `path`)**: Dot-notation access (`"user.profile.name"`) for reading, writing and removing nested values, plus flattening to and from dotted keys.
//! * **Collections (`collection::Collection`)**: An ordered keyed container with grouping, diffing, flipping and collapsing transformations.
//! * **Cursors (`cursor::Cursor`)**: A pagination descriptor with a derived page count.
//! * **Events (`event`)**: A base event record and a listener service routing each event type to its handler.
//! * **Text (`text`)**: Case conversion, truncation, slugs and random tokens.
//! * **Fallbacks (`util::Fallback`)**: Defaults given either as a value or as a closure evaluated only when needed.

pub mod arr;
pub mod clock;
pub mod collection;
pub mod cursor;
pub mod event;
pub mod path;
pub mod text;
pub mod util;
pub mod value;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use collection::{Collection, Key};
pub use cursor::Cursor;
pub use event::{BaseEvent, Event, EventListenerService};
pub use util::Fallback;
pub use value::{Map, Value};

/// Result type used throughout the Sundry library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Sundry library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured value conversion errors from the value module
    #[error(transparent)]
    Value(value::ValueError),

    /// Structured collection errors from the collection module
    #[error(transparent)]
    Collection(collection::CollectionError),

    /// Structured pagination errors from the cursor module
    #[error(transparent)]
    Cursor(cursor::CursorError),

    /// Structured dispatch errors from the event module
    #[error(transparent)]
    Event(event::EventError),

    /// Structured errors from the text module
    #[error(transparent)]
    Text(text::TextError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Value(_) => "value",
            Error::Collection(_) => "collection",
            Error::Cursor(_) => "cursor",
            Error::Event(_) => "event",
            Error::Text(_) => "text",
        }
    }

    /// Check if this error is caused by a value of the wrong type.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            Error::Collection(collection_err) => {
                collection_err.is_type_error() || collection_err.is_key_error()
            }
            _ => false,
        }
    }

    /// Check if this error indicates an event had no handler.
    pub fn is_unhandled(&self) -> bool {
        match self {
            Error::Event(event_err) => event_err.is_unhandled(),
            _ => false,
        }
    }

    /// Check if this error is caused by invalid pagination input.
    pub fn is_pagination_error(&self) -> bool {
        match self {
            Error::Cursor(cursor_err) => cursor_err.is_page_size_error(),
            _ => false,
        }
    }

    /// Check if this error comes from the OS random source.
    pub fn is_random_error(&self) -> bool {
        match self {
            Error::Text(text_err) => text_err.is_random_error(),
            _ => false,
        }
    }

    /// Check if this error is serialization related.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
