//! Error types for event dispatch.

use thiserror::Error;

/// Errors raised while dispatching events.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// The listener has no handler registered for the event's type
    #[error("Listener has no '{handler}' for event '{event}'")]
    Unhandled { event: String, handler: String },
}

impl EventError {
    /// Check if this error means no handler was found
    pub fn is_unhandled(&self) -> bool {
        matches!(self, EventError::Unhandled { .. })
    }
}

impl From<EventError> for crate::Error {
    fn from(err: EventError) -> Self {
        crate::Error::Event(err)
    }
}
