//! Events and convention-based dispatch.
//!
//! An event is any type implementing [`Event`]. It embeds a [`BaseEvent`]
//! carrying the state shared by all events: when it was created, whether it
//! was cancelled, a status flag and the errors collected while handling it.
//!
//! Events are routed to handlers by an [`EventListenerService`], which maps
//! each event type to one handler on a listener. By convention the handler
//! for `UserCreated` is named `userCreatedHandler` (see [`handler_name`]);
//! that name is what an unhandled event reports.
//!
//! ```
//! use sundry::{BaseEvent, Event, EventListenerService};
//!
//! #[derive(Debug, Default)]
//! struct UserCreated {
//!     base: BaseEvent,
//!     name: String,
//! }
//!
//! impl Event for UserCreated {
//!     fn base(&self) -> &BaseEvent { &self.base }
//!     fn base_mut(&mut self) -> &mut BaseEvent { &mut self.base }
//! }
//!
//! let mut service = EventListenerService::new(Vec::<String>::new())
//!     .on(|seen: &mut Vec<String>, event: &mut UserCreated| {
//!         seen.push(event.name.clone());
//!         event.base_mut().set_status(true);
//!     });
//!
//! let mut event = UserCreated { name: "ada".into(), ..Default::default() };
//! service.handle(&mut event)?;
//!
//! assert!(event.base().status());
//! assert_eq!(service.listener(), &["ada".to_string()]);
//! assert_eq!(event.summary(), "Event: UserCreated fired");
//! # Ok::<(), sundry::Error>(())
//! ```

use std::{
    any::{Any, TypeId},
    fmt::Debug,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    Value,
    clock::{Clock, SystemClock},
    text, util,
};

pub mod errors;
mod listener;

pub use errors::EventError;
pub use listener::EventListenerService;

/// State shared by every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEvent {
    created_at: DateTime<Utc>,
    cancelled: bool,
    status: bool,
    errors: Vec<Value>,
}

impl BaseEvent {
    /// Creates an event stamped with the current system time.
    pub fn new() -> Self {
        Self::with_clock(&SystemClock)
    }

    /// Creates an event stamped by `clock`.
    pub fn with_clock(clock: &dyn Clock) -> Self {
        Self {
            created_at: clock.now(),
            cancelled: false,
            status: false,
            errors: Vec::new(),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> bool {
        self.status
    }

    pub fn set_status(&mut self, status: bool) -> &mut Self {
        self.status = status;
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn set_cancelled(&mut self, cancelled: bool) -> &mut Self {
        self.cancelled = cancelled;
        self
    }

    pub fn errors(&self) -> &[Value] {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: Vec<Value>) -> &mut Self {
        self.errors = errors;
        self
    }

    pub fn add_error(&mut self, error: impl Into<Value>) -> &mut Self {
        self.errors.push(error.into());
        self
    }
}

impl Default for BaseEvent {
    fn default() -> Self {
        Self::new()
    }
}

/// Upcasting to [`Any`] for concrete event types.
///
/// Implemented for every sized `'static` type. On a trait object call these
/// through an explicit deref (`(*event).type_key()`) so the object's own
/// type is reported rather than the reference's.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn type_key(&self) -> TypeId;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_key(&self) -> TypeId {
        TypeId::of::<T>()
    }
}

/// Something that happened and can be handed to listeners.
pub trait Event: AsAny + Debug {
    fn base(&self) -> &BaseEvent;

    fn base_mut(&mut self) -> &mut BaseEvent;

    /// The event's short name, the bare type name by default.
    fn event_name(&self) -> String {
        util::class_basename(std::any::type_name::<Self>()).to_string()
    }

    /// A one-line description such as `Event: UserCreated fired`.
    fn summary(&self) -> String {
        format!("Event: {} fired", self.event_name())
    }
}

impl Event for BaseEvent {
    fn base(&self) -> &BaseEvent {
        self
    }

    fn base_mut(&mut self) -> &mut BaseEvent {
        self
    }
}

/// The conventional handler name for an event name.
///
/// ```
/// # use sundry::event::handler_name;
/// assert_eq!(handler_name("UserCreated"), "userCreatedHandler");
/// ```
pub fn handler_name(event_name: &str) -> String {
    text::lcfirst(event_name) + "Handler"
}
