use std::{any::TypeId, collections::HashMap, fmt};

use super::{Event, EventError, handler_name};

type Handler<L> = Box<dyn Fn(&mut L, &mut dyn Event)>;

/// Routes events to the handlers of one listener.
///
/// Routes are registered up front with [`on`](Self::on), one per event type.
/// Registering a second handler for the same type replaces the first.
pub struct EventListenerService<L> {
    listener: L,
    routes: HashMap<TypeId, Handler<L>>,
}

impl<L: 'static> EventListenerService<L> {
    pub fn new(listener: L) -> Self {
        Self {
            listener,
            routes: HashMap::new(),
        }
    }

    /// Registers `handler` for events of type `E`.
    pub fn on<E, F>(mut self, handler: F) -> Self
    where
        E: Event,
        F: Fn(&mut L, &mut E) + 'static,
    {
        let route: Handler<L> = Box::new(move |listener: &mut L, event: &mut dyn Event| {
            if let Some(event) = event.as_any_mut().downcast_mut::<E>() {
                handler(listener, event);
            }
        });
        if self.routes.insert(TypeId::of::<E>(), route).is_some() {
            tracing::debug!(
                event = std::any::type_name::<E>(),
                "Replacing previously registered handler"
            );
        }
        self
    }

    /// Returns true if a handler is registered for `E`.
    pub fn handles<E: Event>(&self) -> bool {
        self.routes.contains_key(&TypeId::of::<E>())
    }

    /// Passes `event` to the handler registered for its concrete type.
    ///
    /// Fails with [`EventError::Unhandled`] naming the conventional handler
    /// when none is registered.
    pub fn handle(&mut self, event: &mut dyn Event) -> Result<(), EventError> {
        let name = event.event_name();
        let handler = handler_name(&name);

        let Some(route) = self.routes.get(&(*event).type_key()) else {
            tracing::debug!(event = %name, handler = %handler, "No handler registered");
            return Err(EventError::Unhandled {
                event: name,
                handler,
            });
        };

        tracing::debug!(event = %name, handler = %handler, "Dispatching event");
        route(&mut self.listener, event);
        Ok(())
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}

impl<L: fmt::Debug> fmt::Debug for EventListenerService<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListenerService")
            .field("listener", &self.listener)
            .field("routes", &self.routes.len())
            .finish()
    }
}
