//! Event integration tests
//!
//! Covers BaseEvent state and routing through EventListenerService.

use sundry::{BaseEvent, Event, EventListenerService, Value, event::EventError};

#[derive(Debug, Default)]
struct UserCreated {
    base: BaseEvent,
    user: String,
}

impl Event for UserCreated {
    fn base(&self) -> &BaseEvent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseEvent {
        &mut self.base
    }
}

#[derive(Debug, Default)]
struct OrderShipped {
    base: BaseEvent,
}

impl Event for OrderShipped {
    fn base(&self) -> &BaseEvent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseEvent {
        &mut self.base
    }
}

#[derive(Debug, Default)]
struct Renamed {
    base: BaseEvent,
}

impl Event for Renamed {
    fn base(&self) -> &BaseEvent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseEvent {
        &mut self.base
    }

    fn event_name(&self) -> String {
        "AccountRenamed".to_string()
    }
}

#[derive(Debug, Default)]
struct AuditLog {
    entries: Vec<String>,
}

impl AuditLog {
    fn user_created_handler(&mut self, event: &mut UserCreated) {
        self.entries.push(format!("created {}", event.user));
        event.base_mut().set_status(true);
    }

    fn order_shipped_handler(&mut self, event: &mut OrderShipped) {
        self.entries.push("shipped".to_string());
        event.base_mut().set_cancelled(true).add_error("late");
    }
}

fn service() -> EventListenerService<AuditLog> {
    EventListenerService::new(AuditLog::default())
        .on(AuditLog::user_created_handler)
        .on(AuditLog::order_shipped_handler)
}

#[test]
fn test_dispatch_routes_by_event_type() {
    let mut service = service();

    let mut created = UserCreated {
        user: "ada".to_string(),
        ..Default::default()
    };
    let mut shipped = OrderShipped::default();

    service.handle(&mut created).unwrap();
    service.handle(&mut shipped).unwrap();

    assert!(created.base().status());
    assert!(shipped.base().is_cancelled());
    assert_eq!(shipped.base().errors(), [Value::from("late")]);
    assert_eq!(service.listener().entries, ["created ada", "shipped"]);
}

#[test]
fn test_unhandled_event_names_conventional_handler() {
    let mut service = service();
    let err = service.handle(&mut BaseEvent::new()).unwrap_err();
    assert_eq!(
        err,
        EventError::Unhandled {
            event: "BaseEvent".to_string(),
            handler: "baseEventHandler".to_string(),
        }
    );

    let err = service.handle(&mut Renamed::default()).unwrap_err();
    assert!(err.to_string().contains("accountRenamedHandler"));

    let err: sundry::Error = err.into();
    assert!(err.is_unhandled());
}

#[test]
fn test_dispatch_through_trait_objects() {
    let mut service = service();
    let mut events: Vec<Box<dyn Event>> = vec![
        Box::new(OrderShipped::default()),
        Box::new(UserCreated::default()),
        Box::new(BaseEvent::new()),
    ];

    let results: Vec<bool> = events
        .iter_mut()
        .map(|event| service.handle(event.as_mut()).is_ok())
        .collect();

    assert_eq!(results, [true, true, false]);
    assert_eq!(service.into_listener().entries.len(), 2);
}

#[test]
fn test_registering_twice_replaces_route() {
    let mut service = service().on(|log: &mut AuditLog, _: &mut UserCreated| {
        log.entries.push("replacement".to_string());
    });
    assert!(service.handles::<UserCreated>());
    assert!(!service.handles::<Renamed>());

    service.handle(&mut UserCreated::default()).unwrap();
    assert_eq!(service.listener().entries, ["replacement"]);
}

#[test]
fn test_summary_and_names() {
    let event = UserCreated::default();
    assert_eq!(event.event_name(), "UserCreated");
    assert_eq!(event.summary(), "Event: UserCreated fired");
    assert_eq!(Renamed::default().summary(), "Event: AccountRenamed fired");
}

#[test]
fn test_base_event_serializes_camel_case() {
    let mut event = BaseEvent::new();
    event.set_status(true).add_error("oops");

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["status"], true);
    assert_eq!(json["cancelled"], false);
    assert_eq!(json["errors"], serde_json::json!(["oops"]));
    assert!(json["createdAt"].is_string());

    let back: BaseEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
