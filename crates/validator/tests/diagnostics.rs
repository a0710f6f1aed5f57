//! Tracing events emitted by the engine.
//!
//! Each test installs a capturing subscriber for its own thread only, so the
//! tests do not interfere with each other.

use beacon_validator::prelude::*;
use serde_json::json;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Captured {
    level: Level,
    message: String,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl CaptureLayer {
    fn count(&self, level: Level, message: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level == level && e.message == message)
            .count()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, CaptureLayer) {
    let layer = CaptureLayer::default();
    let subscriber = Registry::default().with(layer.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, layer)
}

#[test]
fn invalid_pattern_warns_once_across_calls() {
    let (outcomes, events) = capture(|| {
        let v = matches_regex("([a-z");
        (0..5).map(|_| v.validate(&json!("abc"))).collect::<Vec<_>>()
    });

    assert!(outcomes.iter().all(|o| o.message().starts_with("Invalid regex")));
    assert_eq!(events.count(Level::WARN, "invalid regex pattern"), 1);
}

#[test]
fn valid_pattern_does_not_warn() {
    let (_, events) = capture(|| matches_regex("[a-z]+").validate(&json!("abc")));
    assert_eq!(events.count(Level::WARN, "invalid regex pattern"), 0);
}

#[test]
fn build_emits_trace() {
    let (schema, events) = capture(|| {
        Schema::builder()
            .field("name")
            .non_empty_string()
            .done()
            .build()
    });

    assert!(schema.is_ok());
    assert_eq!(events.count(Level::TRACE, "schema built"), 1);
}

#[test]
fn rejection_emits_debug_only_on_failure() {
    let schema = Schema::builder()
        .field("name")
        .non_empty_string()
        .done()
        .build()
        .unwrap();

    let (_, events) = capture(|| {
        schema.validate(&json!({"name": "ok"}));
        schema.validate(&json!({"name": ""}));
        schema.validate(&json!([]));
    });

    assert_eq!(events.count(Level::DEBUG, "schema rejected value"), 2);
}
