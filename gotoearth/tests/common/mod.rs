#![allow(dead_code)]

use gotoearth::{BoxError, Event, Handler, Payload};
use serde_json::{Value, json};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Events
// ============================================================================

pub fn order_event(route: &str, sku: &str) -> Event {
    let body = json!({ "sku": sku, "qty": 2 });
    Event::new(route)
        .with_stage("test")
        .with_body(body.as_object().cloned().unwrap_or_default())
}

// ============================================================================
// Test Handlers
// ============================================================================

pub struct CountingHandler {
    pub call_count: Arc<AtomicUsize>,
    pub output: Value,
}

impl CountingHandler {
    pub fn new(output: Value) -> (Self, Arc<AtomicUsize>) {
        let call_count = Arc::new(AtomicUsize::new(0));
        let handler = Self {
            call_count: call_count.clone(),
            output,
        };
        (handler, call_count)
    }
}

impl Handler for CountingHandler {
    fn handle(&self, _input: Payload) -> Result<Value, BoxError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }
}

/// Returns the SKU from the event body, or the untyped payload unchanged.
pub struct SkuHandler;

impl Handler for SkuHandler {
    fn handle(&self, input: Payload) -> Result<Value, BoxError> {
        match input {
            Payload::Event(event) => Ok(event.body.get("sku").cloned().unwrap_or(Value::Null)),
            Payload::Value(value) => Ok(value),
        }
    }
}

// Handler that returns a typed error for pass-through tests
pub struct FallibleHandler;

impl Handler for FallibleHandler {
    fn handle(&self, _input: Payload) -> Result<Value, BoxError> {
        Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "order 42 not found",
        )))
    }
}
