//! Testing utilities for gotoearth.
//!
//! - [`RecordingHandler`]: A handler that records every payload it receives
//! - [`FailingHandler`]: A handler that always fails

use gotoearth_core::{BoxError, Event, Handler, Payload};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records all payloads it receives.
///
/// Clones share the same log, so keep one clone for assertions and
/// register the other.
///
/// # Example
///
/// ```rust
/// use gotoearth::{Event, Router, testing::RecordingHandler};
/// use serde_json::json;
///
/// let recorder = RecordingHandler::returning(json!("ok"));
/// let mut router = Router::new();
/// router.set_handler("GET:/", recorder.clone());
///
/// router.simple_route(Event::new("GET:/")).unwrap();
/// assert_eq!(recorder.count(), 1);
/// assert_eq!(recorder.events()[0].route, "GET:/");
/// ```
#[derive(Clone, Default)]
pub struct RecordingHandler {
    calls: Arc<Mutex<Vec<Payload>>>,
    output: Value,
    failure: Option<String>,
}

impl RecordingHandler {
    /// Create a recording handler that returns `null`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording handler that returns `output`.
    pub fn returning(output: Value) -> Self {
        Self {
            output,
            ..Self::default()
        }
    }

    /// Create a recording handler that fails with `message` after recording.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn log(&self) -> MutexGuard<'_, Vec<Payload>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a clone of the recorded payloads.
    pub fn calls(&self) -> Vec<Payload> {
        self.log().clone()
    }

    /// Get the recorded payloads that were events.
    pub fn events(&self) -> Vec<Event> {
        self.log()
            .iter()
            .filter_map(|p| p.as_event().cloned())
            .collect()
    }

    /// Get the number of recorded payloads.
    pub fn count(&self) -> usize {
        self.log().len()
    }

    /// Clear all recorded payloads.
    pub fn clear(&self) {
        self.log().clear();
    }
}

impl Handler for RecordingHandler {
    fn handle(&self, input: Payload) -> Result<Value, BoxError> {
        self.log().push(input);
        match &self.failure {
            Some(message) => Err(message.clone().into()),
            None => Ok(self.output.clone()),
        }
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that always fails with the same message.
#[derive(Debug, Clone)]
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Handler for FailingHandler {
    fn handle(&self, _input: Payload) -> Result<Value, BoxError> {
        Err(self.message.clone().into())
    }
}
