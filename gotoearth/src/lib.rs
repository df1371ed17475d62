//! # gotoearth - Route-keyed Event Dispatcher
//!
//! `gotoearth` sits between a function-as-a-service runtime and application
//! handlers. The runtime decodes the raw invocation into an [`Event`] whose
//! `route` field already reads `"<VERB>:<path>"`; the [`Router`] looks that
//! key up and calls the handler registered for it.
//!
//! Matching is exact: no wildcards, no path parameter extraction.
//!
//! ## Quick Start
//!
//! ```rust
//! use gotoearth::prelude::*;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! struct CreateOrder;
//!
//! impl Handler for CreateOrder {
//!     fn handle(&self, input: Payload) -> Result<serde_json::Value, BoxError> {
//!         let event = input.into_event().ok_or("expected an event")?;
//!         Ok(json!({ "created": event.body.get("sku"), "stage": event.stage }))
//!     }
//! }
//!
//! // Populate once at startup, then share.
//! let router = Arc::new(
//!     Router::builder()
//!         .deny_duplicates()
//!         .handler("POST:/orders", CreateOrder)
//!         .handler("GET:/health", handler_fn(|_| Ok(json!("ok"))))
//!         .build()?,
//! );
//!
//! let event: Event = serde_json::from_value(json!({
//!     "route": "POST:/orders",
//!     "stage": "prod",
//!     "body": { "sku": "A-1" }
//! }))?;
//! let out = router.simple_route(event)?;
//! assert_eq!(out, json!({ "created": "A-1", "stage": "prod" }));
//!
//! let missing = router.simple_route(Event::new("GET:/nope")).unwrap_err();
//! assert!(missing.is_not_found());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events on dispatch and on handler replacement.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod router;
pub mod testing;

pub use gotoearth_core::{
    // Error types
    BoxError,
    // Route keys
    DELIMITER,
    DispatchError,
    Error,
    // Event shape
    Event,
    // Handler
    Handler,
    MalformedRoute,
    Payload,
    RouteParts,
    RouterBuildError,
    handler_fn,
    route_key,
    route_parts,
};

pub use router::{Router, RouterBuilder};

/// Prelude module - common imports for gotoearth.
///
/// # Usage
///
/// ```rust
/// use gotoearth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, DispatchError, Event, Handler, Payload, RouteParts, Router, RouterBuilder,
        handler_fn, route_parts,
    };
}
