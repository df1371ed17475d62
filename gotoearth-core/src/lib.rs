//! # gotoearth-core
//!
//! Data shapes and the handler extension point for the gotoearth route
//! dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! handler crates that don't need the router itself.
//!
//! # Contents
//!
//! - [`Event`] - one inbound invocation, decoded by the function runtime
//! - [`Payload`] - what a handler receives: an [`Event`] or an untyped value
//! - [`Handler`] - the application-supplied unit of logic
//! - [`route_parts`] / [`RouteParts`] - splitting `"<VERB>:<path>"` keys
//!
//! # Error Types
//!
//! - [`Error`] - Top-level error type
//! - [`DispatchError`] - No matching route, or the handler failed
//! - [`MalformedRoute`] - Route key without a `:` delimiter
//! - [`RouterBuildError`] - Duplicate registrations when building a router

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod event;
mod handler;
mod route;

// Re-exports
pub use error::{BoxError, DispatchError, Error, MalformedRoute, RouterBuildError};
pub use event::{Event, Payload};
pub use handler::{Handler, handler_fn};
pub use route::{DELIMITER, RouteParts, route_key, route_parts};
