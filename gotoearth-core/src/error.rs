//! Error types for gotoearth.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`Error`] - Top-level error type for all gotoearth operations
//! - [`DispatchError`] - Errors while dispatching an event to a handler
//! - [`MalformedRoute`] - A route key without the `:` delimiter
//! - [`RouterBuildError`] - Errors while building a router

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all gotoearth operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred during dispatch.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// A route key could not be split into verb and path.
    #[error(transparent)]
    MalformedRoute(#[from] MalformedRoute),

    /// A router could not be built.
    #[error(transparent)]
    Build(#[from] RouterBuildError),
}

/// Errors that can occur during event dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is registered for the route key.
    #[error("{0}: no matching route")]
    NoMatchingRoute(String),

    /// The handler itself failed. Display and source are the handler's own.
    #[error(transparent)]
    Handler(BoxError),
}

impl DispatchError {
    /// The route key that had no handler, if this is a not-found error.
    pub fn route(&self) -> Option<&str> {
        match self {
            DispatchError::NoMatchingRoute(route) => Some(route),
            DispatchError::Handler(_) => None,
        }
    }

    /// Returns true if no handler matched the route key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DispatchError::NoMatchingRoute(_))
    }

    /// Take back the error returned by the handler, untouched.
    pub fn into_handler_error(self) -> Option<BoxError> {
        match self {
            DispatchError::Handler(err) => Some(err),
            DispatchError::NoMatchingRoute(_) => None,
        }
    }
}

/// A route key that does not contain the `:` delimiter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{route}: malformed route, expected `<VERB>:<path>`")]
pub struct MalformedRoute {
    /// The offending route key.
    pub route: String,
}

/// Errors that can occur while building a router.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterBuildError {
    /// The same route key was registered twice with duplicates denied.
    #[error("{0}: route already registered")]
    DuplicateRoute(String),
}
