//! # Handler
//!
//! The single extension point: application code that receives a
//! [`Payload`] and produces a JSON result or fails.
//!
//! # Usage Patterns
//!
//! 1. **Closure**: any `Fn(Payload) -> Result<Value, BoxError>`. Wrap it in
//!    [`handler_fn`] when passing it inline so the signature is inferred.
//! 2. **Struct implementation**: `impl Handler for MyHandler`.

use crate::{error::BoxError, event::Payload};
use serde_json::Value;

/// An application-supplied unit of logic invoked for one route key.
///
/// Handlers are shared across threads, so they must be `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use gotoearth_core::{BoxError, Handler, Payload};
/// use serde_json::{Value, json};
///
/// struct Health;
///
/// impl Handler for Health {
///     fn handle(&self, _input: Payload) -> Result<Value, BoxError> {
///         Ok(json!({ "ok": true }))
///     }
/// }
///
/// let out = Health.handle(Payload::Value(Value::Null)).unwrap();
/// assert_eq!(out, json!({ "ok": true }));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a gotoearth `Handler`",
    label = "missing `Handler` implementation",
    note = "Implement `Handler`, or pass a closure `Fn(Payload) -> Result<Value, BoxError>` through `handler_fn`."
)]
pub trait Handler: Send + Sync + 'static {
    /// Handle one dispatched payload.
    fn handle(&self, input: Payload) -> Result<Value, BoxError>;
}

// Blanket impl for closures
impl<F> Handler for F
where
    F: Fn(Payload) -> Result<Value, BoxError> + Send + Sync + 'static,
{
    fn handle(&self, input: Payload) -> Result<Value, BoxError> {
        (self)(input)
    }
}

/// Pin a closure to the handler signature.
///
/// ```rust
/// use gotoearth_core::{Handler, Payload, handler_fn};
/// use serde_json::json;
///
/// let echo = handler_fn(|input| input.to_value().map_err(Into::into));
/// assert_eq!(echo.handle(Payload::Value(json!(5))).unwrap(), json!(5));
/// ```
pub fn handler_fn<F>(f: F) -> F
where
    F: Fn(Payload) -> Result<Value, BoxError> + Send + Sync + 'static,
{
    f
}
