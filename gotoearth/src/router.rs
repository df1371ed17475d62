//! HashMap-backed route dispatcher.
//!
//! Keys are matched as exact strings; `"GET:/users"` and `"GET:/users/"`
//! are different routes.
//!
//! # Lifecycle
//!
//! Registration needs `&mut Router` and dispatch needs `&Router`, so a
//! router that is shared across threads (usually as `Arc<Router>`) can no
//! longer be modified. Populate it at startup, directly or through
//! [`RouterBuilder`], then share it.

use gotoearth_core::{DispatchError, Event, Handler, Payload, RouterBuildError};
use serde_json::Value;
use std::{collections::HashMap, fmt, sync::Arc};

/// Dispatch table from route key to handler.
///
/// # Example
///
/// ```rust
/// use gotoearth::{Event, Router, handler_fn};
/// use serde_json::json;
///
/// let mut router = Router::new();
/// router.set_handler("GET:/users", handler_fn(|_| Ok(json!(["ada", "grace"]))));
///
/// let users = router.simple_route(Event::new("GET:/users")).unwrap();
/// assert_eq!(users, json!(["ada", "grace"]));
///
/// let err = router.route("GET:/orders", json!({})).unwrap_err();
/// assert_eq!(err.to_string(), "GET:/orders: no matching route");
/// ```
#[derive(Default, Clone)]
pub struct Router {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl Router {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Start building a router.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Register `handler` for `route`, replacing any previous handler.
    pub fn set_handler<H: Handler>(&mut self, route: impl Into<String>, handler: H) {
        self.set_shared_handler(route, Arc::new(handler));
    }

    /// Register a handler that is already shared elsewhere.
    pub fn set_shared_handler(&mut self, route: impl Into<String>, handler: Arc<dyn Handler>) {
        let route = route.into();

        #[cfg(feature = "tracing")]
        {
            if self.handlers.contains_key(&route) {
                tracing::debug!(route = %route, "replacing registered handler");
            }
        }

        self.handlers.insert(route, handler);
    }

    /// Dispatch `evt` to the handler registered for `route`.
    ///
    /// The payload is passed through as-is and the handler's result or
    /// error comes back untouched.
    pub fn route(&self, route: &str, evt: impl Into<Payload>) -> Result<Value, DispatchError> {
        let handler = self.lookup(route)?;
        handler.handle(evt.into()).map_err(DispatchError::Handler)
    }

    /// Dispatch an event using its own `route` field as the key.
    ///
    /// The whole event is handed to the handler.
    pub fn simple_route(&self, evt: Event) -> Result<Value, DispatchError> {
        let handler = self.lookup(&evt.route)?;
        handler
            .handle(Payload::Event(evt))
            .map_err(DispatchError::Handler)
    }

    fn lookup(&self, route: &str) -> Result<&dyn Handler, DispatchError> {
        let found = self.handlers.get(route);

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(route = %route, matched = found.is_some(), "dispatching event");
        }

        found
            .map(|handler| &**handler)
            .ok_or_else(|| DispatchError::NoMatchingRoute(route.to_string()))
    }

    /// Check if a handler is registered for `route`.
    pub fn contains(&self, route: &str) -> bool {
        self.handlers.contains_key(route)
    }

    /// Iterate over the registered route keys, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut routes: Vec<&str> = self.routes().collect();
        routes.sort_unstable();
        f.debug_struct("Router").field("routes", &routes).finish()
    }
}

impl Extend<(String, Arc<dyn Handler>)> for Router {
    fn extend<I: IntoIterator<Item = (String, Arc<dyn Handler>)>>(&mut self, iter: I) {
        for (route, handler) in iter {
            self.set_shared_handler(route, handler);
        }
    }
}

impl FromIterator<(String, Arc<dyn Handler>)> for Router {
    fn from_iter<I: IntoIterator<Item = (String, Arc<dyn Handler>)>>(iter: I) -> Self {
        let mut router = Router::new();
        router.extend(iter);
        router
    }
}

/// Builder for [`Router`].
///
/// Registrations are applied in order. A repeated key replaces the earlier
/// handler unless [`deny_duplicates`](Self::deny_duplicates) is set.
#[derive(Default)]
pub struct RouterBuilder {
    handlers: Vec<(String, Arc<dyn Handler>)>,
    deny_duplicates: bool,
}

impl RouterBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler.
    pub fn handler<H: Handler>(self, route: impl Into<String>, handler: H) -> Self {
        self.shared_handler(route, Arc::new(handler))
    }

    /// Register a handler that is already shared elsewhere.
    pub fn shared_handler(mut self, route: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push((route.into(), handler));
        self
    }

    /// Fail the build if any route key is registered more than once.
    pub fn deny_duplicates(mut self) -> Self {
        self.deny_duplicates = true;
        self
    }

    /// Build the router.
    pub fn build(self) -> Result<Router, RouterBuildError> {
        let mut router = Router::new();
        for (route, handler) in self.handlers {
            if self.deny_duplicates && router.contains(&route) {
                return Err(RouterBuildError::DuplicateRoute(route));
            }
            router.set_shared_handler(route, handler);
        }
        Ok(router)
    }
}
