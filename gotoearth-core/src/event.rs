//! The inbound event shape and the payload handed to handlers.

use crate::{
    error::MalformedRoute,
    route::{RouteParts, route_parts},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One inbound invocation, already decoded by the function runtime.
///
/// Missing or `null` fields deserialize to their empty defaults.
///
/// # Example
///
/// ```rust
/// use gotoearth_core::Event;
///
/// let event: Event = serde_json::from_value(serde_json::json!({
///     "route": "DELETE:/items/5",
///     "stage": "prod",
///     "path": { "id": "5" }
/// }))
/// .unwrap();
///
/// let parts = event.parts().unwrap();
/// assert_eq!(parts.verb, "DELETE");
/// assert_eq!(parts.path, "/items/5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Decoded request payload.
    #[serde(deserialize_with = "null_as_default")]
    pub body: Map<String, Value>,
    /// Path parameters.
    #[serde(deserialize_with = "null_as_default")]
    pub path: HashMap<String, String>,
    /// Query string parameters.
    #[serde(deserialize_with = "null_as_default")]
    pub querystring: HashMap<String, String>,
    /// Route key, `"<VERB>:<path>"`.
    #[serde(deserialize_with = "null_as_default")]
    pub route: String,
    /// Deployment stage, e.g. `"prod"`.
    #[serde(deserialize_with = "null_as_default")]
    pub stage: String,
}

// Runtimes send `null` for absent maps, e.g. `"body": null` on GET.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Event {
    /// Create an event for the given route key with everything else empty.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            ..Self::default()
        }
    }

    /// Set the deployment stage.
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = body;
        self
    }

    /// Add a path parameter.
    pub fn with_path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.path.insert(key.into(), value.into());
        self
    }

    /// Add a query string parameter.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.querystring.insert(key.into(), value.into());
        self
    }

    /// Split this event's route into verb and path.
    pub fn parts(&self) -> Result<RouteParts<'_>, MalformedRoute> {
        route_parts(&self.route)
    }
}

/// What a handler receives: a structured [`Event`] or an arbitrary value.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A structured event, as passed by `simple_route`.
    Event(Event),
    /// Any other decoded value.
    Value(Value),
}

impl Payload {
    /// Borrow the event, if this payload is one.
    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Payload::Event(event) => Some(event),
            Payload::Value(_) => None,
        }
    }

    /// Take the event, if this payload is one.
    pub fn into_event(self) -> Option<Event> {
        match self {
            Payload::Event(event) => Some(event),
            Payload::Value(_) => None,
        }
    }

    /// Borrow the untyped value, if this payload is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Payload::Value(value) => Some(value),
            Payload::Event(_) => None,
        }
    }

    /// Render the payload as JSON regardless of variant.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Payload::Event(event) => serde_json::to_value(event),
            Payload::Value(value) => Ok(value.clone()),
        }
    }
}

impl From<Event> for Payload {
    fn from(event: Event) -> Self {
        Payload::Event(event)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parts_delegates_to_route() {
        let event = Event::new("DELETE:/items/5");
        let parts = event.parts().unwrap();
        assert_eq!(parts.verb, "DELETE");
        assert_eq!(parts.path, "/items/5");
    }

    #[test]
    fn test_parts_malformed() {
        let event = Event::new("DELETE");
        let err = event.parts().unwrap_err();
        assert_eq!(err.route, "DELETE");
    }

    #[test]
    fn test_wire_field_names() {
        let event = Event::new("GET:/users")
            .with_stage("prod")
            .with_path_param("id", "7")
            .with_query_param("limit", "10");

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "body": {},
                "path": { "id": "7" },
                "querystring": { "limit": "10" },
                "route": "GET:/users",
                "stage": "prod"
            })
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let event: Event = serde_json::from_value(json!({ "route": "GET:/" })).unwrap();
        assert_eq!(event, Event::new("GET:/"));
    }

    #[test]
    fn test_null_fields_default() {
        let event: Event = serde_json::from_value(json!({
            "route": "GET:/",
            "body": null,
            "path": null,
            "querystring": null,
            "stage": null
        }))
        .unwrap();
        assert_eq!(event, Event::new("GET:/"));

        let event: Event = serde_json::from_value(json!({ "route": null })).unwrap();
        assert_eq!(event.route, "");
    }

    #[test]
    fn test_null_body_keeps_other_fields() {
        let event: Event = serde_json::from_value(json!({
            "route": "GET:/users",
            "stage": "prod",
            "body": null,
            "querystring": { "limit": "10" }
        }))
        .unwrap();
        assert!(event.body.is_empty());
        assert_eq!(event.stage, "prod");
        assert_eq!(event.querystring["limit"], "10");
    }

    #[test]
    fn test_wrong_type_still_rejected() {
        let result = serde_json::from_value::<Event>(json!({ "route": "GET:/", "body": [1] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_body_keeps_untyped_values() {
        let event: Event = serde_json::from_value(json!({
            "route": "POST:/orders",
            "body": { "qty": 3, "tags": ["a", "b"], "gift": null }
        }))
        .unwrap();

        assert_eq!(event.body["qty"], json!(3));
        assert_eq!(event.body["tags"], json!(["a", "b"]));
        assert_eq!(event.body["gift"], Value::Null);
    }

    #[test]
    fn test_payload_accessors() {
        let payload = Payload::from(Event::new("GET:/"));
        assert!(payload.as_event().is_some());
        assert!(payload.as_value().is_none());
        assert_eq!(payload.to_value().unwrap()["route"], json!("GET:/"));

        let payload = Payload::from(json!({ "id": 1 }));
        assert_eq!(payload.as_value(), Some(&json!({ "id": 1 })));
        assert!(payload.clone().into_event().is_none());
        assert_eq!(payload.to_value().unwrap(), json!({ "id": 1 }));
    }
}
