//! Route keys.
//!
//! A route key joins an HTTP verb and a path with a single `:`, e.g.
//! `"GET:/users"`. Routers match keys as opaque strings; this module only
//! splits and joins them.

use crate::error::MalformedRoute;
use std::fmt;

/// The delimiter between verb and path in a route key.
pub const DELIMITER: char = ':';

/// The verb and path halves of a route key.
///
/// Both halves borrow from the key they were split from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteParts<'a> {
    /// Text before the first delimiter, e.g. `"GET"`.
    pub verb: &'a str,
    /// Text after the first delimiter, including any later delimiters.
    pub path: &'a str,
}

impl RouteParts<'_> {
    /// Rebuild the `"<VERB>:<path>"` key.
    pub fn to_key(&self) -> String {
        route_key(self.verb, self.path)
    }
}

impl fmt::Display for RouteParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.verb, DELIMITER, self.path)
    }
}

/// Split a route key into verb and path at the first `:`.
///
/// # Example
///
/// ```rust
/// use gotoearth_core::route_parts;
///
/// let parts = route_parts("POST:/x:y").unwrap();
/// assert_eq!(parts.verb, "POST");
/// assert_eq!(parts.path, "/x:y");
///
/// assert!(route_parts("GET").is_err());
/// ```
pub fn route_parts(route: &str) -> Result<RouteParts<'_>, MalformedRoute> {
    match route.split_once(DELIMITER) {
        Some((verb, path)) => Ok(RouteParts { verb, path }),
        None => Err(MalformedRoute {
            route: route.to_string(),
        }),
    }
}

/// Join a verb and a path into a route key.
pub fn route_key(verb: &str, path: &str) -> String {
    format!("{verb}{DELIMITER}{path}")
}
