//! HTTP request types for API calls.
//!
//! This module provides the [`Request`] value the resource services hand to
//! [`crate::StoreClient::execute`]: a method, an already-expanded path, and
//! an optional JSON body.

use std::fmt;

/// HTTP methods the API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Retrieve a resource.
    Get,
    /// Probe the service root without a body.
    Head,
    /// Create a resource, or a body-encoded operation (update, upsert,
    /// publish).
    Post,
    /// Replace a resource whole.
    Put,
    /// Remove a resource or purge an area.
    Delete,
}

impl Method {
    /// Returns the method's wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transport-ready API request.
///
/// The path is relative to the configured base URL and already contains any
/// query string; expansion happened in [`crate::template`] before the
/// request was built. Bodies are JSON values; operations without a body
/// (GET, HEAD, DELETE, and body-less POSTs such as catalog publish) simply
/// leave `body` unset.
///
/// # Example
///
/// ```rust
/// use meplato_store::clients::{Method, Request};
/// use serde_json::json;
///
/// let get = Request::new(Method::Get, "/catalogs/AD8CCDD5F9");
/// assert!(get.body.is_none());
///
/// let post = Request::new(Method::Post, "/catalogs/AD8CCDD5F9/publish");
/// let create = Request::new(Method::Post, "/catalogs").body(json!({"name": "Office"}));
/// assert!(create.body.is_some());
/// # let _ = (get, post);
/// ```
#[derive(Clone, Debug)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The expanded path, including any query string.
    pub path: String,
    /// The JSON body, if the operation carries one.
    pub body: Option<serde_json::Value>,
}

impl Request {
    /// Creates a body-less request.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_wire_names() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Head.to_string(), "HEAD");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_new_request_has_no_body() {
        let request = Request::new(Method::Get, "/catalogs");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/catalogs");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_body_attaches_json() {
        let request =
            Request::new(Method::Post, "/catalogs").body(json!({"name": "Office Supplies"}));
        assert_eq!(
            request.body,
            Some(json!({"name": "Office Supplies"}))
        );
    }
}
