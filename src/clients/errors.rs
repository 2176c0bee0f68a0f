//! Runtime error types for API calls.
//!
//! This module contains every error a call can return once a
//! [`crate::StoreClient`] exists. Configuration-time failures live in
//! [`crate::error`].
//!
//! # Error Handling
//!
//! Each failure mode has its own type, unified under [`StoreError`]:
//!
//! - [`crate::TemplateError`]: the request path could not be built
//! - [`StoreError::Encode`]: the request body could not be serialized
//! - [`StoreError::Transport`]: network failure, timeout, or cancellation
//!   before a status code was known
//! - [`StatusError`]: a non-2xx response, with the service's structured
//!   error envelope when the body carried one
//! - [`DecodeError`]: a 2xx response whose body did not match the expected
//!   shape
//! - [`crate::ScrollError`]: the scroll protocol was violated
//!
//! The client never retries and never validates business rules locally;
//! conditions like a blank SPN come back as a [`StatusError`] carrying the
//! server's literal message.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.products().get("PIN", Area::Work, "MP-100").await {
//!     Ok(product) => println!("{:?}", product.name),
//!     Err(StoreError::Status(e)) => {
//!         eprintln!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(StoreError::Transport(e)) if e.is_timeout() => {
//!         eprintln!("deadline expired");
//!     }
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::scroll::ScrollError;
use crate::template::TemplateError;

/// Error returned when an API call receives a non-2xx response.
///
/// The service reports failures as `{"error": {"code", "message",
/// "details"}}`. When the body carries that envelope, `code`, `message`,
/// and `details` come from it, with `code` backfilled from the HTTP status
/// when the envelope's code is zero or absent. When the body is something
/// else entirely (a proxy error page, an empty body), `code` is the HTTP
/// status and `message` is empty. Either way `raw_body` holds the verbatim
/// body for diagnostics, so a failure can be understood without re-issuing
/// the call.
///
/// # Example
///
/// ```rust
/// use meplato_store::StatusError;
///
/// let error = StatusError {
///     code: 400,
///     message: "SPN must not be blank".to_string(),
///     details: vec![],
///     raw_body: r#"{"error":{"code":400,"message":"SPN must not be blank"}}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), "API error 400: SPN must not be blank");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API error {code}: {message}")]
pub struct StatusError {
    /// The error code: the envelope's code, or the HTTP status when the
    /// envelope carried none.
    pub code: u16,
    /// The server's literal error message; empty when the body was not a
    /// structured envelope.
    pub message: String,
    /// Additional detail lines from the envelope.
    pub details: Vec<String>,
    /// The verbatim response body.
    pub raw_body: String,
}

/// The wire shape of an error response, `{"error": {...}}`.
#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: Option<ErrorEnvelope>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Vec<String>,
}

impl StatusError {
    /// Builds a `StatusError` from a non-2xx status and its drained body.
    ///
    /// Decodes the structured envelope when present; otherwise falls back
    /// to the HTTP status with the raw body attached.
    #[must_use]
    pub fn from_response(status: u16, body: String) -> Self {
        match serde_json::from_str::<ErrorReply>(&body) {
            Ok(ErrorReply {
                error: Some(envelope),
            }) => Self {
                code: if envelope.code == 0 {
                    status
                } else {
                    envelope.code
                },
                message: envelope.message,
                details: envelope.details,
                raw_body: body,
            },
            _ => {
                tracing::warn!(status, "error response body is not a structured envelope");
                Self {
                    code: status,
                    message: String::new(),
                    details: Vec::new(),
                    raw_body: body,
                }
            }
        }
    }
}

/// Error returned when a 2xx response body does not match the expected
/// result type.
///
/// Carries the verbatim body alongside the deserializer's error so the
/// mismatch can be diagnosed offline.
#[derive(Debug, Error)]
#[error("Failed to decode response body: {source}")]
pub struct DecodeError {
    /// The verbatim response body that failed to decode.
    pub body: String,
    /// The underlying deserialization error.
    #[source]
    pub source: serde_json::Error,
}

/// Unified error type for all API call failures.
///
/// Use pattern matching to handle specific failure modes; every variant
/// wraps a more specific error type.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request path could not be built from its template.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network failure, timeout, or cancellation before a status code was
    /// known. `reqwest::Error::is_timeout` distinguishes an expired
    /// deadline from other transport failures.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// The service answered 2xx but the body did not decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The scroll protocol returned an already-seen page token.
    #[error(transparent)]
    Scroll(#[from] ScrollError),
}
