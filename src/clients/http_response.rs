//! HTTP response types for API calls.
//!
//! This module provides the [`Response`] snapshot returned by
//! [`crate::StoreClient::execute`] and the decoding step every operation
//! shares.

use serde::de::DeserializeOwned;

use crate::clients::errors::{DecodeError, StatusError, StoreError};

/// A drained API response: the status code and the complete body text.
///
/// The transport layer reads the body to the end before constructing this
/// type, on success and failure alike, so the underlying connection always
/// returns to the pool. Status checking and error classification then
/// operate on this owned snapshot.
#[derive(Clone, Debug)]
pub struct Response {
    code: u16,
    body: String,
}

impl Response {
    /// Creates a response snapshot from a status code and a drained body.
    #[must_use]
    pub fn new(code: u16, body: String) -> Self {
        Self { code, body }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Returns the verbatim body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Decodes a successful response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Status`] for a non-2xx status (with the
    /// structured envelope when the body carried one), or
    /// [`StoreError::Decode`] when a 2xx body does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, StoreError> {
        if !self.is_success() {
            return Err(StatusError::from_response(self.code, self.body).into());
        }
        match serde_json::from_str(&self.body) {
            Ok(value) => Ok(value),
            Err(source) => Err(DecodeError {
                body: self.body,
                source,
            }
            .into()),
        }
    }

    /// Confirms a successful response, discarding the body.
    ///
    /// For operations whose success carries no payload (product delete,
    /// ping).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Status`] for a non-2xx status.
    pub fn ensure_success(self) -> Result<(), StoreError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(StatusError::from_response(self.code, self.body).into())
        }
    }
}
