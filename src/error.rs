//! Configuration error types for the Meplato Store client.
//!
//! This module contains the errors raised while building a [`crate::StoreConfig`],
//! before any request is made. Runtime failures (transport, HTTP status,
//! decoding) live in [`crate::clients::errors`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use meplato_store::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not-a-url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building the client configuration.
///
/// Each variant provides a clear, actionable error message naming the
/// offending value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme and host (e.g., 'https://store.meplato.com/api/v2').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Credentials were supplied but both parts are empty.
    #[error("Credentials cannot be empty. Provide a user and/or password, or omit credentials for anonymous access.")]
    EmptyCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://weird".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://weird"));
        assert!(message.contains("valid URL with scheme"));
    }

    #[test]
    fn test_empty_credentials_error_message() {
        let error = ConfigError::EmptyCredentials;
        let message = error.to_string();
        assert!(message.contains("cannot be empty"));
        assert!(message.contains("anonymous access"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyCredentials;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
