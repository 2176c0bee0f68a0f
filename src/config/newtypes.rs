//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

/// The production Meplato Store API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://store.meplato.com/api/v2";

/// A validated service base URL.
///
/// This newtype validates that the URL has an `http` or `https` scheme and a
/// non-empty host, and normalizes away any trailing slashes so that request
/// paths (which always begin with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use meplato_store::BaseUrl;
///
/// let url = BaseUrl::new("https://store.meplato.com/api/v2/").unwrap();
/// assert_eq!(url.as_ref(), "https://store.meplato.com/api/v2");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "store.meplato.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL lacks an
    /// `http`/`https` scheme or a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        const HOST_DELIMITERS: &[char] = &[':', '/', '?', '#'];
        let remainder = &url[host_start..];
        let host_end = remainder
            .find(HOST_DELIMITERS)
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    /// Returns the production endpoint, [`DEFAULT_BASE_URL`].
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// Basic-Auth credentials for the Meplato Store API.
///
/// Meplato issues per-user API tokens which are transmitted as the user name
/// of an HTTP Basic-Auth pair; the password is usually blank. Either part may
/// be empty, but not both.
///
/// # Security
///
/// The `Debug` implementation masks the password, so configurations can be
/// logged without exposing secrets.
///
/// # Example
///
/// ```rust
/// use meplato_store::Credentials;
///
/// let creds = Credentials::new("5c10-4e9d-9a36", "").unwrap();
/// assert_eq!(creds.user(), "5c10-4e9d-9a36");
/// assert_eq!(format!("{:?}", creds), r#"Credentials { user: "5c10-4e9d-9a36", password: "*****" }"#);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// Creates a new credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredentials`] if both parts are empty.
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let user = user.into();
        let password = password.into();
        if user.is_empty() && password.is_empty() {
            return Err(ConfigError::EmptyCredentials);
        }
        Ok(Self { user, password })
    }

    /// Returns the user part (the API token).
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the password part.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the value of the `Authorization` header for this pair,
    /// `Basic base64(user ":" password)`.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.user, self.password));
        format!("Basic {encoded}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"*****")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("https://store.meplato.com/api/v2").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "store.meplato.com");
        assert_eq!(url.as_ref(), "https://store.meplato.com/api/v2");

        // With port
        let url = BaseUrl::new("http://localhost:3000").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("https://store.meplato.com/api/v2/").unwrap();
        assert_eq!(url.as_ref(), "https://store.meplato.com/api/v2");

        let url = BaseUrl::new("  https://store.meplato.com//  ").unwrap();
        assert_eq!(url.as_ref(), "https://store.meplato.com");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        // No scheme
        assert!(BaseUrl::new("store.meplato.com").is_err());

        // Empty host
        assert!(BaseUrl::new("https://").is_err());

        // Non-HTTP scheme
        assert!(BaseUrl::new("ftp://store.meplato.com").is_err());
        assert!(BaseUrl::new("://store.meplato.com").is_err());
    }

    #[test]
    fn test_base_url_default_is_production() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), DEFAULT_BASE_URL);
        assert_eq!(url.host_name(), "store.meplato.com");
    }

    #[test]
    fn test_credentials_accept_token_only() {
        let creds = Credentials::new("api-token", "").unwrap();
        assert_eq!(creds.user(), "api-token");
        assert_eq!(creds.password(), "");
    }

    #[test]
    fn test_credentials_reject_both_empty() {
        let result = Credentials::new("", "");
        assert!(matches!(result, Err(ConfigError::EmptyCredentials)));
    }

    #[test]
    fn test_credentials_mask_password_in_debug() {
        let creds = Credentials::new("user", "super-secret").unwrap();
        let debug_output = format!("{creds:?}");
        assert!(debug_output.contains("*****"));
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_authorization_header_is_basic_base64() {
        // base64("user:pass") == "dXNlcjpwYXNz"
        let creds = Credentials::new("user", "pass").unwrap();
        assert_eq!(creds.authorization_header(), "Basic dXNlcjpwYXNz");

        // Blank password still carries the colon
        let creds = Credentials::new("token", "").unwrap();
        assert_eq!(creds.authorization_header(), "Basic dG9rZW46");
    }
}
