//! Configuration types for the Meplato Store client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with a Meplato Store service.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreConfig`]: The main configuration struct holding all client settings
//! - [`StoreConfigBuilder`]: A builder for constructing [`StoreConfig`] instances
//! - [`BaseUrl`]: A validated service base URL
//! - [`Credentials`]: A Basic-Auth credential pair with masked debug output
//!
//! # Example
//!
//! ```rust
//! use meplato_store::{StoreConfig, Credentials};
//!
//! let config = StoreConfig::builder()
//!     .credentials(Credentials::new("api-token", "").unwrap())
//!     .build();
//!
//! assert_eq!(config.base_url().as_ref(), "https://store.meplato.com/api/v2");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Credentials, DEFAULT_BASE_URL};

use std::time::Duration;

/// Configuration for the Meplato Store client.
///
/// This struct holds everything a [`crate::StoreClient`] needs: the service
/// endpoint, optional credentials, and transport settings. It is constructed
/// once and never mutated; calls in flight always observe the same endpoint
/// and credentials.
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use meplato_store::{StoreConfig, BaseUrl, Credentials};
/// use std::time::Duration;
///
/// let config = StoreConfig::builder()
///     .base_url(BaseUrl::new("https://store.example.com/api/v2").unwrap())
///     .credentials(Credentials::new("api-token", "").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// assert!(config.credentials().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct StoreConfig {
    base_url: BaseUrl,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use meplato_store::StoreConfig;
    ///
    /// let config = StoreConfig::builder().build();
    /// assert!(config.credentials().is_none());
    /// ```
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the Basic-Auth credentials, if configured.
    ///
    /// `None` means anonymous access; no `Authorization` header is sent.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    ///
    /// `None` means no client-imposed deadline; requests wait as long as the
    /// transport allows.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for StoreConfig {
    /// An anonymous configuration against the production endpoint.
    fn default() -> Self {
        Self::builder().build()
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. Every
/// field has a sensible default, so `build()` cannot fail.
///
/// # Defaults
///
/// - `base_url`: the production endpoint, [`DEFAULT_BASE_URL`]
/// - `credentials`: `None` (anonymous access)
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-imposed deadline)
///
/// # Example
///
/// ```rust
/// use meplato_store::{StoreConfig, BaseUrl, Credentials};
/// use std::time::Duration;
///
/// let config = StoreConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8080/api/v2").unwrap())
///     .credentials(Credentials::new("token", "secret").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .timeout(Duration::from_secs(10))
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    base_url: Option<BaseUrl>,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the Basic-Auth credentials.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    ///
    /// An expired deadline surfaces as [`crate::StoreError::Transport`] with
    /// `is_timeout() == true`.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`StoreConfig`].
    ///
    /// Unset fields take their documented defaults; there is no failure mode.
    #[must_use]
    pub fn build(self) -> StoreConfig {
        StoreConfig {
            base_url: self.base_url.unwrap_or_default(),
            credentials: self.credentials,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StoreConfig::builder().build();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert!(config.credentials().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_default_matches_empty_builder() {
        let config = StoreConfig::default();
        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = StoreConfig::builder()
            .credentials(Credentials::new("token", "secret").unwrap())
            .build();

        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());

        // Debug must not leak the password
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("StoreConfig"));
        assert!(!debug_str.contains("secret"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base_url = BaseUrl::new("http://localhost:8080/api/v2").unwrap();
        let credentials = Credentials::new("token", "").unwrap();

        let config = StoreConfig::builder()
            .base_url(base_url.clone())
            .credentials(credentials.clone())
            .user_agent_prefix("MyApp/1.0")
            .timeout(Duration::from_secs(10))
            .build();

        assert_eq!(config.base_url(), &base_url);
        assert_eq!(config.credentials(), Some(&credentials));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }
}
