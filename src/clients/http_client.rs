//! The HTTP client for Meplato Store API communication.
//!
//! This module provides [`StoreClient`], the one long-lived object of the
//! crate: it owns the connection pool, the immutable configuration, and the
//! default header set, and executes every request the resource services
//! build.

use std::collections::HashMap;

use crate::clients::errors::StoreError;
use crate::clients::http_request::{Method, Request};
use crate::clients::http_response::Response;
use crate::config::StoreConfig;
use crate::resources::availabilities::AvailabilitiesService;
use crate::resources::catalogs::CatalogsService;
use crate::resources::jobs::JobsService;
use crate::resources::me::MeResponse;
use crate::resources::products::ProductsService;

/// Client library version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for the Meplato Store API.
///
/// The client handles:
/// - URL construction against the configured base URL
/// - Default headers, including `User-Agent`, JSON content negotiation, and
///   Basic-Auth when credentials are configured
/// - Dispatch and full draining of every response body
///
/// Resource operations hang off the service accessors:
/// [`catalogs`](Self::catalogs), [`products`](Self::products),
/// [`jobs`](Self::jobs), and [`availabilities`](Self::availabilities). The
/// service root calls [`me`](Self::me) and [`ping`](Self::ping) live on the
/// client itself.
///
/// # Thread Safety
///
/// `StoreClient` is `Send + Sync`; one client can serve any number of
/// concurrent tasks. Its configuration is immutable after construction, so
/// calls in flight always observe the same endpoint and credentials.
/// Cancellation follows Rust's norm for futures: dropping a call's future
/// aborts the underlying request. A configured timeout surfaces as
/// [`StoreError::Transport`] with `is_timeout() == true`.
///
/// # Example
///
/// ```rust,ignore
/// use meplato_store::{Credentials, StoreClient, StoreConfig};
/// use meplato_store::resources::Area;
///
/// let config = StoreConfig::builder()
///     .credentials(Credentials::new("api-token", "").unwrap())
///     .build();
/// let client = StoreClient::new(config);
///
/// let catalog = client.catalogs().get("AD8CCDD5F9").await?;
/// let product = client.products().get("AD8CCDD5F9", Area::Work, "MP-100").await?;
/// ```
#[derive(Debug)]
pub struct StoreClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The immutable client configuration.
    config: StoreConfig,
    /// Default headers included in all requests.
    default_headers: HashMap<String, String>,
}

// Verify StoreClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreClient>();
};

impl StoreClient {
    /// Creates a new client from a configuration.
    ///
    /// The reqwest client and the default header set are built once here;
    /// every subsequent call reuses them.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use meplato_store::{StoreClient, StoreConfig};
    ///
    /// let client = StoreClient::new(StoreConfig::default());
    /// assert_eq!(client.config().base_url().as_ref(), "https://store.meplato.com/api/v2");
    /// ```
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Meplato Store API Library v{CLIENT_VERSION} | Rust {rust_version}"
        );

        // Build default headers; the service speaks JSON on every endpoint
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Accept-Charset".to_string(), "utf-8".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        // Add Basic-Auth header when credentials are configured
        if let Some(credentials) = config.credentials() {
            default_headers.insert(
                "Authorization".to_string(),
                credentials.authorization_header(),
            );
        }

        // Create reqwest client
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            config,
            default_headers,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the drained response.
    ///
    /// The response body is read to the end on every path, success and
    /// failure alike, so the connection returns to the pool. Status
    /// classification happens afterwards via [`Response::decode`] or
    /// [`Response::ensure_success`]; this method only fails for transport
    /// problems.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`] when the request cannot be sent or
    /// the body cannot be read (network failure, expired timeout).
    pub async fn execute(&self, request: Request) -> Result<Response, StoreError> {
        let url = format!("{}{}", self.config.base_url().as_ref(), request.path);
        tracing::debug!(method = %request.method, url = %url, "dispatching API request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Head => self.client.head(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await?;
        let code = response.status().as_u16();
        let body = response.text().await?;
        Ok(Response::new(code, body))
    }

    /// Identifies the authenticated caller.
    ///
    /// `GET /` returns the merchant and user the configured credentials
    /// resolve to.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] for transport failures, non-2xx statuses,
    /// or an undecodable body.
    pub async fn me(&self) -> Result<MeResponse, StoreError> {
        let response = self.execute(Request::new(Method::Get, "/")).await?;
        response.decode()
    }

    /// Probes the service root.
    ///
    /// `HEAD /` succeeds when the service is reachable and the credentials
    /// are accepted; no body is exchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] for transport failures or non-2xx statuses.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let response = self.execute(Request::new(Method::Head, "/")).await?;
        response.ensure_success()
    }

    /// Returns the catalogs service.
    #[must_use]
    pub const fn catalogs(&self) -> CatalogsService<'_> {
        CatalogsService::new(self)
    }

    /// Returns the products service.
    #[must_use]
    pub const fn products(&self) -> ProductsService<'_> {
        ProductsService::new(self)
    }

    /// Returns the jobs service.
    #[must_use]
    pub const fn jobs(&self) -> JobsService<'_> {
        JobsService::new(self)
    }

    /// Returns the availabilities service.
    #[must_use]
    pub const fn availabilities(&self) -> AvailabilitiesService<'_> {
        AvailabilitiesService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, Credentials};
    use std::time::Duration;

    fn create_test_client() -> StoreClient {
        let config = StoreConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8080/api/v2").unwrap())
            .credentials(Credentials::new("test-token", "").unwrap())
            .build();
        StoreClient::new(config)
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Meplato Store API Library v"));
        assert!(user_agent.contains(CLIENT_VERSION));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StoreConfig::builder()
            .user_agent_prefix("MyApp/1.0")
            .build();
        let client = StoreClient::new(config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Meplato Store API Library"));
    }

    #[test]
    fn test_json_negotiation_headers() {
        let client = create_test_client();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept-Charset"),
            Some(&"utf-8".to_string())
        );
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_authorization_header_with_credentials() {
        let client = create_test_client();

        let authorization = client.default_headers().get("Authorization").unwrap();
        assert!(authorization.starts_with("Basic "));
    }

    #[test]
    fn test_no_authorization_header_without_credentials() {
        let client = StoreClient::new(StoreConfig::default());
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_config_is_kept() {
        let client = create_test_client();
        assert_eq!(
            client.config().base_url().as_ref(),
            "http://localhost:8080/api/v2"
        );
    }

    #[test]
    fn test_construction_with_timeout() {
        let config = StoreConfig::builder()
            .timeout(Duration::from_millis(250))
            .build();
        let client = StoreClient::new(config);
        assert_eq!(client.config().timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreClient>();
    }
}
