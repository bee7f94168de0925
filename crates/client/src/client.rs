//! HTTP client for the portal backend

use crate::error::ClientError;
use reqwest::{Client, ClientBuilder};
use rota_core::ApiConfig;
use std::time::Duration;

const USER_AGENT: &str = concat!("rota-client/", env!("CARGO_PKG_VERSION"));

/// Client for the public (unauthenticated) portal endpoints
#[derive(Clone, Debug)]
pub struct PortalClient {
    client: Client,
    base_url: String,
    login_endpoint: String,
}

impl PortalClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a client from the `[api]` configuration section
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let builder = Self::builder()
            .base_url(config.base_url.clone())
            .login_endpoint(config.login_endpoint.clone());

        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout_secs {
            Some(secs) => builder.timeout(Duration::from_secs(secs)),
            None => builder,
        };

        builder.build()
    }

    /// Create a new client builder
    pub fn builder() -> PortalClientBuilder {
        PortalClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn login_endpoint(&self) -> &str {
        &self.login_endpoint
    }

    /// Create a request builder for `path` on the backend
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }
}

/// Builder for [`PortalClient`]
#[derive(Default)]
pub struct PortalClientBuilder {
    base_url: Option<String>,
    login_endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl PortalClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the login endpoint path
    pub fn login_endpoint(mut self, path: impl Into<String>) -> Self {
        self.login_endpoint = Some(path.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<PortalClient, ClientError> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let login_endpoint = self
            .login_endpoint
            .unwrap_or_else(|| ApiConfig::default().login_endpoint);

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ClientBuilder::new().user_agent(USER_AGENT).build()?
        };

        Ok(PortalClient {
            client,
            base_url,
            login_endpoint,
        })
    }
}
