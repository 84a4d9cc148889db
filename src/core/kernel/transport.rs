use crate::core::config::{ConfigError, PusherConfig};
use crate::core::errors::PusherError;
use async_trait::async_trait;
use reqwest::{Client, Method, Proxy};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{instrument, trace};

/// Fully assembled outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
    /// Passed through untouched; the transport decides how to enforce it
    pub timeout: Option<Duration>,
}

/// Status and raw body of a received response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The request produced no response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// HTTP transport capability
///
/// Sends exactly one request and reports either the response, whatever
/// its status, or the failure to get one. Implementations must not retry.
/// A response whose body cannot be read in full counts as no response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Builder for the reqwest-backed transport
#[derive(Debug, Default)]
pub struct ReqwestTransportBuilder {
    proxy: Option<String>,
    user_agent: Option<String>,
}

impl ReqwestTransportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take transport settings from the client configuration
    pub fn from_config(config: &PusherConfig) -> Self {
        Self {
            proxy: config.proxy.clone(),
            user_agent: None,
        }
    }

    pub fn with_proxy(mut self, proxy: String) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    pub fn build(self) -> Result<ReqwestTransport, PusherError> {
        let mut builder = Client::builder().user_agent(
            self.user_agent
                .unwrap_or_else(|| format!("pusher-rest/{}", env!("CARGO_PKG_VERSION"))),
        );

        if let Some(proxy) = &self.proxy {
            let proxy = Proxy::all(proxy).map_err(|e| {
                ConfigError::InvalidConfiguration(format!("Invalid proxy '{}': {}", proxy, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            ConfigError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(ReqwestTransport { client })
    }
}

/// Implementation of `HttpTransport` using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, PusherError> {
        ReqwestTransportBuilder::new().build()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(request.method, &request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                TransportError(format!(
                    "Failed to read response body (status {}): {}",
                    status, e
                ))
            })?
            .to_vec();

        trace!(status, "Response body: {}", String::from_utf8_lossy(&body));

        Ok(HttpResponse { status, body })
    }
}
