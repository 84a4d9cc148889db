use crate::core::config::PusherConfig;
use crate::core::errors::{PusherError, RequestError};
use crate::core::kernel::canonical::{build_signed_query, CanonicalRequest};
use crate::core::kernel::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::core::types::{RequestOptions, Response};
use reqwest::Method;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, trace, warn};

/// Content type sent with every JSON body
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Signs requests against an application and issues them through a transport
///
/// Each call builds and signs its own query; the only shared state is the
/// read-only configuration, so one dispatcher can serve concurrent calls.
#[derive(Clone)]
pub struct RequestDispatcher {
    config: PusherConfig,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for RequestDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("app_id", &self.config.app_id)
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl RequestDispatcher {
    pub fn new(config: PusherConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &PusherConfig {
        &self.config
    }

    /// Sign and send a request, then classify the result
    ///
    /// Signing failures are returned before the transport is touched.
    /// Exactly one transport call is made otherwise.
    #[instrument(
        skip(self, options),
        fields(app_id = %self.config.app_id, method = %options.method, path = %options.path)
    )]
    pub async fn send(&self, options: RequestOptions) -> Result<Response, PusherError> {
        let request = self.prepare(&options)?;
        let url = request.url.clone();

        debug!(url = %url, "Dispatching request");
        let result = self.transport.execute(request).await;

        classify(url, result)
    }

    /// Build the fully signed request without sending it
    pub fn prepare(&self, options: &RequestOptions) -> Result<HttpRequest, PusherError> {
        let method_name = options.method.to_uppercase();
        let method = Method::from_bytes(method_name.as_bytes()).map_err(|e| {
            PusherError::Validation(format!("Invalid HTTP method '{}': {}", options.method, e))
        })?;

        let path = self.config.prefix_path(&options.path);
        let body = options.body.as_ref().map(serde_json::to_vec).transpose()?;

        let mut canonical = CanonicalRequest::new(&method_name, &path);
        if !options.params.is_empty() {
            canonical = canonical.with_params(&options.params);
        }
        if let Some(body) = &body {
            canonical = canonical.with_body(body);
        }

        let query = build_signed_query(&*self.config.credential, &canonical)?;
        let url = format!("{}{}?{}", self.config.base_url(), path, query);

        let mut headers = HashMap::new();
        if body.is_some() {
            headers.insert("content-type".to_string(), JSON_CONTENT_TYPE.to_string());
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
            timeout: self.config.timeout,
        })
    }
}

/// Map a transport result onto the success/failure outcome
pub fn classify(
    url: String,
    result: Result<HttpResponse, TransportError>,
) -> Result<Response, PusherError> {
    match result {
        Err(e) => {
            warn!(url = %url, error = %e, "Request failed with an error");
            Err(RequestError::transport(url).into())
        }
        Ok(response) if response.status >= 400 => {
            warn!(url = %url, status = response.status, "Unexpected status code");
            trace!("Response body: {}", String::from_utf8_lossy(&response.body));
            Err(RequestError::application(url, response.status, response.body).into())
        }
        Ok(response) => {
            debug!(status = response.status, "Request succeeded");
            Ok(Response {
                status: response.status,
                body: response.body,
            })
        }
    }
}
