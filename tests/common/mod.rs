#![allow(dead_code)]

use async_trait::async_trait;
use pusher_rest::core::kernel::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use pusher_rest::PusherConfig;
use std::sync::{Arc, Mutex};

/// Transport that records every request and replies with a canned result
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    reply: Result<HttpResponse, TransportError>,
}

impl MockTransport {
    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
        })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Err(TransportError(reason.to_string())),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}

/// Config matching the documented end-to-end scenario
pub fn test_config() -> PusherConfig {
    PusherConfig::new("42", "k", "s").unwrap()
}

/// Value of a query parameter in a URL
pub fn query_param<'a>(url: &'a str, key: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}
