use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Options for a single API call, before path prefixing and signing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: String,
    /// Path below `/apps/{app_id}`, e.g. `/events`
    pub path: String,
    pub params: HashMap<String, String>,
    /// JSON-encoded before sending
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new("POST", path)
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Successful response (status < 400)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    /// Raw response body bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Parse the body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Body decoded as UTF-8, lossily
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Body of `POST /events`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    /// Always a string; non-string payloads are JSON-encoded into it
    pub data: String,
    pub channels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<String>,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        data: &Value,
        channels: Vec<String>,
        socket_id: Option<String>,
    ) -> Result<Self, serde_json::Error> {
        let data = match data {
            Value::String(s) => s.clone(),
            other => serde_json::to_string(other)?,
        };

        Ok(Self {
            name: name.into(),
            data,
            channels,
            socket_id,
        })
    }
}

/// Signature returned to a client socket subscribing to a private or
/// presence channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketAuth {
    /// `{key}:{signature}`
    pub auth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<String>,
}
