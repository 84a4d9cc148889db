use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PusherError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl PusherError {
    /// The request failure, if this error came back from the remote side
    pub fn as_request_error(&self) -> Option<&RequestError> {
        match self {
            Self::Request(e) => Some(e),
            _ => None,
        }
    }
}

/// Whether a request failed before or after a response was received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// No response was received (connectivity, DNS, timeout)
    Transport,
    /// A response was received with status >= 400
    Application,
}

impl fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Application => write!(f, "application"),
        }
    }
}

/// Failure of an issued request, carrying whatever the remote side returned
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} ({url})")]
pub struct RequestError {
    pub kind: RequestErrorKind,
    pub message: String,
    pub url: String,
    pub status: Option<u16>,
    /// Raw response body bytes
    pub body: Option<Vec<u8>>,
}

impl RequestError {
    pub fn transport(url: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Transport,
            message: "Request failed with an error".to_string(),
            url: url.into(),
            status: None,
            body: None,
        }
    }

    /// Response body decoded as UTF-8, lossily
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_deref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn application(url: impl Into<String>, status: u16, body: Vec<u8>) -> Self {
        Self {
            kind: RequestErrorKind::Application,
            message: format!("Unexpected status code {}", status),
            url: url.into(),
            status: Some(status),
            body: Some(body),
        }
    }
}
