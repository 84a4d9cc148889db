use crate::core::errors::PusherError;
use crate::core::kernel::signer::Signer;
use md5::{Digest, Md5};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Protocol version sent as `auth_version`
pub const AUTH_VERSION: &str = "1.0";

/// Query keys computed by the protocol itself; callers may never supply them
pub const RESERVED_QUERY_KEYS: [&str; 5] = [
    "auth_key",
    "auth_timestamp",
    "auth_version",
    "auth_signature",
    "body_md5",
];

/// Returns true if `key` is computed by the signing protocol
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_QUERY_KEYS.contains(&key)
}

/// Request to be canonicalized and signed
///
/// `path` is signed exactly as given, so it must already carry the
/// application prefix the request will be sent to.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalRequest<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub params: Option<&'a HashMap<String, String>>,
    pub body: Option<&'a [u8]>,
}

impl<'a> CanonicalRequest<'a> {
    pub fn new(method: &'a str, path: &'a str) -> Self {
        Self {
            method,
            path,
            params: None,
            body: None,
        }
    }

    pub fn with_params(mut self, params: &'a HashMap<String, String>) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_body(mut self, body: &'a [u8]) -> Self {
        self.body = Some(body);
        self
    }
}

/// Whole seconds since the Unix epoch
pub fn current_timestamp() -> Result<u64, PusherError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| PusherError::Auth(format!("Failed to get timestamp: {}", e)))
}

/// Hex MD5 digest of the exact body bytes
pub fn body_md5(body: &[u8]) -> String {
    hex::encode(Md5::digest(body))
}

/// Three-line signable payload: `METHOD\nPATH\nQUERY`
pub fn string_to_sign(method: &str, path: &str, query_string: &str) -> String {
    [method.to_uppercase().as_str(), path, query_string].join("\n")
}

/// Build the signed query string for a request using the current time
pub fn build_signed_query<S: Signer + ?Sized>(
    signer: &S,
    request: &CanonicalRequest<'_>,
) -> Result<String, PusherError> {
    let timestamp = current_timestamp()?;
    build_signed_query_at(signer, request, timestamp)
}

/// Build the signed query string for a request at a fixed timestamp
///
/// Output is `key=value` pairs sorted byte-wise by key and joined by `&`,
/// followed by `&auth_signature=<hex>`. The signature covers everything
/// before it. Fails with `PusherError::Validation` if a caller parameter
/// collides with a reserved key.
pub fn build_signed_query_at<S: Signer + ?Sized>(
    signer: &S,
    request: &CanonicalRequest<'_>,
    timestamp: u64,
) -> Result<String, PusherError> {
    let mut params: Vec<(&str, String)> = vec![
        ("auth_key", signer.key().to_string()),
        ("auth_timestamp", timestamp.to_string()),
        ("auth_version", AUTH_VERSION.to_string()),
    ];

    if let Some(body) = request.body.filter(|b| !b.is_empty()) {
        params.push(("body_md5", body_md5(body)));
    }

    if let Some(extra) = request.params {
        let mut keys: Vec<&String> = extra.keys().collect();
        keys.sort_unstable();
        for key in keys {
            if is_reserved_key(key) {
                return Err(PusherError::Validation(format!(
                    "{} is a required parameter and cannot be overridden",
                    key
                )));
            }
            params.push((key.as_str(), extra[key].clone()));
        }
    }

    params.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let payload = string_to_sign(request.method, request.path, &query_string);
    let signature = signer.sign(&payload)?;

    Ok(format!("{}&auth_signature={}", query_string, signature))
}
