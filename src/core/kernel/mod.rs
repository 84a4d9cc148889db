//! Signing and transport kernel
//!
//! Everything needed to turn a request description into a signed HTTP call
//! and a typed outcome. The kernel knows nothing about events or channels.
//!
//! # Components
//!
//! ## Authentication
//! - `Signer`: key lookup plus HMAC signing of a payload
//! - `Credential`: application key and secret, HMAC-SHA256 hex signatures
//!
//! ## Canonicalization
//! - `build_signed_query`: sorted `key=value` query ending in `auth_signature`
//!
//! ## Transport
//! - `HttpTransport`: pluggable "send one request" capability
//! - `ReqwestTransport`: reqwest-backed implementation
//! - `RequestDispatcher`: resolves the URL, signs, sends, and classifies
//!
//! # Example
//! ```rust,no_run
//! use pusher_rest::core::config::PusherConfig;
//! use pusher_rest::core::kernel::*;
//! use pusher_rest::core::types::RequestOptions;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PusherConfig::new("42", "key", "secret")?;
//! let transport = Arc::new(ReqwestTransport::new()?);
//! let dispatcher = RequestDispatcher::new(config, transport);
//!
//! let response = dispatcher
//!     .send(RequestOptions::get("/channels").with_param("info", "user_count"))
//!     .await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```
pub mod canonical;
pub mod rest;
pub mod signer;
pub mod transport;

// Re-export key types for convenience
pub use canonical::{
    build_signed_query, build_signed_query_at, CanonicalRequest, RESERVED_QUERY_KEYS,
};
pub use rest::{classify, RequestDispatcher, JSON_CONTENT_TYPE};
pub use signer::{Credential, Signer};
pub use transport::{
    HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, ReqwestTransportBuilder,
    TransportError,
};
