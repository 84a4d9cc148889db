use crate::core::config::PusherConfig;
use crate::core::errors::PusherError;
use crate::core::kernel::canonical::{build_signed_query, CanonicalRequest};
use crate::core::kernel::rest::RequestDispatcher;
use crate::core::types::{Event, RequestOptions, Response, SocketAuth};
use crate::core::validation::{
    validate_channel, validate_channels, validate_event_name, validate_socket_id,
};
use crate::pusher::auth::socket_signature;
use crate::pusher::builder::PusherBuilder;
use serde_json::Value;
use std::collections::HashMap;
use tracing::instrument;

/// Client for a single Pusher application
#[derive(Debug, Clone)]
pub struct Pusher {
    dispatcher: RequestDispatcher,
}

impl Pusher {
    /// Create a client backed by the default reqwest transport
    pub fn new(config: PusherConfig) -> Result<Self, PusherError> {
        PusherBuilder::new(config).build()
    }

    pub fn builder(config: PusherConfig) -> PusherBuilder {
        PusherBuilder::new(config)
    }

    pub(crate) fn from_dispatcher(dispatcher: RequestDispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn config(&self) -> &PusherConfig {
        self.dispatcher.config()
    }

    /// Signature authorising `socket_id` to subscribe to `channel`
    ///
    /// `data` is the presence payload for presence channels.
    pub fn authenticate(
        &self,
        socket_id: &str,
        channel: &str,
        data: Option<&Value>,
    ) -> Result<SocketAuth, PusherError> {
        validate_socket_id(socket_id)?;
        validate_channel(channel)?;

        socket_signature(&*self.config().credential, channel, socket_id, data)
    }

    /// Signed query string for a request, with `path` used exactly as given
    pub fn create_signed_query_string(
        &self,
        request: &CanonicalRequest<'_>,
    ) -> Result<String, PusherError> {
        build_signed_query(&*self.config().credential, request)
    }

    /// Send an arbitrary request below `/apps/{app_id}`
    pub async fn send(&self, options: RequestOptions) -> Result<Response, PusherError> {
        self.dispatcher.send(options).await
    }

    pub async fn get(
        &self,
        path: &str,
        params: HashMap<String, String>,
    ) -> Result<Response, PusherError> {
        self.send(RequestOptions::get(path).with_params(params))
            .await
    }

    pub async fn post(
        &self,
        path: &str,
        params: HashMap<String, String>,
        body: Value,
    ) -> Result<Response, PusherError> {
        self.send(RequestOptions::post(path).with_params(params).with_body(body))
            .await
    }

    /// Trigger an event on up to ten channels
    ///
    /// String `data` is sent as-is; anything else is JSON-encoded. Events
    /// are not delivered to `socket_id` when one is given.
    #[instrument(skip(self, channels, data), fields(event = %event, channel_count = channels.len()))]
    pub async fn trigger<S: AsRef<str>>(
        &self,
        channels: &[S],
        event: &str,
        data: &Value,
        socket_id: Option<&str>,
    ) -> Result<Response, PusherError> {
        if let Some(socket_id) = socket_id {
            validate_socket_id(socket_id)?;
        }
        validate_event_name(event)?;
        validate_channels(channels)?;

        let event = Event::new(
            event,
            data,
            channels.iter().map(|c| c.as_ref().to_string()).collect(),
            socket_id.map(str::to_string),
        )?;

        self.post("/events", HashMap::new(), serde_json::to_value(&event)?)
            .await
    }
}
