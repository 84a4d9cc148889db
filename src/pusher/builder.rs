use crate::core::config::PusherConfig;
use crate::core::errors::PusherError;
use crate::core::kernel::rest::RequestDispatcher;
use crate::core::kernel::transport::{HttpTransport, ReqwestTransportBuilder};
use crate::pusher::client::Pusher;
use std::sync::Arc;
use std::time::Duration;

/// Builder for `Pusher` clients
///
/// Without an explicit transport, a reqwest transport is built from the
/// configuration (honouring its proxy setting).
pub struct PusherBuilder {
    config: PusherConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    user_agent: Option<String>,
}

impl PusherBuilder {
    pub fn new(config: PusherConfig) -> Self {
        Self {
            config,
            transport: None,
            user_agent: None,
        }
    }

    /// Use a custom transport instead of reqwest
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    pub fn build(self) -> Result<Pusher, PusherError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = ReqwestTransportBuilder::from_config(&self.config);
                if let Some(user_agent) = self.user_agent {
                    builder = builder.with_user_agent(user_agent);
                }
                Arc::new(builder.build()?)
            }
        };

        Ok(Pusher::from_dispatcher(RequestDispatcher::new(
            self.config,
            transport,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PusherConfig {
        PusherConfig::new("1", "key", "secret").unwrap()
    }

    #[test]
    fn test_build_with_default_transport() {
        assert!(PusherBuilder::new(config()).build().is_ok());
    }

    #[test]
    fn test_build_with_timeout() {
        let pusher = PusherBuilder::new(config())
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(pusher.config().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_build_rejects_invalid_proxy() {
        let result = PusherBuilder::new(config().proxy("http://[::1")).build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("proxy"));
    }
}
