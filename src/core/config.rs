use crate::core::kernel::signer::{Credential, Signer};
use serde::{Serialize, Serializer};
use std::env;
use std::sync::Arc;
use std::time::Duration;

/// Default API host
pub const DEFAULT_HOST: &str = "api.pusherapp.com";

#[derive(Debug, Clone)]
pub struct PusherConfig {
    pub app_id: String,
    pub credential: Arc<Credential>,
    pub host: String,
    pub scheme: String,
    pub port: Option<u16>,
    pub timeout: Option<Duration>,
    pub proxy: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for PusherConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("PusherConfig", 7)?;
        state.serialize_field("app_id", &self.app_id)?;
        state.serialize_field("key", self.credential.key())?;
        state.serialize_field("secret", "[REDACTED]")?;
        state.serialize_field("host", &self.host)?;
        state.serialize_field("scheme", &self.scheme)?;
        state.serialize_field("port", &self.port)?;
        state.serialize_field("timeout_ms", &self.timeout.map(|t| t.as_millis() as u64))?;
        state.end()
    }
}

impl PusherConfig {
    /// Create a new configuration for an application
    ///
    /// Uses plain HTTP against the default host until told otherwise.
    pub fn new(
        app_id: impl Into<String>,
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            app_id: app_id.into(),
            credential: Arc::new(Credential::new(key, secret)?),
            host: DEFAULT_HOST.to_string(),
            scheme: "http".to_string(),
            port: None,
            timeout: None,
            proxy: None,
        })
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_APP_ID`
    /// - `{PREFIX}_KEY`
    /// - `{PREFIX}_SECRET`
    /// - `{PREFIX}_HOST` (optional, defaults to `api.pusherapp.com`)
    /// - `{PREFIX}_PORT` (optional)
    /// - `{PREFIX}_ENCRYPTED` (optional, `true` or `false`, defaults to false)
    /// - `{PREFIX}_TIMEOUT_MS` (optional)
    /// - `{PREFIX}_PROXY` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let var = |name: &str| format!("{}_{}", prefix.to_uppercase(), name);
        let required = |name: &str| {
            let name = var(name);
            env::var(&name).map_err(|_| ConfigError::MissingEnvironmentVariable(name))
        };

        let mut config = Self::new(required("APP_ID")?, required("KEY")?, required("SECRET")?)?;

        if let Ok(host) = env::var(var("HOST")) {
            config = config.host(host);
        }

        if let Ok(port) = env::var(var("PORT")) {
            let port = port.parse::<u16>().map_err(|e| {
                ConfigError::InvalidConfiguration(format!("invalid port '{}': {}", port, e))
            })?;
            config = config.port(port);
        }

        if let Ok(encrypted) = env::var(var("ENCRYPTED")) {
            let flag = encrypted.parse::<bool>().map_err(|e| {
                ConfigError::InvalidConfiguration(format!(
                    "invalid encrypted flag '{}': {}",
                    encrypted, e
                ))
            })?;
            config = config.encrypted(flag);
        }

        if let Ok(timeout) = env::var(var("TIMEOUT_MS")) {
            let millis = timeout.parse::<u64>().map_err(|e| {
                ConfigError::InvalidConfiguration(format!("invalid timeout '{}': {}", timeout, e))
            })?;
            config = config.timeout(Duration::from_millis(millis));
        }

        if let Ok(proxy) = env::var(var("PROXY")) {
            config = config.proxy(proxy);
        }

        Ok(config)
    }

    /// Create configuration from .env file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // fall back to the process environment
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Set the API host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the scheme explicitly
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Switch between `https` and `http`
    pub fn encrypted(mut self, encrypted: bool) -> Self {
        self.scheme = if encrypted { "https" } else { "http" }.to_string();
        self
    }

    /// Set an explicit port
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the request timeout handed to the transport
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Route requests through an HTTP proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Application-scoped path: `/apps/{app_id}{sub_path}`
    pub fn prefix_path(&self, sub_path: &str) -> String {
        format!("/apps/{}{}", self.app_id, sub_path)
    }

    /// `scheme://host[:port]`
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.host, port),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
