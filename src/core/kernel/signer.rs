use crate::core::config::ConfigError;
use crate::core::errors::PusherError;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signer trait for request authentication
///
/// Implementations sign an arbitrary UTF-8 payload and identify themselves
/// by the key the remote service uses to look up the matching secret.
pub trait Signer: Send + Sync {
    /// Public application key sent as `auth_key`
    fn key(&self) -> &str;

    /// Sign a payload and return the lowercase hex digest
    fn sign(&self, payload: &str) -> Result<String, PusherError>;
}

/// Application key and secret pair
///
/// Immutable once constructed. The secret never appears in `Debug` output.
#[derive(Clone)]
pub struct Credential {
    key: String,
    secret: Secret<String>,
}

impl Credential {
    /// Create a new credential
    ///
    /// # Arguments
    /// * `key` - Application key
    /// * `secret` - Application secret, must not be empty
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::InvalidConfiguration(
                "application secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            key: key.into(),
            secret: Secret::new(secret),
        })
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl Signer for Credential {
    fn key(&self) -> &str {
        &self.key
    }

    fn sign(&self, payload: &str) -> Result<String, PusherError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|e| PusherError::Auth(format!("Invalid secret key: {}", e)))?;

        mac.update(payload.as_bytes());
        let result = mac.finalize();

        Ok(hex::encode(result.into_bytes()))
    }
}
