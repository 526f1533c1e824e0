//! Error types for the DDNS updater
//!
//! Nothing in the sync path is caught or retried: every variant below
//! propagates straight out of [`crate::SyncEngine::run`] and ends the run.

use thiserror::Error;

/// Result type alias for DDNS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DDNS updater
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (malformed file, missing or invalid token)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local I/O errors (reading the configuration file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-2xx response from the provider or an IP lookup service
    #[error("HTTP error {status}: {body}")]
    Http {
        /// Response status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// Transport-level failure (DNS resolution, connect, TLS, read)
    #[error("Network error: {0}")]
    Network(String),

    /// Zone lookup by name returned no zone
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    /// IP lookup service returned something that is not a usable address
    #[error("IP source error: {0}")]
    IpSource(String),

    /// Provider-specific error
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an HTTP status error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a network error from a transport error, keeping its whole
    /// `source()` chain in the message
    pub fn network_from(context: &str, err: &(dyn std::error::Error + 'static)) -> Self {
        let mut msg = format!("{}: {}", context, err);
        let mut source = err.source();
        while let Some(cause) = source {
            msg.push_str(": ");
            msg.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Network(msg)
    }

    /// Create a "zone not found" error
    pub fn zone_not_found(zone_name: impl Into<String>) -> Self {
        Self::ZoneNotFound(zone_name.into())
    }

    /// Create an IP source error
    pub fn ip_source(msg: impl Into<String>) -> Self {
        Self::IpSource(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Whether this error stems from the local configuration rather than
    /// from talking to a remote service
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Io(_))
    }
}
