//! Configuration types for the DDNS updater
//!
//! The configuration is a TOML file read once per run:
//!
//! ```toml
//! api_token = "your-hetzner-dns-token"
//!
//! [[targets]]
//! zone = "example.com"
//! record = "home"
//! ```

use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Main DDNS configuration
#[derive(Clone, Deserialize)]
pub struct SyncConfig {
    /// Hetzner DNS API token, sent as `Auth-API-Token` on every request
    /// ⚠️ NEVER log this value
    pub api_token: String,

    /// Records to keep in sync, processed in this order. The key is
    /// required; `targets = []` is accepted and makes the run a no-op.
    pub targets: Vec<Target>,
}

// Custom Debug implementation that hides the API token
impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("api_token", &"<REDACTED>")
            .field("targets", &self.targets)
            .finish()
    }
}

impl SyncConfig {
    /// Read, parse and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading config from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;

        tracing::debug!("Successfully read config: {:?}", config);
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| crate::Error::config(format!("Invalid config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.api_token.trim().is_empty() {
            return Err(crate::Error::config("api_token cannot be empty"));
        }

        Ok(())
    }
}

/// A (zone, record name) pair to keep in sync
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    /// DNS zone name (e.g., "example.com")
    pub zone: String,

    /// Record name within the zone (e.g., "home" or "@")
    pub record: String,
}

impl Target {
    /// Create a new target
    pub fn new(zone: impl Into<String>, record: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            record: record.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.record, self.zone)
    }
}
