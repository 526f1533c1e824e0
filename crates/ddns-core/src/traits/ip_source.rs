// # IP Source Trait
//
// Defines the interface for looking up the caller's current public address.
//
// ## Implementations
//
// - HTTP plain-text lookup: `ddns-ip-http` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::{IpSource, IpVersion};
//
// let v4 = source.fetch(IpVersion::V4).await?;
// let v6 = source.fetch(IpVersion::V6).await?;
// ```
//
// Sources never cache. Memoization within a run is the job of
// [`crate::IpCache`].

use async_trait::async_trait;
use std::fmt;
use std::net::IpAddr;

/// IP version (v4 or v6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Whether `ip` belongs to this version
    pub fn matches(&self, ip: &IpAddr) -> bool {
        match self {
            IpVersion::V4 => ip.is_ipv4(),
            IpVersion::V6 => ip.is_ipv6(),
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => f.write_str("IPv4"),
            IpVersion::V6 => f.write_str("IPv6"),
        }
    }
}

/// Trait for IP source implementations
///
/// # Forbidden
///
/// - Caching results (owned by `IpCache`)
/// - Retry logic (a failure ends the run)
/// - Spawning tasks
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Fetch the current public address of the given version
    ///
    /// Every call performs a fresh lookup.
    ///
    /// # Returns
    ///
    /// - `Ok(IpAddr)`: An address of the requested version
    /// - `Err(Error)`: If the lookup failed or returned something unusable
    async fn fetch(&self, version: IpVersion) -> Result<IpAddr, crate::Error>;

    /// Get the source name (for logging/debugging)
    fn source_name(&self) -> &'static str;
}
