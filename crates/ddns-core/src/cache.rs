// # Per-run IP Cache
//
// Memoizes the caller's public addresses for the duration of one sync run.
//
// ## Behavior
//
// - One slot per IP version, filled lazily on first successful lookup
// - No expiry: a run is short enough that the address cannot change mid-run
// - Failed lookups are not cached; the next call asks the source again
// - A new cache is created for every run, so a long-lived process that
//   runs repeatedly always sees fresh addresses

use std::net::IpAddr;

use crate::Result;
use crate::traits::{IpSource, IpVersion};

/// In-memory memo of the current public addresses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpCache {
    v4: Option<IpAddr>,
    v6: Option<IpAddr>,
}

impl IpCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached address for a version, if any
    pub fn get(&self, version: IpVersion) -> Option<IpAddr> {
        match version {
            IpVersion::V4 => self.v4,
            IpVersion::V6 => self.v6,
        }
    }

    /// Return the cached address, or fetch it from `source` and cache it
    pub async fn get_or_fetch(
        &mut self,
        version: IpVersion,
        source: &dyn IpSource,
    ) -> Result<IpAddr> {
        if let Some(ip) = self.get(version) {
            tracing::debug!("Using cached {} address {}", version, ip);
            return Ok(ip);
        }

        tracing::debug!("Fetching {} address from {}", version, source.source_name());
        let ip = source.fetch(version).await?;

        match version {
            IpVersion::V4 => self.v4 = Some(ip),
            IpVersion::V6 => self.v6 = Some(ip),
        }

        Ok(ip)
    }

    /// Current public IPv4 address
    pub async fn current_ipv4(&mut self, source: &dyn IpSource) -> Result<IpAddr> {
        self.get_or_fetch(IpVersion::V4, source).await
    }

    /// Current public IPv6 address
    pub async fn current_ipv6(&mut self, source: &dyn IpSource) -> Result<IpAddr> {
        self.get_or_fetch(IpVersion::V6, source).await
    }
}
