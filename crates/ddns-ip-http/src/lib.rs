// # HTTP IP Source
//
// This crate provides an HTTP-based IP source for the DDNS updater.
//
// ## Architecture
//
// Each IP version has its own plain-text lookup endpoint. A GET to the
// endpoint returns the caller's address as the entire response body, with
// no JSON envelope:
//
// - IPv4: `https://4.kritzl.dev`
// - IPv6: `https://6.kritzl.dev`
//
// Every `fetch()` is a fresh request. Memoization within a run is done by
// `ddns_core::IpCache`.

use ddns_core::traits::{IpSource, IpVersion};
use ddns_core::{Error, Result};

use std::net::IpAddr;

/// Default IPv4 lookup endpoint
pub const DEFAULT_IPV4_URL: &str = "https://4.kritzl.dev";

/// Default IPv6 lookup endpoint
pub const DEFAULT_IPV6_URL: &str = "https://6.kritzl.dev";

/// HTTP-based IP source
#[derive(Debug, Clone)]
pub struct HttpIpSource {
    /// URL returning the IPv4 address
    ipv4_url: String,

    /// URL returning the IPv6 address
    ipv6_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a source using the default lookup endpoints
    pub fn new() -> Self {
        Self::with_urls(DEFAULT_IPV4_URL, DEFAULT_IPV6_URL)
    }

    /// Create a source with custom lookup endpoints
    pub fn with_urls(ipv4_url: impl Into<String>, ipv6_url: impl Into<String>) -> Self {
        Self {
            ipv4_url: ipv4_url.into(),
            ipv6_url: ipv6_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, version: IpVersion) -> &str {
        match version {
            IpVersion::V4 => &self.ipv4_url,
            IpVersion::V6 => &self.ipv6_url,
        }
    }
}

impl Default for HttpIpSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a lookup response body into an address of the expected version
fn parse_address(body: &str, version: IpVersion) -> Result<IpAddr> {
    let ip_text = body.trim();

    let ip: IpAddr = ip_text
        .parse()
        .map_err(|_| Error::ip_source(format!("Invalid IP address: {:?}", ip_text)))?;

    if !version.matches(&ip) {
        return Err(Error::ip_source(format!("Expected {}, got: {}", version, ip)));
    }

    Ok(ip)
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn fetch(&self, version: IpVersion) -> Result<IpAddr> {
        let url = self.url_for(version);
        tracing::debug!("Fetching {} address from {}", version, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network_from(&format!("Request to {} failed", url), &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::network_from("Failed to read response", &e))?;

        let ip = parse_address(&body, version)?;
        tracing::debug!("Current {} address is {}", version, ip);
        Ok(ip)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
