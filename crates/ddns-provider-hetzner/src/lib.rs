// # Hetzner DNS Provider
//
// This crate provides a Hetzner DNS provider implementation for the DDNS updater.
//
// ## Behavior
//
// - ✅ One HTTP request per trait call
// - ✅ `Auth-API-Token` attached once, as a default header of the HTTP client
// - ✅ Full error propagation (status and body of every non-2xx response)
// - ✅ Redirects are not followed
// - ❌ NO retry or backoff logic (a failure ends the run)
// - ❌ NO caching of zones or records
//
// ## Security Requirements
//
// - API token NEVER appears in logs or `Debug` output
// - The header value is marked sensitive
//
// ## API Reference
//
// - Hetzner DNS API v1: https://dns.hetzner.com/api-docs
// - Get Zones: GET `/zones?name=...`
// - Get Records: GET `/records?zone_id=...`
// - Update Record: PUT `/records/:record_id`

use async_trait::async_trait;
use ddns_core::traits::{DnsProvider, Record, RecordUpdate, Zone};
use ddns_core::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Hetzner DNS API base URL
pub const HETZNER_API_BASE: &str = "https://dns.hetzner.com/api/v1";

/// Header carrying the API token on every request
pub const AUTH_HEADER: &str = "Auth-API-Token";

const PROVIDER_NAME: &str = "hetzner";

#[derive(Debug, Deserialize)]
struct ZonesResponse {
    zones: Vec<Zone>,
}

#[derive(Debug, Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    records: Vec<Record>,
}

#[derive(Debug, Deserialize)]
struct RecordResponse {
    record: Record,
}

/// Hetzner DNS provider
///
/// Stateless apart from the HTTP client, which carries the auth header.
pub struct HetznerProvider {
    /// API base URL without trailing slash
    base_url: String,

    /// HTTP client with the `Auth-API-Token` default header
    client: reqwest::Client,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for HetznerProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HetznerProvider")
            .field("api_token", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HetznerProvider {
    /// Create a provider talking to the public Hetzner DNS API
    ///
    /// # Errors
    ///
    /// `Error::Config` if the token is empty or not a valid header value.
    pub fn new(api_token: &str) -> Result<Self> {
        Self::with_base_url(api_token, HETZNER_API_BASE)
    }

    /// Create a provider talking to a custom API base URL
    pub fn with_base_url(api_token: &str, base_url: impl Into<String>) -> Result<Self> {
        if api_token.is_empty() {
            return Err(Error::config("Hetzner API token cannot be empty"));
        }

        let mut auth_value = HeaderValue::from_str(api_token)
            .map_err(|_| Error::config("Hetzner API token is not a valid HTTP header value"))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(Policy::none())
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send a request and decode a successful JSON response
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::network_from("Hetzner request failed", &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(Error::http(status.as_u16(), body));
        }

        response.json().await.map_err(|e| {
            Error::provider(PROVIDER_NAME, format!("Failed to parse response: {}", e))
        })
    }
}

#[async_trait]
impl DnsProvider for HetznerProvider {
    /// # API Call
    ///
    /// ```http
    /// GET /zones?name=example.com
    /// Auth-API-Token: <token>
    /// ```
    async fn get_zone(&self, zone_name: &str) -> Result<Zone> {
        tracing::debug!("Looking up zone {}", zone_name);

        let request = self
            .client
            .get(self.url("zones"))
            .query(&[("name", zone_name)]);
        let response: ZonesResponse = self.execute(request).await?;

        response
            .zones
            .into_iter()
            .next()
            .ok_or_else(|| Error::zone_not_found(zone_name))
    }

    /// # API Call
    ///
    /// ```http
    /// GET /records?zone_id=:zone_id
    /// Auth-API-Token: <token>
    /// ```
    async fn list_records(&self, zone_id: &str) -> Result<Vec<Record>> {
        tracing::debug!("Listing records of zone {}", zone_id);

        let request = self
            .client
            .get(self.url("records"))
            .query(&[("zone_id", zone_id)]);
        let response: RecordsResponse = self.execute(request).await?;

        Ok(response.records)
    }

    /// # API Call
    ///
    /// ```http
    /// PUT /records/:record_id
    /// Auth-API-Token: <token>
    /// {"name": "home", "ttl": 60, "type": "A", "value": "1.2.3.4", "zone_id": "..."}
    /// ```
    async fn update_record(&self, record_id: &str, update: &RecordUpdate) -> Result<Record> {
        tracing::debug!("Updating record {} with {:?}", record_id, update);

        let request = self
            .client
            .put(self.url(&format!("records/{}", record_id)))
            .json(update);
        let response: RecordResponse = self.execute(request).await?;

        Ok(response.record)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
