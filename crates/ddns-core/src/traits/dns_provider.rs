// # DNS Provider Trait
//
// Defines the interface for reading zones/records and writing records
// through a DNS provider's REST API.
//
// ## Implementations
//
// - Hetzner DNS: `ddns-provider-hetzner` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::DnsProvider;
//
// let zone = provider.get_zone("example.com").await?;
// for record in provider.list_records(&zone.id).await? {
//     println!("{} {} {}", record.name, record.record_type, record.value);
// }
// ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// TTL written by every update, regardless of the record's previous TTL
pub const UPDATE_TTL_SECS: u64 = 60;

/// A DNS zone as represented by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Provider-specific zone ID
    pub id: String,
    /// Zone name (e.g., "example.com")
    pub name: String,
}

/// DNS record type
///
/// Only `A` and `AAAA` are ever updated. Everything else is carried as
/// [`RecordType::Other`] so listing a zone never fails on an unknown type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// IPv6 address record
    Aaaa,
    /// Any other record type (MX, TXT, CNAME, ...)
    Other(String),
}

impl RecordType {
    /// The provider's wire name for this type
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Other(other) => other,
        }
    }
}

impl From<String> for RecordType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::Aaaa,
            _ => RecordType::Other(value),
        }
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        RecordType::from(value.to_string())
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        match value {
            RecordType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as represented by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-specific record ID
    pub id: String,
    /// ID of the zone the record belongs to
    pub zone_id: String,
    /// Record name relative to the zone (e.g., "home" or "@")
    pub name: String,
    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record value (the address for A/AAAA records)
    pub value: String,
    /// Time-to-live in seconds; absent when the zone default applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

/// Full replacement payload for a record update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordUpdate {
    /// Record name
    pub name: String,
    /// Time-to-live in seconds
    pub ttl: u64,
    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// New record value
    pub value: String,
    /// Zone ID
    pub zone_id: String,
}

impl RecordUpdate {
    /// Build the update that points `record` at `value`
    ///
    /// Name, type and zone are carried over; the TTL is always
    /// [`UPDATE_TTL_SECS`].
    pub fn for_record(record: &Record, value: impl Into<String>) -> Self {
        Self {
            name: record.name.clone(),
            ttl: UPDATE_TTL_SECS,
            record_type: record.record_type.clone(),
            value: value.into(),
            zone_id: record.zone_id.clone(),
        }
    }
}

/// Trait for DNS provider implementations
///
/// A provider is a thin typed wrapper over the provider's API. Every method
/// maps to exactly one HTTP request.
///
/// # Forbidden
///
/// - Retry logic or backoff: errors are returned and end the run
/// - Caching zones or records between calls
/// - Deciding whether an update is needed
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Look up a zone by its exact name
    ///
    /// The provider returns a collection; the first element is taken.
    ///
    /// # Returns
    ///
    /// - `Ok(Zone)`: The first matching zone
    /// - `Err(Error::ZoneNotFound)`: If the lookup returned no zone
    /// - `Err(Error)`: If the request failed
    async fn get_zone(&self, zone_name: &str) -> Result<Zone, crate::Error>;

    /// List every record of a zone, unfiltered, in provider order
    async fn list_records(&self, zone_id: &str) -> Result<Vec<Record>, crate::Error>;

    /// Replace the mutable fields of a record
    ///
    /// # Returns
    ///
    /// The record as stored by the provider after the update
    async fn update_record(
        &self,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<Record, crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
