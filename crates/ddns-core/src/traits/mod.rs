//! Core traits for the DDNS updater
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`IpSource`]: Look up the caller's public address
//! - [`DnsProvider`]: Read zones/records and update records via provider APIs

pub mod ip_source;
pub mod dns_provider;

pub use ip_source::{IpSource, IpVersion};
pub use dns_provider::{DnsProvider, Record, RecordType, RecordUpdate, Zone, UPDATE_TTL_SECS};
