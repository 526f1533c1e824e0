//! Test doubles and common utilities for sync contract tests
//!
//! These doubles record every call so tests can assert on the exact
//! request pattern the engine produces.

#![allow(dead_code)]

use ddns_core::error::{Error, Result};
use ddns_core::traits::{
    DnsProvider, IpSource, IpVersion, Record, RecordType, RecordUpdate, Zone,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A provider call, in the order the engine made it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    GetZone(String),
    ListRecords(String),
    UpdateRecord(String, RecordUpdate),
}

/// A mock DnsProvider backed by in-memory zones and records
///
/// Clones share state, so a test can keep one handle while the engine
/// owns another.
#[derive(Clone, Default)]
pub struct MockDnsProvider {
    zones: Arc<Mutex<HashMap<String, Vec<Zone>>>>,
    records: Arc<Mutex<HashMap<String, Vec<Record>>>>,
    calls: Arc<Mutex<Vec<ProviderCall>>>,
    fail_updates_with: Arc<Mutex<Option<u16>>>,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone under its name
    pub fn with_zone(self, id: &str, name: &str) -> Self {
        self.zones
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default()
            .push(Zone {
                id: id.to_string(),
                name: name.to_string(),
            });
        self
    }

    /// Add a record to a zone
    pub fn with_record(self, record: Record) -> Self {
        self.records
            .lock()
            .unwrap()
            .entry(record.zone_id.clone())
            .or_default()
            .push(record);
        self
    }

    /// Make every update fail with the given HTTP status
    pub fn failing_updates(self, status: u16) -> Self {
        *self.fail_updates_with.lock().unwrap() = Some(status);
        self
    }

    /// All calls so far
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the update calls, as (record id, payload)
    pub fn updates(&self) -> Vec<(String, RecordUpdate)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ProviderCall::UpdateRecord(id, update) => Some((id, update)),
                _ => None,
            })
            .collect()
    }

    fn record_call(&self, call: ProviderCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl DnsProvider for MockDnsProvider {
    async fn get_zone(&self, zone_name: &str) -> Result<Zone> {
        self.record_call(ProviderCall::GetZone(zone_name.to_string()));
        self.zones
            .lock()
            .unwrap()
            .get(zone_name)
            .and_then(|zones| zones.first().cloned())
            .ok_or_else(|| Error::zone_not_found(zone_name))
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<Record>> {
        self.record_call(ProviderCall::ListRecords(zone_id.to_string()));
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(zone_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_record(&self, record_id: &str, update: &RecordUpdate) -> Result<Record> {
        self.record_call(ProviderCall::UpdateRecord(
            record_id.to_string(),
            update.clone(),
        ));

        if let Some(status) = *self.fail_updates_with.lock().unwrap() {
            return Err(Error::http(status, "update rejected"));
        }

        Ok(Record {
            id: record_id.to_string(),
            zone_id: update.zone_id.clone(),
            name: update.name.clone(),
            record_type: update.record_type.clone(),
            value: update.value.clone(),
            ttl: Some(update.ttl),
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// An IpSource with fixed answers that counts lookups per version
#[derive(Clone)]
pub struct CountingIpSource {
    v4: Option<IpAddr>,
    v6: Option<IpAddr>,
    v4_calls: Arc<AtomicUsize>,
    v6_calls: Arc<AtomicUsize>,
}

impl CountingIpSource {
    /// Source answering with the given addresses; `None` makes that
    /// version's lookup fail with a network error
    pub fn new(v4: Option<&str>, v6: Option<&str>) -> Self {
        Self {
            v4: v4.map(|ip| ip.parse().unwrap()),
            v6: v6.map(|ip| ip.parse().unwrap()),
            v4_calls: Arc::new(AtomicUsize::new(0)),
            v6_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn v4_calls(&self) -> usize {
        self.v4_calls.load(Ordering::SeqCst)
    }

    pub fn v6_calls(&self) -> usize {
        self.v6_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IpSource for CountingIpSource {
    async fn fetch(&self, version: IpVersion) -> Result<IpAddr> {
        let (answer, counter) = match version {
            IpVersion::V4 => (self.v4, &self.v4_calls),
            IpVersion::V6 => (self.v6, &self.v6_calls),
        };
        counter.fetch_add(1, Ordering::SeqCst);
        answer.ok_or_else(|| Error::network(format!("no {} connectivity", version)))
    }

    fn source_name(&self) -> &'static str {
        "counting"
    }
}

/// Helper to build a provider record
pub fn record(id: &str, zone_id: &str, name: &str, record_type: &str, value: &str) -> Record {
    Record {
        id: id.to_string(),
        zone_id: zone_id.to_string(),
        name: name.to_string(),
        record_type: RecordType::from(record_type),
        value: value.to_string(),
        ttl: Some(300),
    }
}
