//! Core sync engine
//!
//! The SyncEngine drives one full sync pass:
//! - Resolving each target's zone via DnsProvider
//! - Selecting the records named by the target
//! - Looking up the current address via IpSource (memoized per run)
//! - Writing the address into every matching A/AAAA record
//!
//! ## Architecture
//!
//! ```text
//!                            ┌──────────────┐
//!   targets (config) ───────▶│  SyncEngine  │
//!                            └──────────────┘
//!                                    │
//!              ┌─────────────────────┼─────────────────────┐
//!              │                     │                     │
//!              ▼                     ▼                     ▼
//!      ┌──────────────┐      ┌──────────────┐      ┌─────────────┐
//!      │ DnsProvider  │      │   IpCache    │─────▶│  IpSource   │
//!      │ zone/records │      │  (per run)   │      │  (lookup)   │
//!      └──────────────┘      └──────────────┘      └─────────────┘
//! ```
//!
//! ## Failure model
//!
//! The first error aborts the run; later targets are not processed and no
//! partial summary is produced.

use crate::cache::IpCache;
use crate::config::Target;
use crate::error::Result;
use crate::traits::{DnsProvider, IpSource, Record, RecordType, RecordUpdate};
use tracing::{debug, info};

/// Core sync engine
///
/// Targets are processed sequentially in configured order. Every matching
/// A/AAAA record is rewritten on every run, even when it already holds the
/// current address.
pub struct SyncEngine {
    /// DNS provider for zone/record access
    provider: Box<dyn DnsProvider>,

    /// IP source for public address lookups
    ip_source: Box<dyn IpSource>,

    /// Targets to sync
    targets: Vec<Target>,
}

impl SyncEngine {
    /// Create a new sync engine
    ///
    /// # Parameters
    ///
    /// - `provider`: DNS provider implementation
    /// - `ip_source`: IP source implementation
    /// - `targets`: Targets to sync, in processing order
    pub fn new(
        provider: Box<dyn DnsProvider>,
        ip_source: Box<dyn IpSource>,
        targets: Vec<Target>,
    ) -> Self {
        Self {
            provider,
            ip_source,
            targets,
        }
    }

    /// Targets this engine syncs
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Run one sync pass over all targets
    ///
    /// A fresh [`IpCache`] is used for every call, so each address version
    /// is looked up at most once per run and again on the next run.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Every target was processed
    /// - `Err(Error)`: The first failure; remaining targets were skipped
    pub async fn run(&self) -> Result<()> {
        debug!(
            "Starting sync of {} target(s) via {}",
            self.targets.len(),
            self.provider.provider_name()
        );

        let mut cache = IpCache::new();
        for target in &self.targets {
            self.process_target(target, &mut cache).await?;
        }

        debug!("Sync finished");
        Ok(())
    }

    /// Sync a single target
    async fn process_target(&self, target: &Target, cache: &mut IpCache) -> Result<()> {
        info!("Processing target {}", target);

        let zone = self.provider.get_zone(&target.zone).await?;
        debug!("Resolved zone {} to id {}", zone.name, zone.id);

        let records: Vec<Record> = self
            .provider
            .list_records(&zone.id)
            .await?
            .into_iter()
            .filter(|record| record.name == target.record)
            .collect();
        debug!("Found {} record(s) named {}", records.len(), target.record);

        for record in records {
            let new_value = match record.record_type {
                RecordType::A => cache.current_ipv4(self.ip_source.as_ref()).await?,
                RecordType::Aaaa => cache.current_ipv6(self.ip_source.as_ref()).await?,
                RecordType::Other(ref other) => {
                    debug!("Skipping {} record {} ({})", other, record.name, record.id);
                    continue;
                }
            };

            info!("Updating {} record to {}", record.record_type, new_value);
            let update = RecordUpdate::for_record(&record, new_value.to_string());
            let updated = self.provider.update_record(&record.id, &update).await?;
            debug!("Record {} now holds {}", updated.id, updated.value);
        }

        Ok(())
    }
}
