// # ddns-core
//
// Core library for the Hetzner DDNS updater.
//
// ## Architecture Overview
//
// This library provides the core functionality for one-shot DNS syncs:
// - **IpSource**: Trait for looking up the caller's public address
// - **DnsProvider**: Trait for reading zones/records and updating records
// - **IpCache**: Per-run memo of the looked-up addresses
// - **SyncEngine**: Orchestrates zone lookup → record selection → update
// - **SyncConfig**: TOML configuration (API token and targets)
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Core logic is separate from implementations
// 2. **Library-First**: The binary is a thin wrapper around `SyncEngine`
// 3. **Fail Fast**: No retries; the first error ends the run
// 4. **Explicit State**: The only state is the per-run `IpCache`

pub mod traits;
pub mod engine;
pub mod cache;
pub mod config;
pub mod error;

// Re-export core types for convenience
pub use traits::{DnsProvider, IpSource, IpVersion, Record, RecordType, RecordUpdate, Zone};
pub use engine::SyncEngine;
pub use cache::IpCache;
pub use config::{SyncConfig, Target};
pub use error::{Error, Result};
