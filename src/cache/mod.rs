//! Composite result cache
//!
//! - `manager`: the bounded, time-expiring `CacheStore`
//! - `key`: URL fingerprints used as cache keys
//! - `clock`: injectable time source
//! - `sweeper`: periodic background removal of expired entries

pub mod clock;
pub mod config;
pub mod key;
pub mod manager;
pub mod sweeper;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use key::fingerprint;
pub use manager::{CacheMetrics, CacheStats, CacheStore};
pub use sweeper::{start_sweeper, SweepHandle};
