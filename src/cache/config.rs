/// Runtime cache configuration
///
/// Built from `config::CacheSettings` at startup; tests use `custom`.
use crate::config::CacheSettings;
use crate::constants::{
    DEFAULT_CACHE_DURATION_MS, DEFAULT_MAX_CACHE_SIZE, DEFAULT_SWEEP_INTERVAL_SECS,
};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// Time-to-live for cached entries
    pub ttl: Duration,

    /// Maximum number of entries, at least 1 (oldest-inserted evicted when exceeded)
    pub capacity: usize,

    /// Period of the background expiry sweep
    pub sweep_interval: Duration,
}

impl CacheConfig {
    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self {
            ttl: Duration::from_millis(settings.duration_ms),
            capacity: settings.max_size.max(1),
            sweep_interval: Duration::from_secs(settings.sweep_interval_secs),
        }
    }

    /// Custom configuration
    pub fn custom(ttl_ms: u64, capacity: usize) -> Self {
        Self {
            ttl: Duration::from_millis(ttl_ms),
            capacity: capacity.max(1),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::custom(DEFAULT_CACHE_DURATION_MS, DEFAULT_MAX_CACHE_SIZE)
    }
}
