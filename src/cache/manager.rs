/// Bounded, time-expiring in-memory store
///
/// Thread-safe and generic over key/value types. Each operation takes the
/// internal lock once and never awaits while holding it, so get/put/sweep
/// are atomic with respect to each other.
///
/// Expired entries are not removed on read: `get` reports a miss and the
/// periodic `sweep` does the deletion.
use super::clock::{Clock, SystemClock};
use super::config::CacheConfig;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

/// Stored value with its insertion time
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // A negative age (clock moved backwards) counts as fresh
        match now.signed_duration_since(self.stored_at).to_std() {
            Ok(age) => age >= ttl,
            Err(_) => false,
        }
    }
}

/// Cache metrics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub evictions: u64,
    pub expirations: u64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Read-only view of the store's shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub size: usize,
    /// Entry lifetime in milliseconds
    pub duration: u64,
    pub max_size: usize,
}

struct StoreState<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    /// Keys in insertion order, oldest at the front
    insertion_order: VecDeque<K>,
    metrics: CacheMetrics,
}

pub struct CacheStore<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    config: CacheConfig,
    clock: Arc<dyn Clock>,
    state: Mutex<StoreState<K, V>>,
}

impl<K, V> CacheStore<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    /// Create a store backed by the wall clock
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            state: Mutex::new(StoreState {
                entries: HashMap::new(),
                insertion_order: VecDeque::new(),
                metrics: CacheMetrics::default(),
            }),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Live value for `key`, or `None` when missing or expired
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut state = self.state.lock();

        let live = state
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired(now, self.config.ttl))
            .map(|entry| entry.value.clone());

        if live.is_some() {
            state.metrics.hits += 1;
        } else {
            state.metrics.misses += 1;
        }
        live
    }

    /// Insert a value, evicting the oldest-inserted entry when full
    ///
    /// Re-inserting an existing key replaces it and moves it to the back of
    /// the insertion order without evicting anything.
    pub fn put(&self, key: K, value: V) {
        let now = self.clock.now();
        let mut state = self.state.lock();

        if state.entries.contains_key(&key) {
            state.insertion_order.retain(|k| k != &key);
        } else if state.entries.len() >= self.config.capacity {
            if let Some(oldest) = state.insertion_order.pop_front() {
                state.entries.remove(&oldest);
                state.metrics.evictions += 1;
            }
        }

        state.insertion_order.push_back(key.clone());
        state.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: now,
            },
        );
        state.metrics.inserts += 1;
    }

    /// Remove every expired entry, returning how many were dropped
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let ttl = self.config.ttl;
        let mut state = self.state.lock();

        let before = state.entries.len();
        state.entries.retain(|_, entry| !entry.is_expired(now, ttl));
        let removed = before - state.entries.len();

        if removed > 0 {
            let StoreState {
                entries,
                insertion_order,
                metrics,
            } = &mut *state;
            insertion_order.retain(|k| entries.contains_key(k));
            metrics.expirations += removed as u64;
        }
        removed
    }

    /// Empty the store, returning the number of entries it held
    pub fn clear(&self) -> usize {
        let mut state = self.state.lock();
        let size = state.entries.len();
        state.entries.clear();
        state.insertion_order.clear();
        size
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            duration: self.config.ttl.as_millis() as u64,
            max_size: self.config.capacity,
        }
    }

    pub fn metrics(&self) -> CacheMetrics {
        self.state.lock().metrics.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` is stored, live or not
    pub fn contains_key(&self, key: &K) -> bool {
        self.state.lock().entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::clock::ManualClock;

    fn store_with_clock(ttl_ms: u64, capacity: usize) -> (CacheStore<String, String>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let store = CacheStore::with_clock(CacheConfig::custom(ttl_ms, capacity), clock.clone());
        (store, clock)
    }

    #[test]
    fn test_basic_operations() {
        let (cache, _clock) = store_with_clock(60_000, 100);

        cache.put("key1".to_string(), "value1".to_string());
        assert_eq!(cache.get(&"key1".to_string()), Some("value1".to_string()));
        assert_eq!(cache.get(&"nonexistent".to_string()), None);

        let metrics = cache.metrics();
        assert_eq!(metrics.hits, 1);
        assert_eq!(metrics.misses, 1);
        assert_eq!(metrics.inserts, 1);
        assert!((metrics.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_expiry_boundary() {
        let (cache, clock) = store_with_clock(1_000, 10);
        cache.put("key".to_string(), "value".to_string());

        clock.advance(Duration::from_millis(999));
        assert_eq!(cache.get(&"key".to_string()), Some("value".to_string()));

        clock.advance(Duration::from_millis(1));
        assert_eq!(cache.get(&"key".to_string()), None);

        // Reads do not delete; the sweep does
        assert!(cache.contains_key(&"key".to_string()));
        assert_eq!(cache.sweep(), 1);
        assert!(cache.is_empty());
        assert_eq!(cache.metrics().expirations, 1);
    }

    #[test]
    fn test_fifo_eviction_ignores_access() {
        let (cache, _clock) = store_with_clock(60_000, 2);

        cache.put("key1".to_string(), "value1".to_string());
        cache.put("key2".to_string(), "value2".to_string());
        // Reading key1 must not protect it: eviction is by insertion order
        assert!(cache.get(&"key1".to_string()).is_some());
        cache.put("key3".to_string(), "value3".to_string());

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"key1".to_string()), None);
        assert_eq!(cache.get(&"key2".to_string()), Some("value2".to_string()));
        assert_eq!(cache.get(&"key3".to_string()), Some("value3".to_string()));
        assert_eq!(cache.metrics().evictions, 1);
    }

    #[test]
    fn test_capacity_plus_one_drops_first_key() {
        let (cache, _clock) = store_with_clock(60_000, 100);
        for i in 0..=100 {
            cache.put(format!("url-{}", i), format!("result-{}", i));
        }

        assert_eq!(cache.len(), 100);
        assert!(!cache.contains_key(&"url-0".to_string()));
        assert!(cache.contains_key(&"url-1".to_string()));
        assert!(cache.contains_key(&"url-100".to_string()));
    }

    #[test]
    fn test_zero_capacity_keeps_only_newest() {
        let (cache, _clock) = store_with_clock(60_000, 0);
        assert_eq!(cache.config().capacity, 1);

        cache.put("first".to_string(), "1".to_string());
        cache.put("second".to_string(), "2".to_string());

        assert_eq!(cache.len(), 1);
        assert!(!cache.contains_key(&"first".to_string()));
        assert_eq!(cache.get(&"second".to_string()), Some("2".to_string()));
        assert_eq!(cache.metrics().evictions, 1);
    }

    #[test]
    fn test_reinsert_existing_key_does_not_evict() {
        let (cache, _clock) = store_with_clock(60_000, 2);

        cache.put("a".to_string(), "1".to_string());
        cache.put("b".to_string(), "2".to_string());
        cache.put("a".to_string(), "3".to_string());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a".to_string()), Some("3".to_string()));

        // "a" moved to the back, so "b" is now the oldest
        cache.put("c".to_string(), "4".to_string());
        assert!(!cache.contains_key(&"b".to_string()));
        assert!(cache.contains_key(&"a".to_string()));
    }

    #[test]
    fn test_reinsert_restarts_ttl() {
        let (cache, clock) = store_with_clock(1_000, 10);
        cache.put("a".to_string(), "1".to_string());
        clock.advance(Duration::from_millis(800));
        cache.put("a".to_string(), "2".to_string());
        clock.advance(Duration::from_millis(800));
        assert_eq!(cache.get(&"a".to_string()), Some("2".to_string()));
    }

    #[test]
    fn test_sweep_keeps_live_entries_and_order() {
        let (cache, clock) = store_with_clock(1_000, 2);
        cache.put("old".to_string(), "1".to_string());
        clock.advance(Duration::from_millis(600));
        cache.put("new".to_string(), "2".to_string());
        clock.advance(Duration::from_millis(500));

        assert_eq!(cache.sweep(), 1);
        assert_eq!(cache.len(), 1);

        // Order queue was pruned: filling up evicts "new", not a ghost key
        cache.put("x".to_string(), "3".to_string());
        cache.put("y".to_string(), "4".to_string());
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains_key(&"new".to_string()));
    }

    #[test]
    fn test_clear_reports_prior_size() {
        let (cache, _clock) = store_with_clock(60_000, 100);
        for i in 0..7 {
            cache.put(format!("k{}", i), "v".to_string());
        }

        assert_eq!(cache.clear(), 7);
        assert_eq!(cache.stats().size, 0);
        assert_eq!(cache.clear(), 0);
    }

    #[test]
    fn test_stats_shape() {
        let (cache, _clock) = store_with_clock(3_600_000, 100);
        cache.put("k".to_string(), "v".to_string());

        let stats = cache.stats();
        assert_eq!(
            stats,
            CacheStats {
                size: 1,
                duration: 3_600_000,
                max_size: 100
            }
        );

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["maxSize"], 100);
        assert_eq!(json["duration"], 3_600_000);
    }
}
