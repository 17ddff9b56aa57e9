//! Storesearch result cache.
//!
//! Recomputing a ranked result set (and the upstream catalog calls behind
//! it) for the same query within minutes is wasted work. [`TtlCache`] keeps
//! the final formatted result list per normalized query for a bounded time.
//!
//! Eviction is lazy: a stale entry is removed when a lookup finds it expired.
//! There is no background sweep, so memory is bounded only by the distinct
//! queries seen within one TTL window. If production ever sees unbounded
//! query cardinality, a capacity bound (LRU) is the follow-up; observed
//! behavior never needed one.
//!
//! A single mutex guards the whole map. Contention is low (one lock per
//! request, held only for the map operation), so per-key locking would buy
//! nothing.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Revision tag of the matching algorithm, baked into every cache key so a
/// policy change cannot serve results computed under the previous one.
pub const MATCH_REVISION: &str = "m1";

/// Default time-to-live: ten minutes from insertion.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Builds the cache key for a raw query: the match revision plus the
/// normalized query text. Normalization determinism is the only collision
/// handling needed.
pub fn query_key(raw_query: &str) -> String {
    format!("{}:{}", MATCH_REVISION, canonical::normalize(raw_query))
}

struct CacheSlot<V> {
    value: V,
    inserted_at: Instant,
}

/// Mutex-guarded map of cached values with per-entry expiry.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheSlot<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached value for `key` if it is still live. An expired
    /// entry is removed here and reported as a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.lock();
        match entries.get(key) {
            None => return None,
            Some(slot) if slot.inserted_at.elapsed() < self.ttl => {
                return Some(slot.value.clone());
            }
            Some(_) => {}
        }
        entries.remove(key);
        None
    }

    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its TTL.
    pub fn put(&self, key: impl Into<String>, value: V) {
        let mut entries = self.lock();
        entries.insert(
            key.into(),
            CacheSlot {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Number of entries currently held, live or not yet evicted.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheSlot<V>>> {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map itself is still usable.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_returns_the_value() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.put("m1:redken shampoo", vec![1, 2, 3]);
        assert_eq!(cache.get("m1:redken shampoo"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn expired_entry_is_a_miss_and_is_evicted() {
        let cache = TtlCache::new(Duration::from_millis(20));
        cache.put("k", "ranked".to_string());
        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get("k"), None);
        // Lazy eviction happened during the lookup.
        assert!(cache.is_empty());
    }

    #[test]
    fn put_overwrites_a_stale_entry() {
        let cache = TtlCache::new(Duration::from_millis(20));
        cache.put("k", 1);
        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get("k"), None);
        cache.put("k", 2);
        assert_eq!(cache.get("k"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_queries_coexist() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.put(query_key("Redken Shampoo"), 1);
        cache.put(query_key("olaplex"), 2);
        assert_eq!(cache.get(&query_key("redken   shampoo")), Some(1));
        assert_eq!(cache.get(&query_key("Olaplex!")), Some(2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn key_carries_the_match_revision() {
        let key = query_key("  Kérastase  Shampoo ");
        assert_eq!(key, format!("{MATCH_REVISION}:kerastase shampoo"));
    }

    #[test]
    fn concurrent_readers_and_writers_do_not_corrupt_entries() {
        use std::sync::Arc;

        let cache = Arc::new(TtlCache::new(Duration::from_secs(60)));
        let mut handles = Vec::new();
        for t in 0..8 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                for i in 0..200 {
                    let key = format!("q{}", i % 10);
                    cache.put(&key, t * 1000 + i);
                    let _ = cache.get(&key);
                }
            }));
        }
        for handle in handles {
            handle.join().expect("worker panicked");
        }
        // Ten distinct keys were ever written.
        assert_eq!(cache.len(), 10);
    }
}
