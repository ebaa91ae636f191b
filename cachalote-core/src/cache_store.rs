use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::StoreError;

/// A cache store partitioned into named regions.
///
/// A region is an isolated string-keyed namespace: all resolvers built for
/// one logical data source target the same region, so a value cached through
/// one resolve path is visible to the others, while unrelated sources never
/// collide.
///
/// Implementations must provide atomic `get`/`put` per key. Cross-key
/// atomicity or transactions are not required: concurrent writers to the same
/// key resolve last-write-wins.
///
/// # Errors
///
/// `put` may fail (a remote store may be unreachable). Resolvers treat a
/// failed `put` as non-fatal: the fetched value is still returned to the
/// caller and the entry simply stays uncached.
///
/// # Examples
///
/// ```
/// use cachalote_core::{CacheStore, MemoryStore};
///
/// let store: MemoryStore<String> = MemoryStore::new();
///
/// store.put("users", "42", "ada".to_string()).unwrap();
/// assert_eq!(store.get("users", "42"), Some("ada".to_string()));
///
/// // Regions are isolated namespaces
/// assert_eq!(store.get("orders", "42"), None);
///
/// store.clear("users");
/// assert_eq!(store.get("users", "42"), None);
/// ```
pub trait CacheStore<V>: Send + Sync {
    /// Retrieves the value cached under `key` in `region`, if any.
    fn get(&self, region: &str, key: &str) -> Option<V>;

    /// Caches `value` under `key` in `region`, replacing any previous value.
    fn put(&self, region: &str, key: &str, value: V) -> Result<(), StoreError>;

    /// Removes the entry for `key` in `region`. Returns `true` if an entry
    /// was present.
    fn evict(&self, region: &str, key: &str) -> bool;

    /// Removes every entry in `region`.
    fn clear(&self, region: &str);
}

/// In-memory [`CacheStore`] backed by per-region hash maps behind a
/// `parking_lot::RwLock`.
///
/// Reads take the shared lock, so concurrent lookups never block each other;
/// writes take the exclusive lock. Values are stored owned and returned as
/// clones.
///
/// This store never fails a `put` and has no size limit - entries live until
/// evicted or cleared.
///
/// # Examples
///
/// ```
/// use cachalote_core::{CacheStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.put("sessions", "s1", 7u32).unwrap();
///
/// assert!(store.contains("sessions", "s1"));
/// assert_eq!(store.len("sessions"), 1);
///
/// assert!(store.evict("sessions", "s1"));
/// assert!(!store.evict("sessions", "s1"));
/// ```
pub struct MemoryStore<V> {
    regions: RwLock<HashMap<String, HashMap<String, V>>>,
}

impl<V> MemoryStore<V> {
    /// Creates an empty store with no regions.
    pub fn new() -> Self {
        Self {
            regions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of entries cached in `region`.
    ///
    /// A region that was never written to reports 0.
    pub fn len(&self, region: &str) -> usize {
        self.regions
            .read()
            .get(region)
            .map_or(0, |entries| entries.len())
    }

    /// Returns `true` if `region` holds no entries.
    pub fn is_empty(&self, region: &str) -> bool {
        self.len(region) == 0
    }

    /// Returns `true` if `region` holds an entry under `key`.
    ///
    /// Useful in tests for asserting the exact key representation written by
    /// a resolver.
    pub fn contains(&self, region: &str, key: &str) -> bool {
        self.regions
            .read()
            .get(region)
            .map_or(false, |entries| entries.contains_key(key))
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync> CacheStore<V> for MemoryStore<V> {
    fn get(&self, region: &str, key: &str) -> Option<V> {
        self.regions.read().get(region)?.get(key).cloned()
    }

    fn put(&self, region: &str, key: &str, value: V) -> Result<(), StoreError> {
        self.regions
            .write()
            .entry(region.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    fn evict(&self, region: &str, key: &str) -> bool {
        let mut regions = self.regions.write();
        match regions.get_mut(region) {
            Some(entries) => entries.remove(key).is_some(),
            None => false,
        }
    }

    fn clear(&self, region: &str) {
        self.regions.write().remove(region);
    }
}
