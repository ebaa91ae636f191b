use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache_store::CacheStore;
use crate::eligibility::Eligibility;
use crate::error::ResolveError;
use crate::keys::CacheKey;
use crate::source::FetchSource;
#[cfg(feature = "stats")]
use crate::stats::ResolverStats;

/// Shared key-extraction rule: renders a lookup key into the region's string
/// key space.
type KeyFn<K> = Arc<dyn Fn(&K) -> String + Send + Sync>;

/// Resolves lookups against a shared cache region, fetching only what the
/// region does not already hold.
///
/// A resolver owns handles to a [`CacheStore`] and a [`FetchSource`] plus its
/// configuration (region name, key-extraction rule, eligibility predicates)
/// and exposes three paths over the same region:
///
/// * [`resolve_one`](Resolver::resolve_one) - cached value or
///   fetch-one-and-cache.
/// * [`resolve_many`](Resolver::resolve_many) - partition the requested keys
///   into hits and misses, bulk-fetch only the misses, merge, cache the new
///   entries.
/// * [`resolve_all`](Resolver::resolve_all) - fetch the whole collection
///   unconditionally and seed the region with it.
///
/// All three paths use the same region and the same key-extraction rule, so
/// a value cached by any path is a hit for the others. Resolvers hold no
/// mutable state of their own; wrap one in an `Arc` to share it across
/// threads (no single-flight guarantee - concurrent overlapping calls may
/// each reach the source, last write wins at the store).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use cachalote_core::{FetchSource, MemoryStore, Resolver, SourceError};
///
/// struct UserDirectory {
///     users: HashMap<u64, String>,
/// }
///
/// impl FetchSource<u64, String> for UserDirectory {
///     fn fetch_one(&self, key: &u64) -> Result<Option<String>, SourceError> {
///         Ok(self.users.get(key).cloned())
///     }
///
///     fn fetch_many(&self, keys: &[u64]) -> Result<HashMap<u64, String>, SourceError> {
///         Ok(keys
///             .iter()
///             .filter_map(|k| self.users.get(k).map(|v| (*k, v.clone())))
///             .collect())
///     }
///
///     fn fetch_all(&self) -> Result<HashMap<u64, String>, SourceError> {
///         Ok(self.users.clone())
///     }
/// }
///
/// let mut users = HashMap::new();
/// users.insert(1, "ada".to_string());
/// users.insert(2, "grace".to_string());
///
/// let resolver = Resolver::builder(
///     "users",
///     Arc::new(MemoryStore::new()),
///     Arc::new(UserDirectory { users }),
/// )
/// .build();
///
/// // First call fetches both keys from the source and caches them
/// let resolved = resolver.resolve_many(&[1, 2]).unwrap();
/// assert_eq!(resolved.len(), 2);
///
/// // The single-key path hits the same region - no fetch happens here
/// assert_eq!(resolver.resolve_one(&1).unwrap(), "ada");
///
/// // Keys unknown to the source are omitted, not errors
/// let partial = resolver.resolve_many(&[2, 99]).unwrap();
/// assert_eq!(partial.len(), 1);
/// ```
pub struct Resolver<K, V, S, F> {
    store: Arc<S>,
    source: Arc<F>,
    region: String,
    key_fn: KeyFn<K>,
    eligibility: Eligibility<K, V>,
    #[cfg(feature = "stats")]
    stats: ResolverStats,
}

impl<K, V, S, F> Resolver<K, V, S, F>
where
    S: CacheStore<V>,
    F: FetchSource<K, V>,
{
    /// Starts building a resolver over `region`, backed by `store` and
    /// `source`.
    ///
    /// The builder configures the key-extraction rule and the eligibility
    /// predicates; see [`ResolverBuilder`]. Resolvers meant to share one
    /// logical region must be given the same region name, the same store
    /// handle, and the same key-extraction rule.
    pub fn builder(
        region: impl Into<String>,
        store: Arc<S>,
        source: Arc<F>,
    ) -> ResolverBuilder<K, V, S, F> {
        ResolverBuilder {
            store,
            source,
            region: region.into(),
            key_fn: None,
            eligibility: Eligibility::always(),
        }
    }

    /// The cache region this resolver reads and writes.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Counters for this resolver's lookups and fetches.
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> &ResolverStats {
        &self.stats
    }
}

impl<K, V, S, F> Resolver<K, V, S, F>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: CacheStore<V>,
    F: FetchSource<K, V>,
{
    /// Resolves a single key: the cached value on a hit, otherwise one
    /// `fetch_one` call whose result is conditionally cached and returned.
    ///
    /// # Errors
    ///
    /// * [`ResolveError::NotFound`] when the source has no value for `key`.
    ///   Nothing is cached; the next call reaches the source again.
    /// * [`ResolveError::Source`] when the source itself fails.
    pub fn resolve_one(&self, key: &K) -> Result<V, ResolveError> {
        let cache_key = (self.key_fn)(key);
        if let Some(value) = self.store.get(&self.region, &cache_key) {
            #[cfg(feature = "stats")]
            self.stats.record_hit();
            return Ok(value);
        }
        #[cfg(feature = "stats")]
        self.stats.record_miss();

        let value = self
            .source
            .fetch_one(key)?
            .ok_or_else(|| ResolveError::NotFound {
                region: self.region.clone(),
                key: cache_key.clone(),
            })?;
        #[cfg(feature = "stats")]
        self.stats.record_fetched(1);

        self.persist(key, &value);
        Ok(value)
    }

    /// Resolves a set of keys, fetching only the subset absent from the
    /// cache region.
    ///
    /// Duplicate keys in `keys` collapse before anything else happens, so
    /// the source is never asked for the same key twice within one call.
    /// Each remaining key is looked up in the region; if every key is a hit
    /// the source is not contacted at all. Otherwise `fetch_many` runs
    /// exactly once with the miss set, the fetched entries are individually
    /// run through the eligibility filter for persistence, and the returned
    /// map is the union of hits and fetched entries - including entries the
    /// filter declined to persist.
    ///
    /// Keys the source cannot resolve are simply absent from the result.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Source`] when `fetch_many` fails. Nothing from the
    /// failed call is cached; entries cached by earlier calls are untouched.
    pub fn resolve_many(&self, keys: &[K]) -> Result<HashMap<K, V>, ResolveError> {
        let mut resolved = HashMap::with_capacity(keys.len());
        let mut misses: Vec<K> = Vec::new();
        let mut seen: HashSet<&K> = HashSet::with_capacity(keys.len());

        for key in keys {
            if !seen.insert(key) {
                continue;
            }
            let cache_key = (self.key_fn)(key);
            match self.store.get(&self.region, &cache_key) {
                Some(value) => {
                    #[cfg(feature = "stats")]
                    self.stats.record_hit();
                    resolved.insert(key.clone(), value);
                }
                None => {
                    #[cfg(feature = "stats")]
                    self.stats.record_miss();
                    misses.push(key.clone());
                }
            }
        }

        if misses.is_empty() {
            return Ok(resolved);
        }

        debug!(
            region = %self.region,
            hits = resolved.len(),
            misses = misses.len(),
            "batch lookup partitioned, fetching miss set"
        );

        let fetched = self.source.fetch_many(&misses)?;
        #[cfg(feature = "stats")]
        self.stats.record_fetched(fetched.len());

        for (key, value) in fetched {
            self.persist(&key, &value);
            resolved.insert(key, value);
        }

        Ok(resolved)
    }

    /// Fetches the entire collection and seeds the cache region with it.
    ///
    /// The cache is never consulted first: this path always reaches the
    /// source. Every returned entry passes through the eligibility filter
    /// and, when accepted, is persisted under the same region and key rule
    /// the other two paths use - which is what lets a prior `resolve_all`
    /// satisfy later `resolve_one`/`resolve_many` calls without any further
    /// source traffic. The full map is returned regardless of what the
    /// filter decided.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Source`] when `fetch_all` fails.
    pub fn resolve_all(&self) -> Result<HashMap<K, V>, ResolveError> {
        let fetched = self.source.fetch_all()?;
        #[cfg(feature = "stats")]
        self.stats.record_fetched(fetched.len());

        debug!(
            region = %self.region,
            entries = fetched.len(),
            "full fetch, seeding cache region"
        );

        for (key, value) in &fetched {
            self.persist(key, value);
        }

        Ok(fetched)
    }

    /// Writes one fetched entry to the region if the eligibility filter
    /// accepts it. Store failures are non-fatal: the entry stays uncached
    /// and the caller still receives the value.
    fn persist(&self, key: &K, value: &V) {
        if !self.eligibility.should_cache(key, value) {
            #[cfg(feature = "stats")]
            self.stats.record_declined();
            return;
        }
        let cache_key = (self.key_fn)(key);
        if let Err(err) = self.store.put(&self.region, &cache_key, value.clone()) {
            warn!(
                region = %self.region,
                key = %cache_key,
                error = %err,
                "cache write failed, value returned uncached"
            );
        }
    }
}

/// Builder for [`Resolver`], created via [`Resolver::builder`].
///
/// Configuration mirrors what used to be declarative elsewhere: the
/// key-extraction rule and the condition/unless predicates are plain
/// function values.
///
/// # Examples
///
/// ```ignore
/// let resolver = Resolver::builder("products", store, source)
///     .key_fn(|id: &ProductId| format!("{}:{}", id.warehouse, id.sku))
///     .condition(|id, _product| id.warehouse != 0)
///     .unless(|_id, product: &Product| product.discontinued)
///     .build();
/// ```
pub struct ResolverBuilder<K, V, S, F> {
    store: Arc<S>,
    source: Arc<F>,
    region: String,
    key_fn: Option<KeyFn<K>>,
    eligibility: Eligibility<K, V>,
}

impl<K, V, S, F> ResolverBuilder<K, V, S, F> {
    /// Replaces the default key-extraction rule ([`CacheKey::cache_key`])
    /// for all three resolve paths at once.
    ///
    /// The function must be pure: the same key must always render to the
    /// same string, or cross-path consistency breaks.
    pub fn key_fn<G>(mut self, key_fn: G) -> Self
    where
        G: Fn(&K) -> String + Send + Sync + 'static,
    {
        self.key_fn = Some(Arc::new(key_fn));
        self
    }

    /// Declares the inclusion condition; see [`Eligibility`].
    pub fn condition<G>(mut self, predicate: G) -> Self
    where
        G: Fn(&K, &V) -> bool + Send + Sync + 'static,
    {
        self.eligibility = self.eligibility.with_condition(predicate);
        self
    }

    /// Declares the exclusion condition; see [`Eligibility`].
    pub fn unless<G>(mut self, predicate: G) -> Self
    where
        G: Fn(&K, &V) -> bool + Send + Sync + 'static,
    {
        self.eligibility = self.eligibility.with_unless(predicate);
        self
    }

    /// Finishes the build.
    ///
    /// Unless [`key_fn`](ResolverBuilder::key_fn) was set, keys are rendered
    /// through their [`CacheKey`] implementation.
    pub fn build(self) -> Resolver<K, V, S, F>
    where
        K: CacheKey,
    {
        let key_fn = self
            .key_fn
            .unwrap_or_else(|| Arc::new(|key: &K| key.cache_key()));
        Resolver {
            store: self.store,
            source: self.source,
            region: self.region,
            key_fn,
            eligibility: self.eligibility,
            #[cfg(feature = "stats")]
            stats: ResolverStats::new(),
        }
    }
}
