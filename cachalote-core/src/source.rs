use std::collections::HashMap;

use crate::error::SourceError;

/// The underlying data source a resolver fetches from on cache misses.
///
/// Three fetch shapes cover the full contract: one key, a set of keys, or
/// the entire collection. Implementations are expected to be the expensive
/// path (database, remote service); the resolver's job is to call them as
/// rarely as possible.
///
/// Semantics implementations must uphold:
///
/// * `fetch_one` returns `Ok(None)` when the key has no value - absence is
///   not a failure.
/// * `fetch_many` returns a map covering only the resolvable keys; keys
///   absent at the source are silently dropped, never errored. The resolver
///   guarantees the slice it passes contains no duplicates.
/// * `fetch_all` returns a full snapshot of the collection.
/// * Any `Err` is a genuine source failure (unreachable backend, query
///   error) and propagates to the resolver's caller.
pub trait FetchSource<K, V>: Send + Sync {
    /// Fetches the value for a single key, or `None` if the source has no
    /// entry for it.
    fn fetch_one(&self, key: &K) -> Result<Option<V>, SourceError>;

    /// Fetches the values for a set of distinct keys in one call.
    fn fetch_many(&self, keys: &[K]) -> Result<HashMap<K, V>, SourceError>;

    /// Fetches the entire collection.
    fn fetch_all(&self) -> Result<HashMap<K, V>, SourceError>;
}
