//! # Cachalote
//!
//! Batch cache resolution for Rust: resolve single keys, key sets, or whole
//! collections against one shared cache region, fetching from the backing
//! source only what the region does not already hold.
//!
//! ## Features
//!
//! - **Partition-fetch-merge**: a batch lookup splits into cache hits and a
//!   miss set; only the misses travel to the source, in a single bulk call
//! - **One region, three paths**: single-key, batch, and fetch-everything
//!   resolution share the same region and key rule, so each path's writes
//!   are the other paths' hits
//! - **Conditional persistence**: per-entry `condition`/`unless` predicates
//!   decide what gets cached - never what gets returned
//! - **Pluggable**: bring your own [`CacheStore`] and [`FetchSource`]; an
//!   in-memory store ships with the crate
//! - **Thread-safe**: resolvers are `Send + Sync` and carry no mutable state
//!   of their own
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use cachalote::{FetchSource, MemoryStore, Resolver, SourceError};
//!
//! struct UserDirectory {
//!     users: HashMap<u64, String>,
//! }
//!
//! impl FetchSource<u64, String> for UserDirectory {
//!     fn fetch_one(&self, key: &u64) -> Result<Option<String>, SourceError> {
//!         Ok(self.users.get(key).cloned())
//!     }
//!
//!     fn fetch_many(&self, keys: &[u64]) -> Result<HashMap<u64, String>, SourceError> {
//!         Ok(keys
//!             .iter()
//!             .filter_map(|k| self.users.get(k).map(|v| (*k, v.clone())))
//!             .collect())
//!     }
//!
//!     fn fetch_all(&self) -> Result<HashMap<u64, String>, SourceError> {
//!         Ok(self.users.clone())
//!     }
//! }
//!
//! let mut users = HashMap::new();
//! users.insert(1, "ada".to_string());
//! users.insert(2, "grace".to_string());
//!
//! let resolver = Resolver::builder(
//!     "users",
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(UserDirectory { users }),
//! )
//! .build();
//!
//! // Fetches both keys once, then serves them from the region
//! let resolved = resolver.resolve_many(&[1, 2]).unwrap();
//! assert_eq!(resolved[&1], "ada");
//! assert_eq!(resolver.resolve_one(&2).unwrap(), "grace");
//! ```
//!
//! ## Conditional Persistence
//!
//! Predicates gate what is written to the region, never what is returned:
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use cachalote::{FetchSource, MemoryStore, Resolver, SourceError};
//!
//! struct Scores;
//!
//! impl FetchSource<u32, i64> for Scores {
//!     fn fetch_one(&self, key: &u32) -> Result<Option<i64>, SourceError> {
//!         Ok(Some(*key as i64 * 10))
//!     }
//!
//!     fn fetch_many(&self, keys: &[u32]) -> Result<HashMap<u32, i64>, SourceError> {
//!         Ok(keys.iter().map(|k| (*k, *k as i64 * 10)).collect())
//!     }
//!
//!     fn fetch_all(&self) -> Result<HashMap<u32, i64>, SourceError> {
//!         Ok(HashMap::new())
//!     }
//! }
//!
//! let resolver = Resolver::builder("scores", Arc::new(MemoryStore::new()), Arc::new(Scores))
//!     .unless(|_key, score: &i64| *score <= 0)
//!     .build();
//!
//! // Returned either way; only positive scores are persisted
//! assert_eq!(resolver.resolve_one(&7).unwrap(), 70);
//! assert_eq!(resolver.resolve_one(&0).unwrap(), 0);
//! ```
//!
//! ## Custom Cache Keys
//!
//! Keys are rendered into the region's string key space through the
//! [`CacheKey`] trait (implemented for strings and the primitives), through
//! the `Debug`-based [`DefaultCacheKey`] opt-in, or per resolver with
//! [`ResolverBuilder::key_fn`] - whichever rule is chosen applies to all
//! three resolve paths, keeping them consistent with each other.

pub use cachalote_core::*;
