//! # Cachalote Core
//!
//! Core traits and components for the Cachalote batch cache-resolution
//! library.
//!
//! The pieces fit together like this: a [`Resolver`] sits between callers, a
//! [`CacheStore`] region, and a [`FetchSource`]. Lookups are answered from
//! the region where possible; only the miss set travels to the source, and
//! newly fetched entries flow back into the region - each one individually
//! subject to the [`Eligibility`] filter.
//!
//! ## Module Organization
//!
//! - [`cache_store`](CacheStore) - the region-scoped store abstraction and
//!   the bundled in-memory implementation
//! - [`source`](FetchSource) - the backing data source abstraction (one key,
//!   a key set, or the whole collection)
//! - [`resolver`](Resolver) - the partition-fetch-merge-populate engine and
//!   its builder
//! - [`eligibility`](Eligibility) - the per-entry condition/unless
//!   persistence decision
//! - [`keys`](CacheKey) - rendering lookup keys into a region's string key
//!   space
//! - [`error`](ResolveError) - the resolve error surface
//! - `stats` - per-resolver hit/miss counters (behind the `stats` feature,
//!   on by default)

mod cache_store;
mod eligibility;
mod error;
mod keys;
mod resolver;
mod source;

#[cfg(feature = "stats")]
mod stats;

pub use cache_store::{CacheStore, MemoryStore};
pub use eligibility::Eligibility;
pub use error::{ResolveError, SourceError, StoreError};
pub use keys::{CacheKey, DefaultCacheKey};
pub use resolver::{Resolver, ResolverBuilder};
pub use source::FetchSource;

#[cfg(feature = "stats")]
pub use stats::ResolverStats;
