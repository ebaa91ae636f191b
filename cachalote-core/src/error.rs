use thiserror::Error;

/// Boxed error surfaced by a [`FetchSource`](crate::FetchSource) operation.
///
/// Sources wrap arbitrary repositories (databases, HTTP clients, files), so
/// their failures are carried as a boxed trait object rather than forcing a
/// concrete error type on every implementation.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Boxed error surfaced by a [`CacheStore`](crate::CacheStore) write.
///
/// Store failures are non-fatal to resolution: a value that could not be
/// persisted is still returned to the caller.
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by the resolve operations.
///
/// Only two things can go wrong during resolution: a single-key lookup finds
/// nothing at the source, or the source itself fails. Keys absent from a
/// batch result are not errors - they are simply omitted from the returned
/// map. Cache store write failures are logged and swallowed, never surfaced
/// here.
///
/// # Examples
///
/// ```
/// use cachalote_core::ResolveError;
///
/// let err = ResolveError::NotFound {
///     region: "users".to_string(),
///     key: "42".to_string(),
/// };
/// assert!(err.is_not_found());
/// assert_eq!(
///     err.to_string(),
///     "no value found for key `42` in cache region `users`"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A single-key lookup had no corresponding value at the source.
    ///
    /// Never cached, never retried: the next lookup for the same key reaches
    /// the source again.
    #[error("no value found for key `{key}` in cache region `{region}`")]
    NotFound { region: String, key: String },

    /// The backing source failed. Propagated synchronously and uncached;
    /// previously cached keys are untouched.
    #[error("source fetch failed: {0}")]
    Source(#[from] SourceError),
}

impl ResolveError {
    /// Returns `true` if this error is a [`ResolveError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}
