use std::sync::Arc;

/// Shared predicate over a candidate entry.
pub(crate) type Predicate<K, V> = Arc<dyn Fn(&K, &V) -> bool + Send + Sync>;

/// Per-entry decision governing whether a fetched entry is persisted.
///
/// Two independent predicates compose with logical AND:
///
/// * **condition** - an inclusion gate. When declared and false for an entry,
///   that entry is not persisted.
/// * **unless** - an exclusion gate evaluated against the fetched value. When
///   declared and true for an entry, that entry is not persisted.
///
/// An entry is cached iff (no condition, or condition holds) and (no unless,
/// or unless does not hold). The decision affects persistence only: entries
/// that fail it are still fetched and returned to the caller. Evaluation is
/// always per entry, never per call - a predicate failing for one entry of a
/// batch leaves the rest of the batch cacheable.
///
/// Predicates must be pure functions with no side effects; they may be
/// evaluated from multiple threads.
///
/// # Examples
///
/// ```
/// use cachalote_core::Eligibility;
///
/// // Cache everything except empty payloads
/// let eligibility = Eligibility::always()
///     .with_unless(|_key: &u32, value: &String| value.is_empty());
///
/// assert!(eligibility.should_cache(&1, &"data".to_string()));
/// assert!(!eligibility.should_cache(&2, &String::new()));
/// ```
pub struct Eligibility<K, V> {
    condition: Option<Predicate<K, V>>,
    unless: Option<Predicate<K, V>>,
}

impl<K, V> Eligibility<K, V> {
    /// An eligibility filter that accepts every entry.
    pub fn always() -> Self {
        Self {
            condition: None,
            unless: None,
        }
    }

    /// Declares the inclusion condition. Entries for which `predicate`
    /// returns `false` are returned to the caller but never persisted.
    pub fn with_condition<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&K, &V) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Arc::new(predicate));
        self
    }

    /// Declares the exclusion condition. Entries for which `predicate`
    /// returns `true` are returned to the caller but never persisted.
    pub fn with_unless<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&K, &V) -> bool + Send + Sync + 'static,
    {
        self.unless = Some(Arc::new(predicate));
        self
    }

    /// Evaluates the combined decision for one entry.
    pub fn should_cache(&self, key: &K, value: &V) -> bool {
        if let Some(condition) = &self.condition {
            if !condition(key, value) {
                return false;
            }
        }
        if let Some(unless) = &self.unless {
            if unless(key, value) {
                return false;
            }
        }
        true
    }
}

impl<K, V> Default for Eligibility<K, V> {
    fn default() -> Self {
        Self::always()
    }
}

impl<K, V> Clone for Eligibility<K, V> {
    fn clone(&self) -> Self {
        Self {
            condition: self.condition.clone(),
            unless: self.unless.clone(),
        }
    }
}
