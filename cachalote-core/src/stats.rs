use std::sync::atomic::{AtomicU64, Ordering};

/// Per-resolver counters for monitoring cache effectiveness.
///
/// Tracks how lookups split into hits and misses, how many entries the
/// backing source actually produced, and how many persists the eligibility
/// filter declined. All counters use atomic operations with `Relaxed`
/// ordering, so recording is safe from any thread at negligible cost.
///
/// Available behind the `stats` feature (enabled by default).
///
/// # Examples
///
/// ```
/// use cachalote_core::ResolverStats;
///
/// let stats = ResolverStats::new();
///
/// stats.record_hit();
/// stats.record_hit();
/// stats.record_miss();
///
/// assert_eq!(stats.hits(), 2);
/// assert_eq!(stats.misses(), 1);
/// assert_eq!(stats.lookups(), 3);
/// assert!((stats.hit_rate() - 0.6666).abs() < 0.001);
/// ```
#[derive(Debug, Default)]
pub struct ResolverStats {
    hits: AtomicU64,
    misses: AtomicU64,
    fetched: AtomicU64,
    declined: AtomicU64,
}

impl ResolverStats {
    /// Creates a new instance with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a per-key cache hit.
    #[inline]
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a per-key cache miss.
    #[inline]
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Records `count` entries produced by the backing source.
    #[inline]
    pub fn record_fetched(&self, count: usize) {
        self.fetched.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Records one persist declined by the eligibility filter.
    #[inline]
    pub fn record_declined(&self) {
        self.declined.fetch_add(1, Ordering::Relaxed);
    }

    /// Total per-key cache hits.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total per-key cache misses.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Total entries fetched from the backing source.
    #[inline]
    pub fn fetched(&self) -> u64 {
        self.fetched.load(Ordering::Relaxed)
    }

    /// Total persists declined by the eligibility filter.
    #[inline]
    pub fn declined(&self) -> u64 {
        self.declined.load(Ordering::Relaxed)
    }

    /// Total per-key lookups (hits + misses).
    #[inline]
    pub fn lookups(&self) -> u64 {
        self.hits() + self.misses()
    }

    /// Fraction of lookups served from cache, or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.lookups();
        if lookups == 0 {
            return 0.0;
        }
        self.hits() as f64 / lookups as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = ResolverStats::new();
        assert_eq!(stats.hits(), 0);
        assert_eq!(stats.misses(), 0);
        assert_eq!(stats.fetched(), 0);
        assert_eq!(stats.declined(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_recording_accumulates() {
        let stats = ResolverStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_miss();
        stats.record_fetched(2);
        stats.record_declined();

        assert_eq!(stats.lookups(), 3);
        assert_eq!(stats.fetched(), 2);
        assert_eq!(stats.declined(), 1);
    }

    #[test]
    fn test_hit_rate() {
        let stats = ResolverStats::new();
        for _ in 0..3 {
            stats.record_hit();
        }
        stats.record_miss();
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_concurrent_recording() {
        use std::sync::Arc;
        use std::thread;

        let stats = Arc::new(ResolverStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record_hit();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(stats.hits(), 8000);
    }
}
