// Shared test doubles for the integration suite.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use cachalote::{FetchSource, SourceError};

/// Backing repository stub that records every key it is asked for, so tests
/// can assert exactly how often the source was reached per key.
pub struct StubSource {
    entries: HashMap<u32, String>,
    fetch_log: Mutex<Vec<u32>>,
    all_calls: AtomicU32,
    failing: AtomicBool,
}

impl StubSource {
    pub fn new(entries: &[(u32, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(key, value)| (*key, value.to_string()))
                .collect(),
            fetch_log: Mutex::new(Vec::new()),
            all_calls: AtomicU32::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Flips the source into (or out of) a failing state: every fetch
    /// returns an error until reset.
    pub fn fail(&self, on: bool) {
        self.failing.store(on, Ordering::SeqCst);
    }

    /// How many times `key` was requested across `fetch_one` and
    /// `fetch_many` calls.
    pub fn fetches_for(&self, key: u32) -> usize {
        self.fetch_log
            .lock()
            .unwrap()
            .iter()
            .filter(|k| **k == key)
            .count()
    }

    /// Total keys requested across `fetch_one` and `fetch_many` calls.
    pub fn total_fetches(&self) -> usize {
        self.fetch_log.lock().unwrap().len()
    }

    /// How many times `fetch_all` ran.
    pub fn all_calls(&self) -> u32 {
        self.all_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), SourceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("backing source offline".into());
        }
        Ok(())
    }
}

impl FetchSource<u32, String> for StubSource {
    fn fetch_one(&self, key: &u32) -> Result<Option<String>, SourceError> {
        self.check_available()?;
        self.fetch_log.lock().unwrap().push(*key);
        Ok(self.entries.get(key).cloned())
    }

    fn fetch_many(&self, keys: &[u32]) -> Result<HashMap<u32, String>, SourceError> {
        self.check_available()?;
        let mut log = self.fetch_log.lock().unwrap();
        let mut resolved = HashMap::new();
        for key in keys {
            log.push(*key);
            if let Some(value) = self.entries.get(key) {
                resolved.insert(*key, value.clone());
            }
        }
        Ok(resolved)
    }

    fn fetch_all(&self) -> Result<HashMap<u32, String>, SourceError> {
        self.check_available()?;
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.clone())
    }
}
