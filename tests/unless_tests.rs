// Tests for the exclusion ("unless") condition.

mod common;

use std::sync::Arc;

use cachalote::{MemoryStore, Resolver};
use common::StubSource;

#[test]
fn test_unless_not_fulfilled_fills_the_region() {
    let source = Arc::new(StubSource::new(&[(1, "some-value-1")]));
    let resolver = Resolver::builder("users", Arc::new(MemoryStore::new()), Arc::clone(&source))
        .unless(|_key: &u32, value: &String| value.is_empty())
        .build();

    let batch = resolver.resolve_many(&[1]).unwrap();
    assert_eq!(batch[&1], "some-value-1");
    assert_eq!(resolver.resolve_one(&1).unwrap(), "some-value-1");

    assert_eq!(source.fetches_for(1), 1);
}

#[test]
fn test_unless_fulfilled_skips_persistence_per_entry() {
    let source = Arc::new(StubSource::new(&[(1, "keep"), (2, "poison"), (3, "keep-too")]));
    let store = Arc::new(MemoryStore::new());
    let resolver = Resolver::builder("users", Arc::clone(&store), Arc::clone(&source))
        .unless(|_key: &u32, value: &String| value == "poison")
        .build();

    // Seed one key up front
    resolver.resolve_one(&1).unwrap();

    let batch = resolver.resolve_many(&[1, 2, 3]).unwrap();
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[&2], "poison");

    // The already-cached key stayed a hit, and the excluded entry keeps
    // being refetched while its neighbors settle into the region
    assert_eq!(resolver.resolve_one(&2).unwrap(), "poison");
    assert_eq!(resolver.resolve_one(&3).unwrap(), "keep-too");

    assert_eq!(source.fetches_for(1), 1);
    assert_eq!(source.fetches_for(2), 2);
    assert_eq!(source.fetches_for(3), 1);
    assert!(!store.contains("users", "2"));
}

#[test]
fn test_condition_and_unless_compose() {
    let source = Arc::new(StubSource::new(&[(1, "keep"), (2, "skip"), (3, "keep")]));
    let store = Arc::new(MemoryStore::new());
    let resolver = Resolver::builder("users", Arc::clone(&store), Arc::clone(&source))
        .condition(|key: &u32, _value: &String| *key < 3)
        .unless(|_key: &u32, value: &String| value == "skip")
        .build();

    resolver.resolve_many(&[1, 2, 3]).unwrap();

    // Persisted iff the condition held and the exclusion did not
    assert!(store.contains("users", "1"));
    assert!(!store.contains("users", "2"));
    assert!(!store.contains("users", "3"));
}
