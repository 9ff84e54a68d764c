use super::*;
use crate::storage::MemoryStore;

const HOUR_MS: u64 = 3_600_000;

#[test]
fn test_absent_timestamp_is_never_fresh() {
    assert!(!is_fresh(None, 0, HOUR_MS));
    assert!(!is_fresh(None, u64::MAX, u64::MAX));
}

#[test]
fn test_boundary_is_inclusive() {
    let now = 10 * HOUR_MS;
    assert!(is_fresh(Some(now - HOUR_MS), now, HOUR_MS));
    assert!(!is_fresh(Some(now - HOUR_MS - 1), now, HOUR_MS));
    assert!(is_fresh(Some(now - 1), now, HOUR_MS));
}

#[test]
fn test_future_timestamp_counts_as_fresh() {
    assert!(is_fresh(Some(5_000), 1_000, HOUR_MS));
}

#[test]
fn test_default_window_is_one_hour() {
    assert_eq!(DEFAULT_FRESHNESS_WINDOW.as_millis() as u64, HOUR_MS);
}

#[test]
fn test_entry_round_trip_through_store() {
    let store = MemoryStore::new();
    CacheEntry::write(&store, "[]", 42).unwrap();

    let entry = CacheEntry::read(&store).unwrap();
    assert_eq!(entry.snapshot.as_deref(), Some("[]"));
    assert_eq!(entry.timestamp, Some(42));

    CacheEntry::clear(&store).unwrap();
    assert_eq!(CacheEntry::read(&store).unwrap(), CacheEntry::default());
}

#[test]
fn test_malformed_timestamp_reads_as_absent() {
    let store = MemoryStore::new()
        .with_entry(keys::CATALOG_SNAPSHOT, "[]")
        .with_entry(keys::CATALOG_TIMESTAMP, "yesterday");

    let entry = CacheEntry::read(&store).unwrap();
    assert_eq!(entry.timestamp, None);
    assert_eq!(entry.fresh_snapshot(0, DEFAULT_FRESHNESS_WINDOW), None);
}

#[test]
fn test_fresh_snapshot_requires_both_parts() {
    let window = DEFAULT_FRESHNESS_WINDOW;
    let only_timestamp = CacheEntry {
        snapshot: None,
        timestamp: Some(100),
    };
    assert_eq!(only_timestamp.fresh_snapshot(100, window), None);

    let complete = CacheEntry {
        snapshot: Some("[]".to_string()),
        timestamp: Some(100),
    };
    assert_eq!(complete.fresh_snapshot(100 + HOUR_MS, window), Some("[]"));
    assert_eq!(complete.fresh_snapshot(101 + HOUR_MS, window), None);
}
