//! Freshness gate for the cached catalog snapshot

use crate::storage::{KeyValueStore, StorageError, keys};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Default freshness window - 1 hour
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(3600);

/// True iff a timestamp exists and `now - timestamp <= window` (milliseconds)
///
/// Timestamps ahead of `now` count as age zero.
pub fn is_fresh(timestamp: Option<u64>, now: u64, window: u64) -> bool {
    match timestamp {
        Some(stored) => now.saturating_sub(stored) <= window,
        None => false,
    }
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Snapshot and timestamp as read from the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheEntry {
    pub snapshot: Option<String>,
    pub timestamp: Option<u64>,
}

impl CacheEntry {
    /// Reads both keys; an unparseable timestamp reads as absent
    pub fn read(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let snapshot = store.get(keys::CATALOG_SNAPSHOT)?;
        let timestamp = match store.get(keys::CATALOG_TIMESTAMP)? {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ts) => Some(ts),
                Err(_) => {
                    warn!(value = %raw, "Ignoring malformed catalog timestamp");
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            snapshot,
            timestamp,
        })
    }

    pub fn write(store: &dyn KeyValueStore, snapshot: &str, timestamp: u64) -> Result<(), StorageError> {
        store.set(keys::CATALOG_SNAPSHOT, snapshot)?;
        store.set(keys::CATALOG_TIMESTAMP, &timestamp.to_string())
    }

    pub fn clear(store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.remove(keys::CATALOG_SNAPSHOT)?;
        store.remove(keys::CATALOG_TIMESTAMP)
    }

    /// Snapshot usable without a network call
    pub fn fresh_snapshot(&self, now: u64, window: Duration) -> Option<&str> {
        let snapshot = self.snapshot.as_deref()?;
        is_fresh(self.timestamp, now, window.as_millis() as u64).then_some(snapshot)
    }
}

#[cfg(test)]
mod tests {
    include!("cache.test.rs");
}
