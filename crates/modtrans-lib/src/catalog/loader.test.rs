use super::*;
use crate::application::session_mocks::MockNetworkProvider;
use crate::catalog::test_utils::*;
use crate::storage::{MemoryStore, keys};

const CATALOG_URL: &str = "https://example.org/ua/data.json";
const HOUR_MS: u64 = 3_600_000;

fn network_with_catalog() -> MockNetworkProvider {
    MockNetworkProvider::new().with_text(CATALOG_URL, &sample_catalog_json())
}

#[tokio::test]
async fn test_fresh_cache_skips_network() {
    let store = MemoryStore::new()
        .with_entry(keys::CATALOG_SNAPSHOT, &sample_catalog_json())
        .with_entry(keys::CATALOG_TIMESTAMP, "1000");
    let network = MockNetworkProvider::new();
    let mut loader = CatalogLoader::new(&store, &network, CATALOG_URL);

    let state = loader.load_at(1000 + HOUR_MS - 1).await.unwrap();

    assert_eq!(state.len(), 3);
    assert_eq!(loader.origin(), Some(CatalogOrigin::Cache));
    assert!(network.requests().is_empty());
}

#[tokio::test]
async fn test_stale_cache_fetches_with_cache_buster_and_rewrites_entry() {
    let store = MemoryStore::new()
        .with_entry(keys::CATALOG_SNAPSHOT, "[]")
        .with_entry(keys::CATALOG_TIMESTAMP, "1000");
    let network = network_with_catalog();
    let mut loader = CatalogLoader::new(&store, &network, CATALOG_URL);
    let now = 1000 + 2 * HOUR_MS;

    let state = loader.load_at(now).await.unwrap();

    assert_eq!(state.len(), 3);
    assert_eq!(loader.origin(), Some(CatalogOrigin::Network));
    assert_eq!(network.requests(), vec![format!("{CATALOG_URL}?t={now}")]);

    let entry = CacheEntry::read(&store).unwrap();
    assert_eq!(entry.timestamp, Some(now));
    let cached = parse_catalog(entry.snapshot.as_deref().unwrap()).unwrap();
    assert_eq!(cached, sample_catalog());
}

#[tokio::test]
async fn test_missing_timestamp_treated_as_stale() {
    let store = MemoryStore::new().with_entry(keys::CATALOG_SNAPSHOT, "[]");
    let network = network_with_catalog();
    let mut loader = CatalogLoader::new(&store, &network, CATALOG_URL);

    let state = loader.load_at(5).await.unwrap();

    assert_eq!(state.len(), 3);
    assert_eq!(network.requests().len(), 1);
}

#[tokio::test]
async fn test_malformed_snapshot_falls_through_to_network() {
    let store = MemoryStore::new()
        .with_entry(keys::CATALOG_SNAPSHOT, "{not json")
        .with_entry(keys::CATALOG_TIMESTAMP, "1000");
    let network = network_with_catalog();
    let mut loader = CatalogLoader::new(&store, &network, CATALOG_URL);

    let state = loader.load_at(1001).await.unwrap();

    assert_eq!(state.len(), 3);
    assert_eq!(network.requests().len(), 1);
    assert_eq!(
        CacheEntry::read(&store).unwrap().snapshot.as_deref(),
        Some(sample_catalog_json().as_str())
    );
}

#[tokio::test]
async fn test_network_failure_leaves_empty_catalog_and_cache_untouched() {
    let store = MemoryStore::new();
    let network = MockNetworkProvider::new();
    let mut loader = CatalogLoader::new(&store, &network, CATALOG_URL);

    let err = loader.load_at(1).await.unwrap_err();

    assert!(matches!(err, CatalogError::Network { .. }));
    assert!(loader.current().is_empty());
    assert_eq!(loader.origin(), None);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_invalid_catalog_body_is_parse_error() {
    let store = MemoryStore::new();
    let network = MockNetworkProvider::new().with_text(CATALOG_URL, "<html>oops</html>");
    let mut loader = CatalogLoader::new(&store, &network, CATALOG_URL);

    let err = loader.load_at(1).await.unwrap_err();

    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(loader.current().is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_null_catalog_is_empty_not_an_error() {
    let store = MemoryStore::new();
    let network = MockNetworkProvider::new().with_text(CATALOG_URL, "null");
    let mut loader = CatalogLoader::new(&store, &network, CATALOG_URL);

    let state = loader.load_at(1).await.unwrap();

    assert!(state.is_empty());
}

#[tokio::test]
async fn test_force_refresh_ignores_fresh_cache() {
    let store = MemoryStore::new()
        .with_entry(keys::CATALOG_SNAPSHOT, "[]")
        .with_entry(keys::CATALOG_TIMESTAMP, "1000");
    let network = network_with_catalog();
    let mut loader = CatalogLoader::new(&store, &network, CATALOG_URL);

    let state = loader.force_refresh_at(1001).await.unwrap();

    assert_eq!(state.len(), 3);
    assert_eq!(network.requests().len(), 1);
    assert_eq!(CacheEntry::read(&store).unwrap().timestamp, Some(1001));
}

#[tokio::test]
async fn test_force_refresh_failure_still_clears_cache() {
    let store = MemoryStore::new()
        .with_entry(keys::CATALOG_SNAPSHOT, "[]")
        .with_entry(keys::CATALOG_TIMESTAMP, "1000");
    let network = MockNetworkProvider::new();
    let mut loader = CatalogLoader::new(&store, &network, CATALOG_URL);

    assert!(loader.force_refresh_at(1001).await.is_err());
    assert_eq!(CacheEntry::read(&store).unwrap(), CacheEntry::default());
}

#[tokio::test]
async fn test_reload_bumps_generation_and_invalidates_old_ids() {
    let store = MemoryStore::new();
    let network = network_with_catalog();
    let mut loader = CatalogLoader::new(&store, &network, CATALOG_URL);

    let first = loader.load_at(1).await.unwrap();
    let (old_id, _) = first.entries().next().unwrap();

    let second = loader.force_refresh_at(2).await.unwrap();

    assert!(second.generation() > first.generation());
    assert!(second.get(old_id).is_none());
    // The earlier snapshot is still intact for whoever holds it
    assert_eq!(first.get(old_id).map(|m| m.name.as_str()), Some("Sodium"));
}

#[tokio::test]
async fn test_custom_window() {
    let store = MemoryStore::new()
        .with_entry(keys::CATALOG_SNAPSHOT, "[]")
        .with_entry(keys::CATALOG_TIMESTAMP, "0");
    let network = network_with_catalog();
    let mut loader =
        CatalogLoader::new(&store, &network, CATALOG_URL).with_window(Duration::from_secs(10));

    loader.load_at(10_000).await.unwrap();
    assert!(network.requests().is_empty());

    loader.load_at(10_001).await.unwrap();
    assert_eq!(network.requests().len(), 1);
}
