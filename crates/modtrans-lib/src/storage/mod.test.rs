use super::*;
use tempfile::TempDir;

#[test]
fn test_file_store_missing_file_reads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::in_dir(temp_dir.path());

    assert_eq!(store.get(keys::THEME).unwrap(), None);
    assert!(!store.path().exists());
}

#[test]
fn test_file_store_persists_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::in_dir(temp_dir.path());
    store.set(keys::CATALOG_TIMESTAMP, "1700000000000").unwrap();
    store.set(keys::THEME, "dark").unwrap();

    let reopened = FileStore::in_dir(temp_dir.path());
    assert_eq!(
        reopened.get(keys::CATALOG_TIMESTAMP).unwrap().as_deref(),
        Some("1700000000000")
    );
    assert_eq!(reopened.get(keys::THEME).unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_file_store_remove_only_touches_named_key() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::in_dir(temp_dir.path());
    store.set(keys::CATALOG_SNAPSHOT, "[]").unwrap();
    store.set(keys::THEME, "light").unwrap();

    store.remove(keys::CATALOG_SNAPSHOT).unwrap();
    store.remove("never-written").unwrap();

    assert_eq!(store.get(keys::CATALOG_SNAPSHOT).unwrap(), None);
    assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("light"));
}

#[test]
fn test_file_store_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    let store = FileStore::in_dir(&nested);

    store.set(keys::THEME, "dark").unwrap();
    assert!(nested.join(STORE_FILE_NAME).exists());
}

#[test]
fn test_file_store_corrupt_file_reads_empty() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(STORE_FILE_NAME), "{not json").unwrap();
    let store = FileStore::in_dir(temp_dir.path());

    assert_eq!(store.get(keys::CATALOG_SNAPSHOT).unwrap(), None);

    // Writing afterwards replaces the corrupt content
    store.set(keys::THEME, "light").unwrap();
    assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("light"));
}

#[test]
fn test_memory_store_basic_operations() {
    let store = MemoryStore::new().with_entry(keys::THEME, "dark");
    assert_eq!(store.len(), 1);

    store.set(keys::CATALOG_SNAPSHOT, "[]").unwrap();
    assert_eq!(store.get(keys::CATALOG_SNAPSHOT).unwrap().as_deref(), Some("[]"));

    store.remove(keys::THEME).unwrap();
    store.remove(keys::CATALOG_SNAPSHOT).unwrap();
    assert!(store.is_empty());
}
