use super::*;
use crate::application::session_mocks::{MockFileSystemProvider, MockNetworkProvider};

#[test]
fn test_file_name_is_trailing_segment() {
    assert_eq!(
        file_name_from_url("https://cdn.example.org/files/sodium-1.20.1.jar"),
        "sodium-1.20.1.jar"
    );
}

#[test]
fn test_file_name_ignores_query_and_fragment() {
    assert_eq!(
        file_name_from_url("https://cdn.example.org/uk_ua.json?raw=true#top"),
        "uk_ua.json"
    );
    assert_eq!(file_name_from_url("files/uk_ua.json?raw=1"), "uk_ua.json");
}

#[test]
fn test_file_name_fallback_for_bare_host() {
    assert_eq!(file_name_from_url("https://cdn.example.org/"), FALLBACK_FILE_NAME);
}

#[tokio::test]
async fn test_download_pair_saves_both_files_in_order() {
    let network = MockNetworkProvider::new()
        .with_bytes("https://cdn.example.org/a/mod.jar", b"jar".to_vec())
        .with_bytes("https://cdn.example.org/b/uk_ua.json", b"{}".to_vec());
    let filesystem = MockFileSystemProvider::new();
    let out = PathBuf::from("/downloads");

    let pair = download_pair(
        &network,
        &filesystem,
        "https://cdn.example.org/a/mod.jar",
        "https://cdn.example.org/b/uk_ua.json",
        &out,
        Duration::ZERO,
    )
    .await
    .unwrap();

    assert_eq!(pair.jar_path, out.join("mod.jar"));
    assert_eq!(pair.json_path, out.join("uk_ua.json"));
    assert_eq!(filesystem.file(&pair.jar_path), Some(b"jar".to_vec()));
    assert_eq!(filesystem.file(&pair.json_path), Some(b"{}".to_vec()));
    assert_eq!(
        network.requests(),
        vec![
            "https://cdn.example.org/a/mod.jar".to_string(),
            "https://cdn.example.org/b/uk_ua.json".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_download_pair_waits_between_files() {
    let network = MockNetworkProvider::new()
        .with_bytes("https://x.org/m.jar", b"jar".to_vec())
        .with_bytes("https://x.org/t.json", b"{}".to_vec());
    let filesystem = MockFileSystemProvider::new();

    let started = tokio::time::Instant::now();
    download_pair(
        &network,
        &filesystem,
        "https://x.org/m.jar",
        "https://x.org/t.json",
        Path::new("/out"),
        Duration::from_millis(500),
    )
    .await
    .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(500));
}

#[tokio::test]
async fn test_failed_translation_keeps_saved_jar() {
    let network = MockNetworkProvider::new().with_bytes("https://x.org/m.jar", b"jar".to_vec());
    let filesystem = MockFileSystemProvider::new();

    let err = download_pair(
        &network,
        &filesystem,
        "https://x.org/m.jar",
        "https://x.org/missing.json",
        Path::new("/out"),
        Duration::ZERO,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, NetworkingError::HttpStatus { status: 404, .. }));
    assert!(filesystem.file(Path::new("/out/m.jar")).is_some());
    assert!(filesystem.file(Path::new("/out/missing.json")).is_none());
}
