use super::*;
use mockito::Server;

fn provider() -> LiveNetworkProvider {
    LiveNetworkProvider::new(&NetworkingConfig::default()).unwrap()
}

#[test]
fn test_catalog_url_gets_cache_busting_param() {
    let url = catalog_request_url("https://example.org/ua/data.json", 1234).unwrap();
    assert_eq!(url.as_str(), "https://example.org/ua/data.json?t=1234");
}

#[test]
fn test_catalog_url_keeps_existing_query() {
    let url = catalog_request_url("https://example.org/data.json?lang=uk", 7).unwrap();
    assert_eq!(url.as_str(), "https://example.org/data.json?lang=uk&t=7");
}

#[test]
fn test_catalog_url_rejects_relative_path() {
    let err = catalog_request_url("data.json", 1).unwrap_err();
    assert!(matches!(err, NetworkingError::InvalidUrl { .. }));
}

#[test]
fn test_default_config_user_agent() {
    let config = NetworkingConfig::default();
    assert!(config.user_agent.starts_with("modtrans/"));
    assert_eq!(config.timeout_seconds, 30);
}

#[tokio::test]
async fn test_fetch_text_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let url = format!("{}/data.json", server.url());
    let body = provider().fetch_text(&url).await.unwrap();

    assert_eq!(body, "[]");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_text_non_success_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data.json")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/data.json", server.url());
    let err = provider().fetch_text(&url).await.unwrap_err();

    match err {
        NetworkingError::HttpStatus { status, .. } => assert_eq!(status, 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_bytes_returns_raw_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/files/mod.jar")
        .with_status(200)
        .with_body(vec![0x50, 0x4b, 0x03, 0x04])
        .create_async()
        .await;

    let url = format!("{}/files/mod.jar", server.url());
    let bytes = provider().fetch_bytes(&url).await.unwrap();

    assert_eq!(bytes, vec![0x50, 0x4b, 0x03, 0x04]);
}

#[tokio::test]
async fn test_transport_failure_is_request_error() {
    // Nothing listens on port 9 of localhost in the test environment
    let err = provider()
        .fetch_text("http://127.0.0.1:9/data.json")
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkingError::RequestFailed { .. }));
}
