//! Mock implementations of session providers for testing
//!
//! Every mock is cheap to clone and shares its recorded state, so a test
//! can keep a handle after moving a copy into a `MockCommandSession`.

use crate::Result;
use crate::application::config::AppConfig;
use crate::application::session::{
    ConfigProvider, FileSystemProvider, InteractiveProvider, NetworkProvider, Session,
};
use crate::display::{DisplayProvider, MockDisplayProvider};
use crate::networking::{BoxFuture, NetworkingError};
use crate::storage::{KeyValueStore, MemoryStore};
use anyhow::anyhow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory filesystem keyed by absolute path
#[derive(Clone)]
pub struct MockFileSystemProvider {
    pub current_dir: PathBuf,
    pub files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MockFileSystemProvider {
    pub fn new() -> Self {
        Self {
            current_dir: PathBuf::from("/test/workdir"),
            files: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_current_dir(mut self, dir: PathBuf) -> Self {
        self.current_dir = dir;
        self
    }

    pub fn with_file(self, path: PathBuf, contents: impl Into<Vec<u8>>) -> Self {
        self.files.lock().unwrap().insert(path, contents.into());
        self
    }

    /// Contents written to (or seeded at) `path`
    pub fn file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.files.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl Default for MockFileSystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemProvider for MockFileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        self.file(path)
            .ok_or_else(|| anyhow!("File not found: {}", path.display()))
    }

    fn write_bytes(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path) || files.keys().any(|p| p.starts_with(path))
    }

    fn create_dir_all(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
enum MockResponse {
    Body(Vec<u8>),
    Status(u16),
}

/// Canned HTTP responses keyed by URL; unknown URLs answer 404
#[derive(Clone, Default)]
pub struct MockNetworkProvider {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockNetworkProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(self, url: &str, body: Vec<u8>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), MockResponse::Body(body));
        self
    }

    pub fn with_text(self, url: &str, body: &str) -> Self {
        self.with_bytes(url, body.as_bytes().to_vec())
    }

    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), MockResponse::Status(status));
        self
    }

    /// Every requested URL, query included, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, url: &str) -> std::result::Result<Vec<u8>, NetworkingError> {
        self.requests.lock().unwrap().push(url.to_string());

        let responses = self.responses.lock().unwrap();
        let without_query = url.split_once('?').map_or(url, |(base, _)| base);
        let response = responses
            .get(url)
            .or_else(|| responses.get(without_query))
            .cloned()
            .unwrap_or(MockResponse::Status(404));

        match response {
            MockResponse::Body(body) => Ok(body),
            MockResponse::Status(status) => Err(NetworkingError::HttpStatus {
                url: url.to_string(),
                status,
            }),
        }
    }
}

impl NetworkProvider for MockNetworkProvider {
    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, std::result::Result<String, NetworkingError>> {
        Box::pin(async move {
            let body = self.respond(url)?;
            Ok(String::from_utf8_lossy(&body).into_owned())
        })
    }

    fn fetch_bytes<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, std::result::Result<Vec<u8>, NetworkingError>> {
        Box::pin(async move { self.respond(url) })
    }
}

pub struct MockConfigProvider {
    app_config: AppConfig,
    prefers_dark: Option<bool>,
}

impl MockConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            app_config,
            prefers_dark: None,
        }
    }

    pub fn with_prefers_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = Some(prefers_dark);
        self
    }
}

impl ConfigProvider for MockConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    fn terminal_prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }
}

/// Scripted prompt answers with call recording
#[derive(Clone, Default)]
pub struct MockInteractiveProvider {
    yes_mode: bool,
    confirm_response: Option<bool>,
    select_response: Option<usize>,
    confirm_calls: Arc<Mutex<Vec<(String, bool)>>>,
    select_calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl MockInteractiveProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_yes_mode(mut self, yes_mode: bool) -> Self {
        self.yes_mode = yes_mode;
        self
    }

    pub fn with_confirm(mut self, response: bool) -> Self {
        self.confirm_response = Some(response);
        self
    }

    pub fn with_select(mut self, response: Option<usize>) -> Self {
        self.select_response = response;
        self
    }

    pub fn get_confirm_calls(&self) -> Vec<(String, bool)> {
        self.confirm_calls.lock().unwrap().clone()
    }

    pub fn get_select_calls(&self) -> Vec<(String, Vec<String>)> {
        self.select_calls.lock().unwrap().clone()
    }
}

impl InteractiveProvider for MockInteractiveProvider {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.confirm_calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), default));
        if self.yes_mode {
            return Ok(default);
        }
        Ok(self.confirm_response.unwrap_or(default))
    }

    fn select(&self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        self.select_calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), options.to_vec()));
        if self.yes_mode {
            return Ok(None);
        }
        Ok(self.select_response.filter(|i| *i < options.len()))
    }
}

/// Fully mocked session; the store starts empty
pub struct MockCommandSession {
    display_provider: MockDisplayProvider,
    filesystem_provider: MockFileSystemProvider,
    network_provider: MockNetworkProvider,
    storage_provider: MemoryStore,
    config_provider: MockConfigProvider,
    interactive_provider: MockInteractiveProvider,
}

impl MockCommandSession {
    pub fn new() -> Self {
        Self {
            display_provider: MockDisplayProvider::new(),
            filesystem_provider: MockFileSystemProvider::new(),
            network_provider: MockNetworkProvider::new(),
            storage_provider: MemoryStore::new(),
            config_provider: MockConfigProvider::new(AppConfig::default()),
            interactive_provider: MockInteractiveProvider::new(),
        }
    }

    pub fn with_filesystem(mut self, filesystem: MockFileSystemProvider) -> Self {
        self.filesystem_provider = filesystem;
        self
    }

    pub fn with_network(mut self, network: MockNetworkProvider) -> Self {
        self.network_provider = network;
        self
    }

    pub fn with_storage(mut self, storage: MemoryStore) -> Self {
        self.storage_provider = storage;
        self
    }

    pub fn with_config(mut self, config: MockConfigProvider) -> Self {
        self.config_provider = config;
        self
    }

    pub fn with_interactive(mut self, interactive: MockInteractiveProvider) -> Self {
        self.interactive_provider = interactive;
        self
    }

    /// Recorded display calls
    pub fn display_mock(&self) -> &MockDisplayProvider {
        &self.display_provider
    }

    pub fn network_mock(&self) -> &MockNetworkProvider {
        &self.network_provider
    }

    pub fn filesystem_mock(&self) -> &MockFileSystemProvider {
        &self.filesystem_provider
    }

    pub fn interactive_mock(&self) -> &MockInteractiveProvider {
        &self.interactive_provider
    }
}

impl Default for MockCommandSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for MockCommandSession {
    fn display(&self) -> &dyn DisplayProvider {
        &self.display_provider
    }

    fn filesystem(&self) -> &dyn FileSystemProvider {
        &self.filesystem_provider
    }

    fn network(&self) -> &dyn NetworkProvider {
        &self.network_provider
    }

    fn storage(&self) -> &dyn KeyValueStore {
        &self.storage_provider
    }

    fn config(&self) -> &dyn ConfigProvider {
        &self.config_provider
    }

    fn interactive(&self) -> &dyn InteractiveProvider {
        &self.interactive_provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_filesystem_round_trip() {
        let provider = MockFileSystemProvider::new()
            .with_current_dir(PathBuf::from("/custom/path"))
            .with_file(PathBuf::from("/custom/path/a.jar"), b"jar".to_vec());

        assert_eq!(provider.current_dir().unwrap(), PathBuf::from("/custom/path"));
        assert_eq!(provider.read_bytes(Path::new("/custom/path/a.jar")).unwrap(), b"jar");
        assert!(provider.exists(Path::new("/custom/path")));
        assert!(provider.read_bytes(Path::new("/missing")).is_err());

        provider.write_bytes(Path::new("/out/b.json"), b"{}").unwrap();
        assert_eq!(provider.file(Path::new("/out/b.json")), Some(b"{}".to_vec()));
    }

    #[tokio::test]
    async fn test_mock_network_matches_without_query() {
        let provider = MockNetworkProvider::new().with_text("https://x.org/data.json", "[]");

        let body = provider.fetch_text("https://x.org/data.json?t=5").await.unwrap();

        assert_eq!(body, "[]");
        assert_eq!(provider.requests(), vec!["https://x.org/data.json?t=5".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_network_status_and_unknown_url() {
        let provider = MockNetworkProvider::new().with_status("https://x.org/a", 500);

        let err = provider.fetch_bytes("https://x.org/a").await.unwrap_err();
        assert!(matches!(err, NetworkingError::HttpStatus { status: 500, .. }));

        let err = provider.fetch_bytes("https://x.org/b").await.unwrap_err();
        assert!(matches!(err, NetworkingError::HttpStatus { status: 404, .. }));
    }

    #[test]
    fn test_mock_interactive_yes_mode_uses_defaults() {
        let provider = MockInteractiveProvider::new()
            .with_yes_mode(true)
            .with_confirm(false)
            .with_select(Some(1));

        assert!(provider.confirm("Continue?", true).unwrap());
        assert_eq!(provider.select("Pick", &["a".into(), "b".into()]).unwrap(), None);
        assert_eq!(provider.get_confirm_calls().len(), 1);
        assert_eq!(provider.get_select_calls()[0].1, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_mock_select_out_of_range_is_cancel() {
        let provider = MockInteractiveProvider::new().with_select(Some(5));
        assert_eq!(provider.select("Pick", &["only".into()]).unwrap(), None);
    }

    #[test]
    fn test_mock_command_session_shares_recorders() {
        let network = MockNetworkProvider::new();
        let session = MockCommandSession::new().with_network(network.clone());

        session.storage().set("k", "v").unwrap();

        assert_eq!(session.storage().get("k").unwrap(), Some("v".to_string()));
        assert!(network.requests().is_empty());
        assert!(session.display_mock().get_calls().is_empty());
    }
}
