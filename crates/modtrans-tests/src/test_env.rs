//! Hermetic test environment for E2E testing
//!
//! Each `TestEnvironment` owns a temporary directory (cache and work
//! areas) and a local mockito server standing in for the catalog host
//! and the download CDN. Sessions built from it use the live filesystem,
//! HTTP client and store, so commands run end to end without touching
//! the real network.

use anyhow::Result;
use mockito::{Matcher, Mock, ServerGuard};
use modtrans_lib::application::config::AppConfig;
use modtrans_lib::application::session::{
    CommandSession, LiveConfigProvider, LiveFileSystemProvider,
};
use modtrans_lib::application::session_mocks::MockInteractiveProvider;
use modtrans_lib::catalog::Mod;
use modtrans_lib::networking::LiveNetworkProvider;
use modtrans_lib::primitives::ColorIntent;
use modtrans_lib::storage::FileStore;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path the catalog is served under
pub const CATALOG_PATH: &str = "/ua/data.json";

/// Session type every hermetic test runs commands against
pub type HermeticSession = CommandSession<
    LiveFileSystemProvider,
    LiveNetworkProvider,
    FileStore,
    LiveConfigProvider,
    MockInteractiveProvider,
>;

pub struct TestEnvironment {
    /// Temporary directory for the test environment
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
    /// Cache directory holding `store.json`
    pub cache_path: PathBuf,
    /// Where downloads and merge inputs go
    pub work_path: PathBuf,
    pub server: ServerGuard,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root_path = temp_dir.path().to_path_buf();
        let cache_path = root_path.join("cache");
        let work_path = root_path.join("work");

        fs::create_dir_all(&cache_path)?;
        fs::create_dir_all(&work_path)?;

        Ok(Self {
            temp_dir,
            root_path,
            cache_path,
            work_path,
            server: mockito::Server::new_async().await,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.url(), path)
    }

    pub fn catalog_url(&self) -> String {
        self.url(CATALOG_PATH)
    }

    /// Serves `mods` as the catalog, whatever the cache-busting query
    pub async fn serve_catalog(&mut self, mods: &[Mod]) -> Result<Mock> {
        self.catalog_mock(mods, None).await
    }

    /// Like [`Self::serve_catalog`], asserting exactly `hits` fetches
    pub async fn serve_catalog_times(&mut self, mods: &[Mod], hits: usize) -> Result<Mock> {
        self.catalog_mock(mods, Some(hits)).await
    }

    async fn catalog_mock(&mut self, mods: &[Mod], hits: Option<usize>) -> Result<Mock> {
        let body = serde_json::to_string(mods)?;
        let mut mock = self
            .server
            .mock("GET", CATALOG_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body);
        if let Some(hits) = hits {
            mock = mock.expect(hits);
        }
        Ok(mock.create_async().await)
    }

    pub async fn fail_catalog(&mut self, status: usize) -> Mock {
        self.server
            .mock("GET", CATALOG_PATH)
            .match_query(Matcher::Any)
            .with_status(status)
            .create_async()
            .await
    }

    pub async fn serve_file(&mut self, path: &str, body: Vec<u8>) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await
    }

    /// Config pointing at the mock server and the temporary cache
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            catalog_url: self.catalog_url(),
            cache_dir: Some(self.cache_path.clone()),
            download_delay_ms: 0,
            color: ColorIntent::Never,
            yes: true,
            ..AppConfig::default()
        }
    }

    pub fn session(&self) -> Result<HermeticSession> {
        self.session_with(MockInteractiveProvider::new().with_yes_mode(true))
    }

    pub fn session_with(&self, interactive: MockInteractiveProvider) -> Result<HermeticSession> {
        let app_config = self.app_config();
        let network = LiveNetworkProvider::new(&app_config.networking_config())?;
        let store = FileStore::new(app_config.store_path()?);

        Ok(CommandSession::new_with_providers(
            LiveFileSystemProvider,
            network,
            store,
            LiveConfigProvider::new(app_config),
            interactive,
        ))
    }

    pub fn write_work_file(&self, name: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.work_path.join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_work_file(&self, name: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.work_path.join(name))?)
    }

    /// Raw contents of the persisted store, if any command wrote it
    pub fn store_contents(&self) -> Option<serde_json::Value> {
        let raw = fs::read_to_string(self.cache_path.join("store.json")).ok()?;
        serde_json::from_str(&raw).ok()
    }
}
