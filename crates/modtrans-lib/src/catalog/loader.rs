//! Catalog loading through the freshness-gated cache

use super::cache::{CacheEntry, DEFAULT_FRESHNESS_WINDOW, now_millis};
use super::model::Mod;
use super::state::CatalogState;
use crate::networking::{NetworkProvider, NetworkingError, catalog_request_url};
use crate::storage::{KeyValueStore, StorageError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to download catalog: {source}")]
    Network {
        #[from]
        source: NetworkingError,
    },

    #[error("Catalog is not valid JSON: {source}")]
    Parse { source: serde_json::Error },

    #[error("Catalog cache unavailable: {source}")]
    Storage {
        #[from]
        source: StorageError,
    },
}

/// Where the installed catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Cache,
    Network,
}

/// Owns the current [`CatalogState`] and replaces it wholesale on load
pub struct CatalogLoader<'a> {
    store: &'a dyn KeyValueStore,
    network: &'a dyn NetworkProvider,
    catalog_url: String,
    window: Duration,
    current: Arc<CatalogState>,
    origin: Option<CatalogOrigin>,
}

impl<'a> CatalogLoader<'a> {
    pub fn new(
        store: &'a dyn KeyValueStore,
        network: &'a dyn NetworkProvider,
        catalog_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            network,
            catalog_url: catalog_url.into(),
            window: DEFAULT_FRESHNESS_WINDOW,
            current: Arc::new(CatalogState::empty(0)),
            origin: None,
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Snapshot of the installed catalog; later loads do not affect it
    pub fn current(&self) -> Arc<CatalogState> {
        Arc::clone(&self.current)
    }

    /// Origin of the last successful load
    pub fn origin(&self) -> Option<CatalogOrigin> {
        self.origin
    }

    pub async fn load(&mut self) -> Result<Arc<CatalogState>, CatalogError> {
        self.load_at(now_millis()).await
    }

    /// Cache if fresh, network otherwise; `now` in epoch milliseconds
    pub async fn load_at(&mut self, now: u64) -> Result<Arc<CatalogState>, CatalogError> {
        if let Some(mods) = self.read_fresh_cache(now) {
            info!(mods = mods.len(), "Loading mods from cache");
            return Ok(self.install(mods, CatalogOrigin::Cache));
        }

        info!("Fetching fresh mods data");
        match self.fetch(now).await {
            Ok((mods, snapshot)) => {
                if let Err(e) = CacheEntry::write(self.store, &snapshot, now) {
                    warn!(error = %e, "Could not persist catalog cache");
                }
                Ok(self.install(mods, CatalogOrigin::Network))
            }
            Err(e) => {
                // No fallback to stale data: the catalog is left empty
                self.current = Arc::new(CatalogState::empty(self.next_generation()));
                self.origin = None;
                Err(e)
            }
        }
    }

    /// Drops the cache entry, then loads (always from the network)
    pub async fn force_refresh(&mut self) -> Result<Arc<CatalogState>, CatalogError> {
        self.force_refresh_at(now_millis()).await
    }

    pub async fn force_refresh_at(&mut self, now: u64) -> Result<Arc<CatalogState>, CatalogError> {
        info!("Forcing data refresh");
        CacheEntry::clear(self.store)?;
        self.load_at(now).await
    }

    fn read_fresh_cache(&self, now: u64) -> Option<Vec<Mod>> {
        let entry = match CacheEntry::read(self.store) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Catalog cache unreadable, fetching instead");
                return None;
            }
        };

        let snapshot = entry.fresh_snapshot(now, self.window)?;
        match parse_catalog(snapshot) {
            Ok(mods) => Some(mods),
            Err(e) => {
                warn!(error = %e, "Discarding malformed catalog cache");
                if let Err(e) = CacheEntry::clear(self.store) {
                    debug!(error = %e, "Could not clear malformed cache");
                }
                None
            }
        }
    }

    async fn fetch(&self, now: u64) -> Result<(Vec<Mod>, String), CatalogError> {
        let url = catalog_request_url(&self.catalog_url, now)?;
        let body = self.network.fetch_text(url.as_str()).await?;
        let mods = parse_catalog(&body)?;
        let snapshot =
            serde_json::to_string(&mods).map_err(|source| CatalogError::Parse { source })?;
        Ok((mods, snapshot))
    }

    fn install(&mut self, mods: Vec<Mod>, origin: CatalogOrigin) -> Arc<CatalogState> {
        let state = Arc::new(CatalogState::new(self.next_generation(), mods));
        debug!(
            generation = state.generation(),
            versions = state.versions().len(),
            loaders = state.loaders().len(),
            authors = state.authors().len(),
            "Installed catalog"
        );
        self.current = Arc::clone(&state);
        self.origin = Some(origin);
        state
    }

    fn next_generation(&self) -> u64 {
        self.current.generation() + 1
    }
}

/// JSON array of mods; `null` reads as an empty catalog
pub fn parse_catalog(body: &str) -> Result<Vec<Mod>, CatalogError> {
    serde_json::from_str::<Option<Vec<Mod>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|source| CatalogError::Parse { source })
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
