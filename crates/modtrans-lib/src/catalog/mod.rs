//! Mod translation catalog
//!
//! Loading (through the cache gate), the immutable catalog state, the
//! filter engine and the card view model built on top of it.

pub mod cache;
pub mod card;
pub mod filter;
pub mod loader;
pub mod model;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cache::{CacheEntry, DEFAULT_FRESHNESS_WINDOW, is_fresh, now_millis};
pub use card::{CardView, version_range_label};
pub use filter::{
    CardAction, FilterEvent, FilterState, Translation, card_action, card_matches,
    matching_translations,
};
pub use loader::{CatalogError, CatalogLoader, CatalogOrigin, parse_catalog};
pub use model::{LangFile, Mod, VersionEntry};
pub use state::{CatalogState, ModId, ModLookup};
