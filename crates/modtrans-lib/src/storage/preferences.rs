//! Theme preference persistence

use super::{KeyValueStore, StorageError, keys};
use crate::primitives::Theme;
use tracing::debug;

/// Theme saved by a previous `theme` command, if any
///
/// Unrecognized stored values are ignored rather than reported.
pub fn stored_theme(store: &dyn KeyValueStore) -> Result<Option<Theme>, StorageError> {
    let Some(raw) = store.get(keys::THEME)? else {
        return Ok(None);
    };

    match raw.as_str() {
        "dark" => Ok(Some(Theme::Dark)),
        "light" => Ok(Some(Theme::Light)),
        other => {
            debug!(value = other, "Ignoring unknown stored theme");
            Ok(None)
        }
    }
}

/// Stored theme, else the system signal, else light
pub fn resolve_theme(
    store: &dyn KeyValueStore,
    system_prefers_dark: Option<bool>,
) -> Result<Theme, StorageError> {
    if let Some(theme) = stored_theme(store)? {
        return Ok(theme);
    }

    Ok(match system_prefers_dark {
        Some(true) => Theme::Dark,
        _ => Theme::Light,
    })
}

pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) -> Result<(), StorageError> {
    store.set(keys::THEME, theme.as_str())
}

#[cfg(test)]
mod tests {
    include!("preferences.test.rs");
}
