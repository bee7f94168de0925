//! Browser implementations of the storage and navigation seams

use gloo::storage::{LocalStorage, Storage};
use rota_core::{KeyValueStorage, Navigator, StorageError, StorageResult};
use tracing::warn;

/// `window.localStorage`, holding plain string values
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::write(key, format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| StorageError::remove(key, format!("{e:?}")))
    }
}

/// Navigates by assigning `window.location.href`, so every move is a full page load
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn current_path(&self) -> String {
        gloo::utils::window()
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn navigate(&self, path: &str) {
        if let Err(e) = gloo::utils::window().location().set_href(path) {
            warn!(%path, error = ?e, "Navigation failed");
        }
    }
}

/// Origin of the current page, used as the API base URL
pub fn page_origin() -> String {
    gloo::utils::window()
        .location()
        .origin()
        .unwrap_or_default()
}
