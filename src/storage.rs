//! Browser Storage
//!
//! `window.localStorage` behind the domain's `ThemeStore` seam.

use inventory_domain::{ThemeStore, THEME_STORAGE_KEY};

/// One key in `localStorage`
#[derive(Debug, Clone, Copy)]
pub struct LocalStorage {
    key: &'static str,
}

impl LocalStorage {
    /// The theme preference slot
    pub fn theme() -> Self {
        Self { key: THEME_STORAGE_KEY }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok().flatten()
    }

    fn save(&self, value: &str) {
        // Private mode and full quotas are not worth surfacing.
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(self.key, value);
        }
    }
}
