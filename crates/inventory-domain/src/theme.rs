//! Theme Preference
//!
//! Light/dark display mode, persisted under a single storage key.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Storage key holding `"light"` or `"dark"`
pub const THEME_STORAGE_KEY: &str = "theme";

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage and to `<body data-theme>`
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome icon shown on the toggle button
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}

/// Where the theme preference lives
///
/// Storage is best-effort: implementations swallow their own failures.
pub trait ThemeStore {
    /// Raw stored value, if any
    fn load(&self) -> Option<String>;

    /// Persist the raw value
    fn save(&self, value: &str);
}

/// Stored theme, defaulting to light on first visit
pub fn load_theme(store: &impl ThemeStore) -> Theme {
    store
        .load()
        .map(|value| Theme::parse(&value))
        .unwrap_or_default()
}

/// Flip the theme and persist the new value
pub fn toggle_theme(store: &impl ThemeStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.save(next.as_str());
    info!(from = current.as_str(), to = next.as_str(), "theme toggled");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore(RefCell<Option<String>>);

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }
    }

    #[test]
    fn test_defaults_to_light() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn test_loads_stored_dark() {
        let store = MemoryStore(RefCell::new(Some("dark".to_string())));
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_unknown_value_reads_as_light() {
        let store = MemoryStore(RefCell::new(Some("sepia".to_string())));
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        let store = MemoryStore::default();
        let theme = load_theme(&store);
        assert_eq!(theme.icon_class(), "fa-moon");

        let theme = toggle_theme(&store, theme);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.load().as_deref(), Some("dark"));
        assert_eq!(theme.icon_class(), "fa-sun");

        let theme = toggle_theme(&store, theme);
        assert_eq!(theme, Theme::Light);
        assert_eq!(store.load().as_deref(), Some("light"));
        assert_eq!(theme.icon_class(), "fa-moon");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
