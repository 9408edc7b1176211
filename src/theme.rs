use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key holding the `"dark"`/`"light"` preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// A single-key string store, e.g. browser local storage.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// The page-wide theme, loaded once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    theme: Theme,
}

impl ThemePreference {
    /// A stored preference wins; anything missing or unparsable falls back to
    /// the environment's color scheme.
    pub fn load(store: &impl PreferenceStore, system_prefers_dark: bool) -> Self {
        let stored = store.read(THEME_KEY).and_then(|s| s.parse::<Theme>().ok());
        let theme = match stored {
            Some(theme) => theme,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        };
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn persist(&self, store: &impl PreferenceStore) {
        store.write(THEME_KEY, self.theme.as_str());
    }

    pub fn toggle(&mut self, store: &impl PreferenceStore) -> Theme {
        self.set(self.theme.toggled());
        self.persist(store);
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap};

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.write(key, value);
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_stored_preference_wins() {
        let store = MemoryStore::with(THEME_KEY, "light");
        assert_eq!(ThemePreference::load(&store, true).theme(), Theme::Light);
        let store = MemoryStore::with(THEME_KEY, "dark");
        assert_eq!(ThemePreference::load(&store, false).theme(), Theme::Dark);
    }

    #[test]
    fn test_unset_falls_back_to_system() {
        let store = MemoryStore::default();
        assert_eq!(ThemePreference::load(&store, true).theme(), Theme::Dark);
        assert_eq!(ThemePreference::load(&store, false).theme(), Theme::Light);

        let garbage = MemoryStore::with(THEME_KEY, "sepia");
        assert_eq!(ThemePreference::load(&garbage, true).theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::default();
        let mut pref = ThemePreference::load(&store, false);
        assert_eq!(pref.toggle(&store), Theme::Dark);
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(pref.toggle(&store), Theme::Light);
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_set_does_not_persist_until_asked() {
        let store = MemoryStore::default();
        let mut pref = ThemePreference::default();
        pref.set(Theme::Dark);
        assert!(store.read(THEME_KEY).is_none());
        pref.persist(&store);
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
