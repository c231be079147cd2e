//! Light/dark theme state and its persistence rules.

use std::{fmt, str::FromStr};

use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "theme";
/// Class set on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid theme value: {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("stored theme is invalid")]
    Invalid(#[from] ThemeParseError),
    #[error("couldn't write theme: {0}")]
    Write(String),
}

/// Where the theme preference is persisted.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<Theme>, StorageError>;
    fn save(&mut self, theme: Theme) -> Result<(), StorageError>;
}

/// Where did the initial theme come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    Platform,
}

/// Stored value if any, otherwise the platform's dark mode preference.
pub fn resolve_initial(stored: Option<Theme>, prefers_dark: bool) -> (Theme, ThemeSource) {
    match stored {
        Some(theme) => (theme, ThemeSource::Stored),
        None if prefers_dark => (Theme::Dark, ThemeSource::Platform),
        None => (Theme::Light, ThemeSource::Platform),
    }
}

/// Holds the active theme and writes every change through to its store.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn init(store: S, prefers_dark: bool) -> Self {
        let stored = store.load().unwrap_or_else(|e| {
            log::warn!("Couldn't read persisted theme, using platform default: {e}");
            None
        });
        let (theme, source) = resolve_initial(stored, prefers_dark);
        log::debug!("Initial theme {theme} from {source:?}");
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set(&mut self, theme: Theme) -> Theme {
        self.theme = theme;
        if let Err(e) = self.store.save(theme) {
            log::warn!("Couldn't persist theme: {e}");
        }
        theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStore {
        value: Option<String>,
        writes: usize,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Result<Option<Theme>, StorageError> {
            match &self.value {
                Some(s) => Ok(Some(s.parse()?)),
                None => Ok(None),
            }
        }

        fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
            self.value = Some(theme.to_string());
            self.writes += 1;
            Ok(())
        }
    }

    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> Result<Option<Theme>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&mut self, _theme: Theme) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    fn stored(value: &str) -> MemoryStore {
        MemoryStore {
            value: Some(value.to_string()),
            writes: 0,
        }
    }

    #[test]
    fn test_stored_value_wins() {
        let c = ThemeController::init(stored("light"), true);
        assert_eq!(c.theme(), Theme::Light);
        let c = ThemeController::init(stored("dark"), false);
        assert_eq!(c.theme(), Theme::Dark);
    }

    #[test]
    fn test_platform_fallback() {
        assert_eq!(ThemeController::init(MemoryStore::default(), true).theme(), Theme::Dark);
        assert_eq!(ThemeController::init(MemoryStore::default(), false).theme(), Theme::Light);
    }

    #[test]
    fn test_invalid_or_unreadable_storage_falls_back() {
        assert_eq!(ThemeController::init(stored("purple"), true).theme(), Theme::Dark);
        assert_eq!(ThemeController::init(BrokenStore, false).theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_restores_and_persists() {
        let mut c = ThemeController::init(MemoryStore::default(), false);
        assert_eq!(c.toggle(), Theme::Dark);
        assert_eq!(c.store().value.as_deref(), Some("dark"));
        assert_eq!(c.toggle(), Theme::Light);
        assert_eq!(c.store().value.as_deref(), Some("light"));
        assert_eq!(c.store().writes, 2);
    }

    #[test]
    fn test_write_failure_keeps_new_theme() {
        let mut c = ThemeController::init(BrokenStore, true);
        assert_eq!(c.toggle(), Theme::Light);
        assert_eq!(c.theme(), Theme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light\n".parse::<Theme>(), Ok(Theme::Light));
        assert!("".parse::<Theme>().is_err());
    }
}
