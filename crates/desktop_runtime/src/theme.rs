//! Dark/light theme flag and its persisted preference.

use std::{fmt, str::FromStr};

use platform_host::PrefsStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Preference key the theme is stored under.
pub const THEME_PREF_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures while loading or saving the theme preference.
pub enum ThemeError {
    /// The stored value is neither `dark` nor `light`.
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    /// The preference store rejected the read or write.
    #[error("theme preference storage failed: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Current theme with set/toggle operations. Persistence is left to the caller so the context
/// can live inside a reactive signal.
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Flips the theme and returns the new value.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

/// Reads the stored theme, if any.
///
/// # Errors
///
/// Returns [`ThemeError::Storage`] when the store fails and [`ThemeError::UnknownTheme`] when the
/// stored value is unrecognized.
pub async fn load_theme<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<Option<Theme>, ThemeError> {
    let raw = store
        .load_pref(THEME_PREF_KEY)
        .await
        .map_err(ThemeError::Storage)?;
    raw.map(|raw| raw.parse::<Theme>()).transpose()
}

/// Stores `theme` as its bare name.
///
/// # Errors
///
/// Returns [`ThemeError::Storage`] when the store rejects the write.
pub async fn persist_theme<S: PrefsStore + ?Sized>(
    store: &S,
    theme: Theme,
) -> Result<(), ThemeError> {
    store
        .save_pref(THEME_PREF_KEY, theme.as_str())
        .await
        .map_err(ThemeError::Storage)
}

/// Builds the startup context: the stored theme when readable, the default otherwise.
pub async fn load_theme_context<S: PrefsStore + ?Sized>(
    store: &S,
) -> (ThemeContext, Option<ThemeError>) {
    match load_theme(store).await {
        Ok(theme) => (ThemeContext::new(theme.unwrap_or_default()), None),
        Err(err) => (ThemeContext::default(), Some(err)),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, NoopPrefsStore};

    use super::*;

    #[test]
    fn defaults_to_dark_when_nothing_is_stored() {
        let (context, err) = block_on(load_theme_context(&NoopPrefsStore));
        assert_eq!(context.theme(), Theme::Dark);
        assert!(context.is_dark());
        assert_eq!(err, None);
    }

    #[test]
    fn loads_stored_theme() {
        let store = MemoryPrefsStore::with_entry(THEME_PREF_KEY, "light");
        assert_eq!(block_on(load_theme(&store)), Ok(Some(Theme::Light)));
    }

    #[test]
    fn toggle_flips_and_persists_bare_name() {
        let store = MemoryPrefsStore::default();
        let mut context = ThemeContext::default();

        let theme = context.toggle();
        block_on(persist_theme(&store, theme)).expect("persist");

        assert_eq!(theme, Theme::Light);
        assert_eq!(store.peek(THEME_PREF_KEY), Some("light".to_string()));
        assert_eq!(context.toggle(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_keeps_default_and_reports_error() {
        let store = MemoryPrefsStore::with_entry(THEME_PREF_KEY, "sepia");
        let (context, err) = block_on(load_theme_context(&store));
        assert_eq!(context.theme(), Theme::Dark);
        assert_eq!(err, Some(ThemeError::UnknownTheme("sepia".to_string())));
    }

    #[test]
    fn set_overrides_current_theme() {
        let mut context = ThemeContext::new(Theme::Dark);
        context.set(Theme::Light);
        assert!(!context.is_dark());
        assert_eq!(context.theme().to_string(), "light");
    }
}
