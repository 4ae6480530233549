//! Theme preference: a persisted dark/light flag.
//!
//! Reads and writes go through [`PreferenceStore`] so the toggle logic is the
//! same whether it is backed by `localStorage` or an in-memory map.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::UiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value stored in `localStorage` and written to `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon offered by the toggle: the sun while dark, the moon while light.
    #[must_use]
    pub fn icon(self, icons: &ThemeIcons) -> &str {
        match self {
            Self::Dark => &icons.sun,
            Self::Light => &icons.moon,
        }
    }
}

/// Image sources for the toggle button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeIcons {
    pub sun: String,
    pub moon: String,
}

/// String key/value persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write (quota,
    /// privacy mode).
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// Persisted theme, defaulting to dark when absent or unrecognized.
pub fn load_theme(store: &dyn PreferenceStore, key: &str) -> Theme {
    store.get(key).as_deref().and_then(Theme::parse).unwrap_or_default()
}

/// Flip `current`, persist the result and return it.
///
/// # Errors
///
/// Propagates the store's write failure. The flipped value is still the
/// caller's to apply.
pub fn toggle_theme(store: &dyn PreferenceStore, key: &str, current: Theme) -> Result<Theme, UiError> {
    let next = current.toggled();
    store.set(key, next.as_str())?;
    Ok(next)
}
