//! Site configuration.
//!
//! The page may embed `<script id="portfolio-config" type="application/json">`
//! to override defaults. Every field is optional; an absent or malformed block
//! leaves the defaults in place, and a malformed one is reported to the caller.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;
use crate::state::theme::ThemeIcons;

const DEFAULT_THEME_KEY: &str = "theme";
const DEFAULT_SUN_ICON: &str = "../assets/background/sun.png";
const DEFAULT_MOON_ICON: &str = "../assets/background/moon.png";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// `localStorage` key of the theme preference.
    pub theme_storage_key: String,
    /// Toggle icon shown while the dark theme is active.
    pub sun_icon: String,
    /// Toggle icon shown while the light theme is active.
    pub moon_icon: String,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_KEY.to_owned(),
            sun_icon: DEFAULT_SUN_ICON.to_owned(),
            moon_icon: DEFAULT_MOON_ICON.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

impl SiteConfig {
    /// Parse an inline config block.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] on malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn theme_icons(&self) -> ThemeIcons {
        ThemeIcons { sun: self.sun_icon.clone(), moon: self.moon_icon.clone() }
    }

    /// Resolve the config from the inline block's text, if the page has one.
    ///
    /// A malformed block yields the defaults together with the parse error,
    /// so the caller can report it once logging is installed.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> (Self, Option<UiError>) {
        match raw.map(Self::from_json) {
            None => (Self::default(), None),
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (Self::default(), Some(err)),
        }
    }

    /// Read the inline config block from the current document.
    #[cfg(feature = "browser")]
    #[must_use]
    pub fn from_document(document: &web_sys::Document) -> (Self, Option<UiError>) {
        let raw = document
            .get_element_by_id(crate::consts::selectors::CONFIG_SCRIPT_ID)
            .map(|script| script.text_content().unwrap_or_default());
        Self::resolve(raw.as_deref())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}
