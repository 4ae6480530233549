//! Theme toggle button and the `data-theme` attribute on `<body>`.
//!
//! The persisted preference is applied even when the page has no toggle, so
//! a theme chosen elsewhere on the site carries over.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::config::SiteConfig;
use crate::consts::selectors::{THEME_ATTR, THEME_ICON, THEME_TOGGLE};
use crate::error::UiError;
use crate::state::theme::{Theme, ThemeIcons, load_theme, toggle_theme};
use crate::util::dom::{query, report};
use crate::util::storage::LocalStore;

pub fn init(document: &Document, config: &SiteConfig) -> Result<(), UiError> {
    let body = document.body().ok_or(UiError::NoDocument)?;
    let icon = query(document, THEME_ICON)?;
    let icons = config.theme_icons();
    let key = config.theme_storage_key.clone();

    apply(&body, icon.as_ref(), load_theme(&LocalStore, &key), &icons)?;

    let Some(button) = query(document, THEME_TOGGLE)? else {
        log::debug!("no theme toggle; skipping");
        return Ok(());
    };
    EventListener::new(&button, "click", move |_| {
        let current = body.get_attribute(THEME_ATTR).as_deref().and_then(Theme::parse).unwrap_or_default();
        let next = toggle_theme(&LocalStore, &key, current).unwrap_or_else(|err| {
            log::warn!("theme preference not saved: {err}");
            current.toggled()
        });
        report("theme toggle", apply(&body, icon.as_ref(), next, &icons));
    })
    .forget();
    Ok(())
}

fn apply(body: &HtmlElement, icon: Option<&Element>, theme: Theme, icons: &ThemeIcons) -> Result<(), UiError> {
    body.set_attribute(THEME_ATTR, theme.as_str())?;
    if let Some(icon) = icon {
        let src = theme.icon(icons);
        match icon.dyn_ref::<HtmlImageElement>() {
            Some(image) => image.set_src(src),
            None => icon.set_attribute("src", src)?,
        }
    }
    Ok(())
}
