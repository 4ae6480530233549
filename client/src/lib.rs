//! # portfolio-client
//!
//! WASM behaviour layer for a static single-page portfolio site.
//!
//! The HTML, CSS and assets are authored by hand; this crate attaches to the
//! existing markup once the document is parsed and adds navigation, the
//! project-details modal, toasts, the theme toggle, scroll effects, the
//! simulated contact form and the resume download.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Initializer runner and the browser boot sequence |
//! | [`state`] | DOM-free feature logic (catalog, modal, nav, theme, contact, toasts) |
//! | [`util`] | Storage, stylesheet injection, motion math, DOM helpers |
//! | `components` | Browser wiring for each page feature (`browser` feature) |
//! | [`config`] | Optional inline site configuration |
//! | [`consts`] | Timings, scroll geometry and markup selectors |
//! | [`error`] | [`error::UiError`] |

pub mod app;
#[cfg(feature = "browser")]
pub mod components;
pub mod config;
pub mod consts;
pub mod error;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

#[cfg(feature = "browser")]
mod entry {
    use wasm_bindgen::prelude::*;

    use crate::app;

    #[wasm_bindgen(start)]
    pub fn start() {
        if let Err(err) = app::boot() {
            web_sys::console::error_1(&format!("portfolio boot failed: {err}").into());
        }
    }

    /// Open the details modal for `id`, as a tile click would.
    #[wasm_bindgen]
    pub fn open_project(id: &str) {
        if app::with_portfolio(|portfolio| portfolio.open_project(id)).is_none() {
            log::warn!("open_project({id}) called before boot");
        }
    }

    /// Trigger the resume download, as a resume button would.
    #[wasm_bindgen]
    pub fn download_resume() {
        if app::with_portfolio(app::Portfolio::download_resume).is_none() {
            log::warn!("download_resume called before boot");
        }
    }
}
