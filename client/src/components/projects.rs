//! Project tiles: click/keyboard activation, hover lift, accessible naming.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::components::modal::ModalController;
use crate::components::toast::DomNotifier;
use crate::consts::selectors::{PROJECT_ATTR, PROJECT_TILE};
use crate::error::UiError;
use crate::state::projects::{ProjectCatalog, TILE_HOVER_TRANSFORM, activate_tile, is_activation_key, tile_aria_label};
use crate::util::dom::{clear_style, query_all, report, set_style};

/// Open the modal for `project_id`, or toast when it is unknown.
pub fn open_project(catalog: &ProjectCatalog, modal: &ModalController, notifier: &DomNotifier, project_id: Option<&str>) {
    if let Some(Err(err)) = activate_tile(catalog, project_id, notifier, |record| modal.open(record)) {
        log::warn!("project modal not shown: {err}");
    }
}

pub fn init(
    document: &Document,
    catalog: Rc<ProjectCatalog>,
    modal: ModalController,
    notifier: DomNotifier,
) -> Result<(), UiError> {
    let tiles = query_all(document, PROJECT_TILE)?;
    if tiles.is_empty() {
        log::debug!("no project tiles; skipping");
        return Ok(());
    }

    for (index, tile) in tiles.into_iter().enumerate() {
        tile.set_attribute("role", "button")?;
        if !tile.has_attribute("tabindex") {
            tile.set_attribute("tabindex", "0")?;
        }
        tile.set_attribute("aria-label", &tile_aria_label(index))?;

        let clicked = tile.clone();
        let catalog = Rc::clone(&catalog);
        let modal = modal.clone();
        let notifier = notifier.clone();
        EventListener::new(&tile, "click", move |_| {
            let project_id = clicked.get_attribute(PROJECT_ATTR);
            open_project(&catalog, &modal, &notifier, project_id.as_deref());
        })
        .forget();

        let hovered = tile.clone();
        EventListener::new(&tile, "mouseenter", move |_| {
            report("tile hover", set_style(&hovered, "transform", TILE_HOVER_TRANSFORM));
        })
        .forget();
        let left = tile.clone();
        EventListener::new(&tile, "mouseleave", move |_| report("tile hover", clear_style(&left, "transform")))
            .forget();

        let pressed = tile.clone();
        EventListener::new_with_options(&tile, "keydown", EventListenerOptions::enable_prevent_default(), move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if is_activation_key(&key) {
                event.prevent_default();
                if let Some(tile) = pressed.dyn_ref::<HtmlElement>() {
                    tile.click();
                }
            }
        })
        .forget();
    }
    Ok(())
}
