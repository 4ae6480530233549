//! One-way reveal of glass panels and the background-blur parallax.

use gloo_events::EventListener;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::consts::selectors::{BG_BLUR, GLASS_PANEL};
use crate::consts::{BLUR_SCROLL_DEBOUNCE_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::error::UiError;
use crate::util::debounce::Debounced;
use crate::util::dom::{query_all, report, scroll_y, set_style};
use crate::util::motion::blur_transform;

const REVEALED_CLASS: &str = "animate-in";

pub fn init(document: &Document, window: &Window) -> Result<(), UiError> {
    observe_panels(document)?;

    let on_settle = {
        let document = document.clone();
        let window = window.clone();
        Debounced::new(BLUR_SCROLL_DEBOUNCE_MS, move || {
            report("blur parallax", move_blurs(&document, &window));
        })
    };
    EventListener::new(window, "scroll", move |_| on_settle.trigger()).forget();
    Ok(())
}

fn observe_panels(document: &Document) -> Result<(), UiError> {
    let panels = query_all(document, GLASS_PANEL)?;
    if panels.is_empty() {
        log::debug!("no glass panels; skipping reveal");
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                report("panel reveal", reveal(&target));
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for panel in &panels {
        observer.observe(panel);
    }
    Ok(())
}

fn reveal(panel: &Element) -> Result<(), UiError> {
    set_style(panel, "opacity", "1")?;
    set_style(panel, "transform", "translateY(0)")?;
    panel.class_list().add_1(REVEALED_CLASS)?;
    Ok(())
}

fn move_blurs(document: &Document, window: &Window) -> Result<(), UiError> {
    let scroll = scroll_y(window)?;
    for (index, blur) in query_all(document, BG_BLUR)?.iter().enumerate() {
        set_style(blur, "transform", &blur_transform(scroll, index))?;
    }
    Ok(())
}
