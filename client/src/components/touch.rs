//! Press feedback for touch screens.

use gloo_events::EventListener;
use web_sys::Document;

use crate::consts::selectors::TOUCH_TARGETS;
use crate::error::UiError;
use crate::util::dom::{clear_style, query_all, report, set_style};

const PRESSED_TRANSFORM: &str = "scale(0.98)";

pub fn init(document: &Document) -> Result<(), UiError> {
    for element in query_all(document, TOUCH_TARGETS)? {
        let pressed = element.clone();
        EventListener::new(&element, "touchstart", move |_| {
            report("touch feedback", set_style(&pressed, "transform", PRESSED_TRANSFORM));
        })
        .forget();
        let released = element.clone();
        EventListener::new(&element, "touchend", move |_| report("touch feedback", clear_style(&released, "transform")))
            .forget();
    }
    Ok(())
}
