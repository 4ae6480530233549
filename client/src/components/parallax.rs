//! Hero parallax and skill-tag stagger, at most once per animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use web_sys::{Document, Window};

use crate::consts::selectors::{HERO_CARD, SKILL_TAG};
use crate::error::UiError;
use crate::util::dom::{query, query_all, report, scroll_y, set_style};
use crate::util::motion::{FrameGate, hero_transform, skill_tag_delay};

pub fn init(document: &Document, window: &Window) -> Result<(), UiError> {
    let gate = Rc::new(RefCell::new(FrameGate::default()));
    // Dropping an `AnimationFrame` cancels it, so the latest one is parked here.
    let frame = RefCell::new(None::<AnimationFrame>);
    let document = document.clone();
    let scroller = window.clone();

    EventListener::new(window, "scroll", move |_| {
        if !gate.borrow_mut().request() {
            return;
        }
        let gate = Rc::clone(&gate);
        let document = document.clone();
        let window = scroller.clone();
        let handle = request_animation_frame(move |_| {
            report("hero parallax", update(&document, &window));
            gate.borrow_mut().complete();
        });
        *frame.borrow_mut() = Some(handle);
    })
    .forget();
    Ok(())
}

fn update(document: &Document, window: &Window) -> Result<(), UiError> {
    let scroll = scroll_y(window)?;
    if let Some(hero) = query(document, HERO_CARD)? {
        set_style(&hero, "transform", &hero_transform(scroll))?;
    }
    for (index, tag) in query_all(document, SKILL_TAG)?.iter().enumerate() {
        set_style(tag, "animation-delay", &skill_tag_delay(index))?;
    }
    Ok(())
}
