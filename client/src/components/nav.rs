//! Navbar: mobile menu, in-page anchors, scroll-linked highlight and backdrop.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::consts::NAV_SCROLL_DEBOUNCE_MS;
use crate::consts::selectors::{NAV_LINK, NAV_LINKS, NAV_TOGGLE, NAVBAR_ID, SECTIONS};
use crate::error::UiError;
use crate::state::nav::{MobileMenu, NavbarBackdrop, SectionOffset, active_section, anchor_target, link_is_active};
use crate::util::debounce::Debounced;
use crate::util::dom::{query, query_all, report, scroll_y, set_style};

const ACTIVE_CLASS: &str = "active";

pub fn init(document: &Document, window: &Window) -> Result<(), UiError> {
    let toggle = query(document, NAV_TOGGLE)?;
    let panel = query(document, NAV_LINKS)?;
    let links = Rc::new(query_all(document, NAV_LINK)?);

    if let (Some(toggle), Some(panel)) = (&toggle, &panel) {
        let button = toggle.clone();
        let menu = panel.clone();
        EventListener::new(toggle, "click", move |_| {
            report("menu toggle", toggle_menu(&button, &menu));
        })
        .forget();
    } else {
        log::debug!("no mobile menu toggle; skipping");
    }

    for link in links.iter() {
        let clicked = link.clone();
        let all_links = Rc::clone(&links);
        let document = document.clone();
        let toggle = toggle.clone();
        let panel = panel.clone();
        EventListener::new_with_options(link, "click", EventListenerOptions::enable_prevent_default(), move |event| {
            let href = clicked.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            report(
                "anchor navigation",
                follow_anchor(&clicked, &all_links, &target, toggle.as_ref(), panel.as_ref()),
            );
        })
        .forget();
    }

    let on_settle = {
        let document = document.clone();
        let window = window.clone();
        Debounced::new(NAV_SCROLL_DEBOUNCE_MS, move || {
            report("navigation scroll", sync_with_scroll(&document, &window));
        })
    };
    EventListener::new(window, "scroll", move |_| on_settle.trigger()).forget();
    Ok(())
}

fn toggle_menu(toggle: &Element, panel: &Element) -> Result<(), UiError> {
    let open = panel.class_list().toggle(ACTIVE_CLASS)?;
    set_menu_icon(toggle, MobileMenu::from_open(open))
}

fn set_menu_icon(toggle: &Element, menu: MobileMenu) -> Result<(), UiError> {
    if let Some(icon) = toggle.query_selector("i")? {
        let (show, hide) = menu.icon_swap();
        icon.class_list().add_1(show)?;
        icon.class_list().remove_1(hide)?;
    }
    Ok(())
}

fn follow_anchor(
    link: &Element,
    links: &[Element],
    target: &Element,
    toggle: Option<&Element>,
    panel: Option<&Element>,
) -> Result<(), UiError> {
    for other in links {
        other.class_list().remove_1(ACTIVE_CLASS)?;
    }
    link.class_list().add_1(ACTIVE_CLASS)?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    if let Some(panel) = panel {
        panel.class_list().remove_1(ACTIVE_CLASS)?;
    }
    if let Some(toggle) = toggle {
        set_menu_icon(toggle, MobileMenu::closed())?;
    }
    Ok(())
}

fn sync_with_scroll(document: &Document, window: &Window) -> Result<(), UiError> {
    let scroll = scroll_y(window)?;

    let sections = query_all(document, SECTIONS)?
        .into_iter()
        .filter_map(|section| {
            let top = section.dyn_ref::<HtmlElement>()?.offset_top();
            Some(SectionOffset::new(section.id(), f64::from(top)))
        })
        .collect::<Vec<_>>();
    let current = active_section(&sections, scroll);
    for link in query_all(document, NAV_LINK)? {
        let active = link_is_active(link.get_attribute("href").as_deref(), current);
        link.class_list().toggle_with_force(ACTIVE_CLASS, active)?;
    }

    if let Some(navbar) = document.get_element_by_id(NAVBAR_ID) {
        let backdrop = NavbarBackdrop::for_scroll(scroll);
        set_style(&navbar, "background", backdrop.background())?;
        set_style(&navbar, "backdrop-filter", backdrop.backdrop_filter())?;
    }
    Ok(())
}
