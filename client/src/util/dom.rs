//! Thin `web-sys` lookups and style writes.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, UiError> {
    Ok(document.query_selector(selector)?)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Like [`query_all`], but only among `root`'s descendants.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, UiError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Create `<tag class="class_name">`.
pub fn create(document: &Document, tag: &str, class_name: &str) -> Result<Element, UiError> {
    let element = document.create_element(tag)?;
    if !class_name.is_empty() {
        element.set_class_name(class_name);
    }
    Ok(element)
}

/// Create `<tag>` holding `text` as a text node.
pub fn create_text(document: &Document, tag: &str, class_name: &str, text: &str) -> Result<Element, UiError> {
    let element = create(document, tag, class_name)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Set an inline style property. Non-HTML elements are skipped.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), UiError> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Remove an inline style property so the stylesheet value applies again.
pub fn clear_style(element: &Element, property: &str) -> Result<(), UiError> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().remove_property(property)?;
    }
    Ok(())
}

/// Vertical scroll offset of the viewport.
pub fn scroll_y(window: &Window) -> Result<f64, UiError> {
    Ok(window.scroll_y()?)
}

/// Log a failed event-handler step; handlers have nowhere to return errors.
pub fn report(context: &str, result: Result<(), UiError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
