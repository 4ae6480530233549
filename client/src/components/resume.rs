//! Resume download through a generated text blob.

use gloo_events::{EventListener, EventListenerOptions};
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

use crate::components::toast::DomNotifier;
use crate::consts::selectors::RESUME_BUTTONS;
use crate::error::UiError;
use crate::state::toast::{Notice, Notifier};
use crate::util::dom::query_all;
use crate::util::resume::{RESUME_DOWNLOADED, RESUME_FAILED, RESUME_FILENAME, RESUME_MIME, resume_content};

pub fn init(document: &Document, notifier: DomNotifier) -> Result<(), UiError> {
    let buttons = query_all(document, RESUME_BUTTONS)?;
    if buttons.is_empty() {
        log::debug!("no resume buttons; skipping");
        return Ok(());
    }
    for button in buttons {
        let document = document.clone();
        let notifier = notifier.clone();
        EventListener::new_with_options(&button, "click", EventListenerOptions::enable_prevent_default(), move |event| {
            event.prevent_default();
            download(&document, &notifier);
        })
        .forget();
    }
    Ok(())
}

/// Offer the resume as a file and toast the outcome.
pub fn download(document: &Document, notifier: &dyn Notifier) {
    match save_blob(document) {
        Ok(()) => notifier.notify(Notice::success(RESUME_DOWNLOADED)),
        Err(err) => {
            log::error!("resume download failed: {err}");
            notifier.notify(Notice::error(RESUME_FAILED));
        }
    }
}

fn save_blob(document: &Document) -> Result<(), UiError> {
    let body = document.body().ok_or(UiError::NoDocument)?;
    let parts = Array::of1(&JsValue::from_str(resume_content()));
    let options = BlobPropertyBag::new();
    options.set_type(RESUME_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| UiError::Dom("created <a> is not an anchor".to_owned()))?;
    link.set_href(&url);
    link.set_download(RESUME_FILENAME);
    let clicked = body.append_child(&link).map(|_| link.click());
    link.remove();
    let revoked = Url::revoke_object_url(&url);
    clicked?;
    revoked?;
    Ok(())
}
