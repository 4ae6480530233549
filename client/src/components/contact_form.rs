//! Contact form: simulated submission and field focus styling.

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::components::toast::DomNotifier;
use crate::consts::selectors::{CONTACT_FORM, FORM_FIELDS, SUBMIT_BUTTON};
use crate::error::UiError;
use crate::state::contact::{ButtonFrame, ContactForm, SubmitButton, keeps_focus_style, run_submission};
use crate::util::dom::{clear_style, query, query_all_in, report, set_style};

const FOCUSED_CLASS: &str = "focused";

struct DomForm {
    form: HtmlFormElement,
}

impl ContactForm for DomForm {
    type Button = DomButton;

    fn submit_button(&self) -> Option<DomButton> {
        match self.form.query_selector(SUBMIT_BUTTON) {
            Ok(button) => button.map(|element| DomButton { element }),
            Err(err) => {
                log::warn!("submit button lookup failed: {}", UiError::from(err));
                None
            }
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

struct DomButton {
    element: Element,
}

impl SubmitButton for DomButton {
    fn label_html(&self) -> String {
        self.element.inner_html()
    }

    fn is_disabled(&self) -> bool {
        self.element.has_attribute("disabled")
    }

    fn render(&self, frame: &ButtonFrame<'_>) {
        report("submit button", self.paint(frame));
    }
}

impl DomButton {
    fn paint(&self, frame: &ButtonFrame<'_>) -> Result<(), UiError> {
        self.element.set_inner_html(frame.label_html);
        self.element.toggle_attribute_with_force("disabled", frame.disabled)?;
        match frame.background {
            Some(value) => set_style(&self.element, "background", value),
            None => clear_style(&self.element, "background"),
        }
    }
}

pub fn init(document: &Document, notifier: DomNotifier) -> Result<(), UiError> {
    let Some(form) = query(document, CONTACT_FORM)? else {
        log::debug!("no contact form; skipping");
        return Ok(());
    };

    let lookup = document.clone();
    EventListener::new_with_options(&form, "submit", EventListenerOptions::enable_prevent_default(), move |event| {
        event.prevent_default();
        // Re-resolved per submission so a replaced form is still found.
        let form = match query(&lookup, CONTACT_FORM) {
            Ok(found) => found.and_then(|element| element.dyn_into::<HtmlFormElement>().ok()).map(|form| DomForm { form }),
            Err(err) => {
                log::warn!("contact form lookup failed: {err}");
                None
            }
        };
        let notifier = notifier.clone();
        spawn_local(async move {
            let outcome = run_submission(form.as_ref(), &notifier, TimeoutFuture::new).await;
            log::debug!("contact submission finished: {outcome:?}");
        });
    })
    .forget();

    for field in query_all_in(&form, FORM_FIELDS)? {
        let focused = field.clone();
        EventListener::new(&field, "focus", move |_| {
            if let Some(parent) = focused.parent_element() {
                report("field focus", parent.class_list().add_1(FOCUSED_CLASS).map_err(UiError::from));
            }
        })
        .forget();

        let blurred = field.clone();
        EventListener::new(&field, "blur", move |_| {
            if keeps_focus_style(&field_value(&blurred)) {
                return;
            }
            if let Some(parent) = blurred.parent_element() {
                report("field blur", parent.class_list().remove_1(FOCUSED_CLASS).map_err(UiError::from));
            }
        })
        .forget();
    }
    Ok(())
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
