//! Project-details modal mounted into `<body>`.
//!
//! ARCHITECTURE
//! ============
//! `ModalController` wraps `ModalState<MountedModal>`. A `MountedModal` owns
//! the overlay element, every listener attached for that instance (the
//! document-level Escape listener included) and the pending open frame.
//! Dropping it removes the overlay and deregisters those listeners, so the
//! state's replace/finish transitions are the only teardown path.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::components::toast::DomNotifier;
use crate::consts::MODAL_CLOSE_MS;
use crate::error::UiError;
use crate::state::modal::{
    CLOSE_LABEL, DEMO_LABEL, FADE_OUT_ANIMATION, FEATURES_HEADING, LinkAction, ModalId, ModalState, ModalView,
    OPEN_CLASS, SOURCE_LABEL, TECH_HEADING,
};
use crate::state::projects::ProjectRecord;
use crate::state::toast::Notifier;
use crate::util::dom::{create, create_text, report, set_style};
use crate::util::styles::{MODAL_STYLES, ensure_stylesheet};

/// DOM and listeners of one live modal.
pub struct MountedModal {
    overlay: Element,
    _listeners: Vec<EventListener>,
    _open_frame: AnimationFrame,
}

impl MountedModal {
    fn fade_out(&self) -> Result<(), UiError> {
        set_style(&self.overlay, "animation", FADE_OUT_ANIMATION)?;
        self.overlay.class_list().remove_1(OPEN_CLASS)?;
        Ok(())
    }
}

impl Drop for MountedModal {
    fn drop(&mut self) {
        self.overlay.remove();
    }
}

struct Inner {
    document: Document,
    notifier: DomNotifier,
    state: RefCell<ModalState<MountedModal>>,
}

/// Shared handle to the page's single modal slot.
#[derive(Clone)]
pub struct ModalController {
    inner: Rc<Inner>,
}

impl ModalController {
    pub fn new(document: Document, notifier: DomNotifier) -> Self {
        Self { inner: Rc::new(Inner { document, notifier, state: RefCell::new(ModalState::default()) }) }
    }

    /// Show `record`, replacing any modal already on screen.
    ///
    /// # Errors
    ///
    /// Returns the DOM failure that prevented mounting; no modal remains.
    pub fn open(&self, record: &ProjectRecord) -> Result<ModalId, UiError> {
        let inner = &self.inner;
        ensure_stylesheet(&inner.document, &MODAL_STYLES)?;
        let weak = Rc::downgrade(inner);
        inner
            .state
            .borrow_mut()
            .open(record, |id, view| mount(&inner.document, &inner.notifier, weak, id, view))
    }
}

/// Start closing instance `id`. With `key`, only an Escape press counts.
fn begin_close(controller: &Weak<Inner>, id: ModalId, key: Option<&str>) {
    let Some(inner) = controller.upgrade() else {
        return;
    };
    let started = {
        let mut state = inner.state.borrow_mut();
        match key {
            Some(key) => state.handle_key(id, key),
            None => state.request_close(id),
        }
    };
    if !started {
        return;
    }
    if let Some(mounted) = inner.state.borrow().mount() {
        report("modal fade-out", mounted.fade_out());
    }
    let controller = controller.clone();
    Timeout::new(MODAL_CLOSE_MS, move || {
        if let Some(inner) = controller.upgrade() {
            let finished = inner.state.borrow_mut().finish_close(id);
            drop(finished);
        }
    })
    .forget();
}

fn mount(
    document: &Document,
    notifier: &DomNotifier,
    controller: Weak<Inner>,
    id: ModalId,
    view: &ModalView,
) -> Result<MountedModal, UiError> {
    let body = document.body().ok_or(UiError::NoDocument)?;

    let overlay = create(document, "div", "project-modal")?;
    overlay.set_attribute("role", "dialog")?;
    overlay.set_attribute("aria-modal", "true")?;

    let content = create(document, "div", "modal-content glass-panel")?;
    content.set_attribute("tabindex", "0")?;

    let close = create(document, "button", "modal-close")?;
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", CLOSE_LABEL)?;
    close.set_inner_html(r#"<i class="fas fa-times" aria-hidden="true"></i>"#);

    let tech = create(document, "div", "project-tech")?;
    tech.append_child(&*create_text(document, "h3", "", TECH_HEADING)?)?;
    let tags = create(document, "div", "tech-tags")?;
    for tag in &view.tech {
        tags.append_child(&*create_text(document, "span", "tech-tag", tag)?)?;
    }
    tech.append_child(&tags)?;

    let features = create(document, "div", "project-features")?;
    features.append_child(&*create_text(document, "h3", "", FEATURES_HEADING)?)?;
    let list = create(document, "ul", "")?;
    for feature in &view.features {
        list.append_child(&*create_text(document, "li", "", feature)?)?;
    }
    features.append_child(&list)?;

    let actions = create(document, "div", "modal-actions")?;
    let demo = create_text(document, "button", "btn-primary", DEMO_LABEL)?;
    demo.set_attribute("type", "button")?;
    let source = create_text(document, "button", "btn-secondary", SOURCE_LABEL)?;
    source.set_attribute("type", "button")?;
    actions.append_child(&demo)?;
    actions.append_child(&source)?;

    content.append_child(&close)?;
    content.append_child(&*create_text(document, "h2", "", &view.title)?)?;
    content.append_child(&*create_text(document, "p", "project-description", &view.description)?)?;
    content.append_child(&tech)?;
    content.append_child(&features)?;
    content.append_child(&actions)?;
    overlay.append_child(&content)?;
    body.append_child(&overlay)?;

    let mut listeners = vec![
        action_listener(&demo, view.demo.clone(), notifier.clone()),
        action_listener(&source, view.source.clone(), notifier.clone()),
    ];

    let on_close = controller.clone();
    listeners.push(EventListener::new(&close, "click", move |_| begin_close(&on_close, id, None)));

    let on_backdrop = controller.clone();
    let overlay_value: JsValue = overlay.clone().into();
    listeners.push(EventListener::new(&overlay, "click", move |event| {
        if event.target().is_some_and(|target| JsValue::from(target) == overlay_value) {
            begin_close(&on_backdrop, id, None);
        }
    }));

    listeners.push(EventListener::new(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            begin_close(&controller, id, Some(&key));
        }
    }));

    let opening = overlay.clone();
    let open_frame = request_animation_frame(move |_| {
        report("modal open", opening.class_list().add_1(OPEN_CLASS).map_err(UiError::from));
        if let Some(content) = content.dyn_ref::<HtmlElement>() {
            report("modal focus", content.focus().map_err(UiError::from));
        }
    });

    Ok(MountedModal { overlay, _listeners: listeners, _open_frame: open_frame })
}

fn action_listener(button: &Element, action: LinkAction, notifier: DomNotifier) -> EventListener {
    EventListener::new(button, "click", move |_| match &action {
        LinkAction::Navigate(url) => report("open project link", open_in_new_context(url)),
        LinkAction::Unavailable(notice) => notifier.notify(notice.clone()),
    })
}

fn open_in_new_context(url: &str) -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    window.open_with_url_and_target(url, "_blank")?;
    Ok(())
}
