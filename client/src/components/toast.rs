//! Toast banners rendered into `<body>`.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::consts::TOAST_TTL_MS;
use crate::error::UiError;
use crate::state::toast::{Notice, Notifier};
use crate::util::dom::create;
use crate::util::styles::{TOAST_STYLES, ensure_stylesheet};

/// Browser [`Notifier`]: every notice becomes a stacked, self-expiring banner.
#[derive(Clone)]
pub struct DomNotifier {
    document: Document,
}

impl DomNotifier {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn show(&self, notice: &Notice) -> Result<(), UiError> {
        ensure_stylesheet(&self.document, &TOAST_STYLES)?;
        let body = self.document.body().ok_or(UiError::NoDocument)?;

        let toast = create(&self.document, "div", &notice.kind.class_name())?;
        let icon = create(&self.document, "i", &format!("fas {}", notice.kind.icon()))?;
        let message = create(&self.document, "span", "")?;
        message.set_text_content(Some(&notice.message));
        let close = create(&self.document, "button", "notification-close")?;
        close.set_attribute("aria-label", "Close notification")?;
        close.append_child(&*create(&self.document, "i", "fas fa-times")?)?;

        toast.append_child(&icon)?;
        toast.append_child(&message)?;
        toast.append_child(&close)?;
        body.append_child(&toast)?;

        let dismissed = toast.clone();
        let on_close = EventListener::new(&close, "click", move |_| dismissed.remove());
        Timeout::new(TOAST_TTL_MS, move || {
            drop(on_close);
            toast.remove();
        })
        .forget();
        Ok(())
    }
}

impl Notifier for DomNotifier {
    fn notify(&self, notice: Notice) {
        if let Err(err) = self.show(&notice) {
            log::warn!("toast {:?} not shown: {err}", notice.message);
        }
    }
}
