//! Project-details modal lifecycle.
//!
//! ARCHITECTURE
//! ============
//! `ModalState` owns at most one live instance together with its mount
//! handle `S`. The handle is whatever the renderer needs to keep alive (DOM
//! nodes, listeners, pending frames); dropping it is the instance's teardown.
//! Because the state owns the handle, replacing or finishing an instance
//! always runs that teardown, including the Escape-key subscription.
//!
//! Lifecycle: `open` -> `Open` -> `request_close` -> `Closing` ->
//! `finish_close` (after the fade-out delay) -> removed.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::state::projects::ProjectRecord;
use crate::state::toast::Notice;

pub const TECH_HEADING: &str = "Technologies Used:";
pub const FEATURES_HEADING: &str = "Key Features:";
pub const DEMO_LABEL: &str = "View Live Demo";
pub const SOURCE_LABEL: &str = "View Source Code";
pub const CLOSE_LABEL: &str = "Close project details";
pub const NO_DEMO_URL: &str = "No live demo URL provided.";
pub const NO_SOURCE_URL: &str = "No source URL provided.";

/// Class added on the first frame after mounting to start the open transition.
pub const OPEN_CLASS: &str = "open";

/// Inline animation applied when a close is requested.
pub const FADE_OUT_ANIMATION: &str = "fadeOut 0.2s ease forwards";

/// Identity of one modal instance. Never reused within a page lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModalId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Open,
    Closing,
}

/// What an action button does when pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Open this URL in a new browsing context.
    Navigate(String),
    /// No URL; tell the user instead.
    Unavailable(Notice),
}

impl LinkAction {
    fn resolve(url: Option<&str>, missing: &str) -> Self {
        match url {
            Some(url) => Self::Navigate(url.to_owned()),
            None => Self::Unavailable(Notice::info(missing)),
        }
    }
}

/// Render-ready content of the modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub features: Vec<String>,
    pub demo: LinkAction,
    pub source: LinkAction,
}

impl ModalView {
    #[must_use]
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            tech: record.tech.clone(),
            features: record.features.clone(),
            demo: LinkAction::resolve(record.demo_url.as_deref(), NO_DEMO_URL),
            source: LinkAction::resolve(record.source_url.as_deref(), NO_SOURCE_URL),
        }
    }
}

struct Instance<S> {
    id: ModalId,
    phase: ModalPhase,
    view: ModalView,
    mount: S,
}

/// Single-slot modal registry.
pub struct ModalState<S> {
    current: Option<Instance<S>>,
    next_id: u64,
}

impl<S> Default for ModalState<S> {
    fn default() -> Self {
        Self { current: None, next_id: 0 }
    }
}

impl<S> ModalState<S> {
    /// Replace any live instance with a new one for `record`.
    ///
    /// The previous instance's handle is dropped before `mount` runs, so the
    /// document never holds two overlays.
    ///
    /// # Errors
    ///
    /// Propagates the error from `mount`; the registry is left empty.
    pub fn open<E>(
        &mut self,
        record: &ProjectRecord,
        mount: impl FnOnce(ModalId, &ModalView) -> Result<S, E>,
    ) -> Result<ModalId, E> {
        drop(self.current.take());
        self.next_id += 1;
        let id = ModalId(self.next_id);
        let view = ModalView::from_record(record);
        let mount = mount(id, &view)?;
        self.current = Some(Instance { id, phase: ModalPhase::Open, view, mount });
        Ok(id)
    }

    /// Move instance `id` into its closing phase.
    ///
    /// Returns `true` only on the transition, so the caller starts exactly one
    /// fade-out and one removal timer per instance.
    pub fn request_close(&mut self, id: ModalId) -> bool {
        match self.current.as_mut() {
            Some(instance) if instance.id == id && instance.phase == ModalPhase::Open => {
                instance.phase = ModalPhase::Closing;
                true
            }
            _ => false,
        }
    }

    /// Route a key press from the instance's Escape subscription.
    pub fn handle_key(&mut self, id: ModalId, key: &str) -> bool {
        key == "Escape" && self.request_close(id)
    }

    /// Remove instance `id` once its fade-out has elapsed and hand back its
    /// handle. A timer for an instance that was already replaced gets `None`.
    pub fn finish_close(&mut self, id: ModalId) -> Option<S> {
        if self.current.as_ref().is_some_and(|instance| instance.id == id) {
            self.current.take().map(|instance| instance.mount)
        } else {
            None
        }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn current_id(&self) -> Option<ModalId> {
        self.current.as_ref().map(|instance| instance.id)
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn phase(&self) -> Option<ModalPhase> {
        self.current.as_ref().map(|instance| instance.phase)
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn view(&self) -> Option<&ModalView> {
        self.current.as_ref().map(|instance| &instance.view)
    }

    #[must_use]
    pub fn mount(&self) -> Option<&S> {
        self.current.as_ref().map(|instance| &instance.mount)
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
