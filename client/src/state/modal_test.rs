use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use super::*;
use crate::state::projects::{ProjectCatalog, activate_tile};
use crate::test_support::RecordingNotifier;

/// Stands in for the DOM mount: counts live overlays and Escape listeners.
struct Probe {
    overlays: Rc<Cell<usize>>,
    escape_listeners: Rc<Cell<usize>>,
}

impl Probe {
    fn new(overlays: &Rc<Cell<usize>>, escape_listeners: &Rc<Cell<usize>>) -> Self {
        overlays.set(overlays.get() + 1);
        escape_listeners.set(escape_listeners.get() + 1);
        Self { overlays: Rc::clone(overlays), escape_listeners: Rc::clone(escape_listeners) }
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.overlays.set(self.overlays.get() - 1);
        self.escape_listeners.set(self.escape_listeners.get() - 1);
    }
}

struct Harness {
    state: ModalState<Probe>,
    overlays: Rc<Cell<usize>>,
    escape_listeners: Rc<Cell<usize>>,
}

impl Harness {
    fn new() -> Self {
        Self {
            state: ModalState::default(),
            overlays: Rc::new(Cell::new(0)),
            escape_listeners: Rc::new(Cell::new(0)),
        }
    }

    fn open(&mut self, record: &ProjectRecord) -> ModalId {
        let overlays = Rc::clone(&self.overlays);
        let listeners = Rc::clone(&self.escape_listeners);
        self.state
            .open(record, |_, _| Ok::<_, Infallible>(Probe::new(&overlays, &listeners)))
            .expect("infallible mount")
    }

    /// Escape press followed by the fade-out timer firing.
    fn press_escape(&mut self, id: ModalId) -> bool {
        if !self.state.handle_key(id, "Escape") {
            return false;
        }
        drop(self.state.finish_close(id));
        true
    }
}

fn record(title: &str) -> ProjectRecord {
    ProjectRecord { title: title.to_owned(), ..ProjectRecord::default() }
}

// =============================================================
// View model
// =============================================================

#[test]
fn view_copies_record_fields() {
    let rec = ProjectRecord {
        title: "T".to_owned(),
        description: "D".to_owned(),
        tech: vec!["a".to_owned(), "b".to_owned()],
        features: vec!["f".to_owned()],
        demo_url: Some("https://demo".to_owned()),
        source_url: None,
    };
    let view = ModalView::from_record(&rec);
    assert_eq!(view.title, "T");
    assert_eq!(view.description, "D");
    assert_eq!(view.tech.len(), 2);
    assert_eq!(view.features, vec!["f"]);
    assert_eq!(view.demo, LinkAction::Navigate("https://demo".to_owned()));
    assert_eq!(view.source, LinkAction::Unavailable(Notice::info(NO_SOURCE_URL)));
}

#[test]
fn view_of_default_record_uses_placeholders() {
    let view = ModalView::from_record(&ProjectRecord::default());
    assert_eq!(view.title, "Untitled Project");
    assert!(view.description.is_empty());
    assert!(view.tech.is_empty());
    assert!(view.features.is_empty());
    assert_eq!(view.demo, LinkAction::Unavailable(Notice::info(NO_DEMO_URL)));
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn open_registers_single_instance() {
    let mut h = Harness::new();
    let id = h.open(&record("a"));
    assert!(h.state.is_open());
    assert_eq!(h.state.current_id(), Some(id));
    assert_eq!(h.state.phase(), Some(ModalPhase::Open));
    assert_eq!(h.overlays.get(), 1);
}

#[test]
fn second_open_replaces_first_and_runs_its_cleanup() {
    let mut h = Harness::new();
    let first = h.open(&record("a"));
    let second = h.open(&record("b"));
    assert_ne!(first, second);
    assert_eq!(h.overlays.get(), 1);
    assert_eq!(h.escape_listeners.get(), 1);
    assert_eq!(h.state.view().map(|v| v.title.as_str()), Some("b"));
}

#[test]
fn repeated_opens_never_accumulate_listeners() {
    let mut h = Harness::new();
    for n in 0..10 {
        h.open(&record(&n.to_string()));
    }
    assert_eq!(h.escape_listeners.get(), 1);
}

#[test]
fn close_is_two_phase() {
    let mut h = Harness::new();
    let id = h.open(&record("a"));
    assert!(h.state.request_close(id));
    assert_eq!(h.state.phase(), Some(ModalPhase::Closing));
    assert_eq!(h.overlays.get(), 1, "overlay stays during fade-out");
    assert!(!h.state.request_close(id), "second request is ignored");
    drop(h.state.finish_close(id));
    assert!(!h.state.is_open());
    assert_eq!(h.overlays.get(), 0);
}

#[test]
fn stale_close_timer_does_not_remove_newer_modal() {
    let mut h = Harness::new();
    let first = h.open(&record("a"));
    assert!(h.state.request_close(first));
    let second = h.open(&record("b"));
    assert!(h.state.finish_close(first).is_none());
    assert_eq!(h.state.current_id(), Some(second));
    assert_eq!(h.overlays.get(), 1);
}

#[test]
fn non_escape_keys_are_ignored() {
    let mut h = Harness::new();
    let id = h.open(&record("a"));
    assert!(!h.state.handle_key(id, "Enter"));
    assert!(!h.state.handle_key(id, "Esc"));
    assert_eq!(h.state.phase(), Some(ModalPhase::Open));
}

#[test]
fn failed_mount_leaves_registry_empty() {
    let mut h = Harness::new();
    h.open(&record("a"));
    let result = h.state.open(&record("b"), |_, _| Err::<Probe, _>("boom"));
    assert_eq!(result, Err("boom"));
    assert!(!h.state.is_open());
    assert_eq!(h.overlays.get(), 0);
}

// =============================================================
// End-to-end: tile -> modal -> Escape
// =============================================================

#[test]
fn asteroid_tile_opens_and_escape_tears_down() {
    let catalog = ProjectCatalog::builtin().expect("builtin catalog parses");
    let notifier = RecordingNotifier::default();
    let mut h = Harness::new();

    let id = activate_tile(&catalog, Some("asteroid"), &notifier, |rec| h.open(rec)).expect("opened");
    assert!(notifier.take().is_empty());

    let view = h.state.view().expect("modal open");
    assert_eq!(view.title, "Asteroid Shooter VR");
    assert_eq!(view.tech.len(), 4);
    assert_eq!(view.features.len(), 4);

    assert!(h.press_escape(id));
    assert!(!h.state.is_open());
    assert_eq!(h.overlays.get(), 0);
    assert_eq!(h.escape_listeners.get(), 0);

    assert!(!h.press_escape(id), "second Escape has no effect");
    assert_eq!(h.overlays.get(), 0);
}

#[test]
fn unknown_tile_opens_nothing() {
    let catalog = ProjectCatalog::builtin().expect("builtin catalog parses");
    let notifier = RecordingNotifier::default();
    let mut h = Harness::new();
    assert!(activate_tile(&catalog, Some("missing"), &notifier, |rec| h.open(rec)).is_none());
    assert!(!h.state.is_open());
    assert_eq!(h.overlays.get(), 0);
    assert_eq!(notifier.take().len(), 1);
}
