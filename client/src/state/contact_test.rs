use std::cell::RefCell;
use std::future::{Ready, ready};
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::state::toast::ToastKind;
use crate::test_support::RecordingNotifier;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Rendered {
    label: String,
    disabled: bool,
    background: Option<&'static str>,
}

#[derive(Clone)]
struct FakeButton {
    label: Rc<RefCell<String>>,
    disabled: Rc<RefCell<bool>>,
    history: Rc<RefCell<Vec<Rendered>>>,
}

impl SubmitButton for FakeButton {
    fn label_html(&self) -> String {
        self.label.borrow().clone()
    }

    fn is_disabled(&self) -> bool {
        *self.disabled.borrow()
    }

    fn render(&self, frame: &ButtonFrame<'_>) {
        *self.label.borrow_mut() = frame.label_html.to_owned();
        *self.disabled.borrow_mut() = frame.disabled;
        self.history.borrow_mut().push(Rendered {
            label: frame.label_html.to_owned(),
            disabled: frame.disabled,
            background: frame.background,
        });
    }
}

struct FakeForm {
    fields: RefCell<Vec<String>>,
    button: Option<FakeButton>,
}

impl FakeForm {
    fn new(with_button: bool) -> Self {
        let button = with_button.then(|| FakeButton {
            label: Rc::new(RefCell::new("Send Message".to_owned())),
            disabled: Rc::new(RefCell::new(false)),
            history: Rc::new(RefCell::new(Vec::new())),
        });
        Self { fields: RefCell::new(vec!["Ada".to_owned(), "ada@example.com".to_owned(), "Hi".to_owned()]), button }
    }
}

impl ContactForm for FakeForm {
    type Button = FakeButton;

    fn submit_button(&self) -> Option<FakeButton> {
        self.button.clone()
    }

    fn reset(&self) {
        for field in self.fields.borrow_mut().iter_mut() {
            field.clear();
        }
    }
}

fn instant(delays: &RefCell<Vec<u32>>) -> impl Fn(u32) -> Ready<()> + '_ {
    move |ms| {
        delays.borrow_mut().push(ms);
        ready(())
    }
}

#[test]
fn full_submission_walks_all_phases() {
    let form = FakeForm::new(true);
    let notifier = RecordingNotifier::default();
    let delays = RefCell::new(Vec::new());

    let outcome = block_on(run_submission(Some(&form), &notifier, instant(&delays)));

    assert_eq!(outcome, SubmissionOutcome::Sent);
    assert_eq!(*delays.borrow(), vec![1_400, 3_000]);
    assert!(form.fields.borrow().iter().all(String::is_empty));

    let button = form.button.as_ref().expect("button");
    let history = button.history.borrow();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0], Rendered { label: SENDING_LABEL.to_owned(), disabled: true, background: None });
    assert_eq!(
        history[1],
        Rendered { label: SENT_LABEL.to_owned(), disabled: true, background: Some(SENT_BACKGROUND) }
    );
    assert_eq!(history[2], Rendered { label: "Send Message".to_owned(), disabled: false, background: None });

    let notices = notifier.take();
    assert_eq!(notices, vec![Notice::success(SENT_MESSAGE)]);
}

#[test]
fn missing_button_toasts_and_leaves_fields_alone() {
    let form = FakeForm::new(false);
    let notifier = RecordingNotifier::default();
    let delays = RefCell::new(Vec::new());

    let outcome = block_on(run_submission(Some(&form), &notifier, instant(&delays)));

    assert_eq!(outcome, SubmissionOutcome::MissingButton);
    assert_eq!(*form.fields.borrow(), vec!["Ada", "ada@example.com", "Hi"]);
    assert!(delays.borrow().is_empty());
    let notices = notifier.take();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, ToastKind::Error);
    assert_eq!(notices[0].message, "Submit button not found.");
}

#[test]
fn missing_form_toasts() {
    let notifier = RecordingNotifier::default();
    let delays = RefCell::new(Vec::new());
    let outcome = block_on(run_submission(None::<&FakeForm>, &notifier, instant(&delays)));
    assert_eq!(outcome, SubmissionOutcome::MissingForm);
    assert_eq!(notifier.take(), vec![Notice::error(FORM_NOT_FOUND)]);
}

#[test]
fn disabled_button_means_submission_in_flight() {
    let form = FakeForm::new(true);
    if let Some(button) = &form.button {
        *button.disabled.borrow_mut() = true;
    }
    let notifier = RecordingNotifier::default();
    let delays = RefCell::new(Vec::new());
    let outcome = block_on(run_submission(Some(&form), &notifier, instant(&delays)));
    assert_eq!(outcome, SubmissionOutcome::InFlight);
    assert!(notifier.take().is_empty());
    assert_eq!(form.fields.borrow()[0], "Ada");
}

#[test]
fn idle_frame_restores_original_label() {
    let frame = ButtonFrame::for_phase(SubmissionPhase::Idle, "<b>Send</b>");
    assert_eq!(frame.label_html, "<b>Send</b>");
    assert!(!frame.disabled);
    assert_eq!(frame.background, None);
}

#[test]
fn focus_style_kept_only_for_filled_fields() {
    assert!(keeps_focus_style("x"));
    assert!(!keeps_focus_style(""));
}
