//! Simulated contact-form submission.
//!
//! There is no backend. A submission walks the submit button through
//! `Idle -> Sending -> Sent -> Idle` on fixed delays, resets the form and
//! thanks the user. The sequence is written once against small traits so the
//! browser drives it with real timers and tests drive it instantly.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::future::Future;

use crate::consts::{CONTACT_RESTORE_MS, CONTACT_SENDING_MS};
use crate::state::toast::{Notice, Notifier};

pub const SENDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;
pub const SENT_LABEL: &str = r#"<i class="fas fa-check"></i> Message Sent!"#;
pub const SENT_BACKGROUND: &str = "linear-gradient(45deg, #00ff7f, #32cd32)";

pub const FORM_NOT_FOUND: &str = "Contact form not found.";
pub const BUTTON_NOT_FOUND: &str = "Submit button not found.";
pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Sending,
    Sent,
}

/// Everything the submit button shows in one phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonFrame<'a> {
    pub label_html: &'a str,
    pub disabled: bool,
    /// `None` clears any inline background.
    pub background: Option<&'static str>,
}

impl<'a> ButtonFrame<'a> {
    /// Frame for `phase`; `original` is the label captured before sending.
    #[must_use]
    pub fn for_phase(phase: SubmissionPhase, original: &'a str) -> Self {
        match phase {
            SubmissionPhase::Idle => Self { label_html: original, disabled: false, background: None },
            SubmissionPhase::Sending => Self { label_html: SENDING_LABEL, disabled: true, background: None },
            SubmissionPhase::Sent => Self { label_html: SENT_LABEL, disabled: true, background: Some(SENT_BACKGROUND) },
        }
    }
}

pub trait SubmitButton {
    fn label_html(&self) -> String;
    fn is_disabled(&self) -> bool;
    fn render(&self, frame: &ButtonFrame<'_>);
}

pub trait ContactForm {
    type Button: SubmitButton;

    fn submit_button(&self) -> Option<Self::Button>;
    fn reset(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    MissingForm,
    MissingButton,
    /// A previous submission is still on screen.
    InFlight,
}

/// Run one simulated submission to completion.
///
/// `sleep(ms)` supplies the delays. Missing markup is reported through
/// `notifier` and leaves the form untouched.
pub async fn run_submission<F, S, Fut>(form: Option<&F>, notifier: &dyn Notifier, sleep: S) -> SubmissionOutcome
where
    F: ContactForm,
    S: Fn(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    let Some(form) = form else {
        notifier.notify(Notice::error(FORM_NOT_FOUND));
        return SubmissionOutcome::MissingForm;
    };
    let Some(button) = form.submit_button() else {
        notifier.notify(Notice::error(BUTTON_NOT_FOUND));
        return SubmissionOutcome::MissingButton;
    };
    if button.is_disabled() {
        return SubmissionOutcome::InFlight;
    }

    let original = button.label_html();
    button.render(&ButtonFrame::for_phase(SubmissionPhase::Sending, &original));
    sleep(CONTACT_SENDING_MS).await;

    button.render(&ButtonFrame::for_phase(SubmissionPhase::Sent, &original));
    form.reset();
    notifier.notify(Notice::success(SENT_MESSAGE));
    sleep(CONTACT_RESTORE_MS).await;

    button.render(&ButtonFrame::for_phase(SubmissionPhase::Idle, &original));
    SubmissionOutcome::Sent
}

/// Whether a field's parent keeps its `focused` class after blur.
#[must_use]
pub fn keeps_focus_style(value: &str) -> bool {
    !value.is_empty()
}
