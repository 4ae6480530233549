//! Toast notices and the notifier seam.
//!
//! Features never render banners themselves; they hand a [`Notice`] to a
//! [`Notifier`]. The browser implementation lives in
//! `components::toast`, tests use a recording notifier.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity of a toast, which picks its accent border and icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Lower-case name used in the `notification-<kind>` class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Font Awesome icon shown at the start of the banner.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "fa-info-circle",
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-triangle",
        }
    }

    /// Full class attribute for the banner element.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// A message waiting to be shown as a toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: ToastKind,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self { message: message.into(), kind }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }
}

/// Sink for user-facing notices. Showing a notice never fails from the
/// caller's point of view.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}
