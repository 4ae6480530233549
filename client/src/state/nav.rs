//! Navigation highlight and header backdrop rules.
//!
//! Nothing here is stored between scroll ticks: the active section is
//! recomputed from offsets every time, which keeps the page the only source
//! of truth.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{HEADER_ALLOWANCE_PX, NAVBAR_SOLID_THRESHOLD_PX};

/// A `section[id]` and its document offset, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Id of the section the reader is currently in.
///
/// Last-wins scan: the result is the last section, in document order, whose
/// top minus the header allowance is at or above `scroll_y`. `None` before
/// the first threshold.
#[must_use]
pub fn active_section(sections: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - HEADER_ALLOWANCE_PX {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Whether a link with `href` should carry the active marker.
#[must_use]
pub fn link_is_active(href: Option<&str>, current: Option<&str>) -> bool {
    match (href, current) {
        (Some(href), Some(id)) => href.strip_prefix('#') == Some(id),
        _ => false,
    }
}

/// Section id targeted by an in-page anchor, or `None` for ordinary links.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// The two visual states of the fixed header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarBackdrop {
    Resting,
    Scrolled,
}

impl NavbarBackdrop {
    #[must_use]
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > NAVBAR_SOLID_THRESHOLD_PX {
            Self::Scrolled
        } else {
            Self::Resting
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Resting => "rgba(255, 255, 255, 0.15)",
            Self::Scrolled => "rgba(255, 255, 255, 0.2)",
        }
    }

    #[must_use]
    pub fn backdrop_filter(self) -> &'static str {
        match self {
            Self::Resting => "blur(20px)",
            Self::Scrolled => "blur(30px)",
        }
    }
}

/// Mobile menu open/closed flag and the matching toggle glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub const OPEN_ICON: &'static str = "fa-times";
    pub const CLOSED_ICON: &'static str = "fa-bars";

    #[must_use]
    pub fn from_open(open: bool) -> Self {
        Self { open }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn is_open(self) -> bool {
        self.open
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    #[must_use]
    pub fn closed() -> Self {
        Self { open: false }
    }

    /// Icon class to show and the one to remove.
    #[must_use]
    pub fn icon_swap(self) -> (&'static str, &'static str) {
        if self.open {
            (Self::OPEN_ICON, Self::CLOSED_ICON)
        } else {
            (Self::CLOSED_ICON, Self::OPEN_ICON)
        }
    }
}
