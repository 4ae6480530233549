//! Parallax offsets, stagger delays and frame coalescing.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::{BLUR_BASE_SPEED, BLUR_SPEED_STEP, HERO_PARALLAX_SPEED, SKILL_TAG_STAGGER_S};

/// Parallax speed of the `index`-th background blur.
#[must_use]
pub fn blur_speed(index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let index = index as f64;
    BLUR_BASE_SPEED + index * BLUR_SPEED_STEP
}

#[must_use]
pub fn blur_transform(scroll_y: f64, index: usize) -> String {
    format!("translate(0, {}px)", scroll_y * blur_speed(index))
}

#[must_use]
pub fn hero_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * HERO_PARALLAX_SPEED)
}

#[must_use]
pub fn skill_tag_delay(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let index = index as f64;
    format!("{}s", index * SKILL_TAG_STAGGER_S)
}

/// Coalesces scroll events into at most one pending animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled frame as run.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn is_pending(self) -> bool {
        self.pending
    }
}
