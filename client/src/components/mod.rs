//! Page features wired to the existing markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one area of the page and exposes an `init` that attaches
//! its listeners. Modules read the DOM, delegate decisions to `state`, and
//! write the outcome back; none of them depends on another's `init` having
//! run. Missing markup makes an `init` return early with `Ok(())`.

pub mod contact_form;
pub mod modal;
pub mod nav;
pub mod parallax;
pub mod projects;
pub mod resume;
pub mod reveal;
pub mod theme_toggle;
pub mod toast;
pub mod touch;
