//! Browser-independent state and rules for each page feature.
//!
//! DESIGN
//! ======
//! Every decision a feature makes (which section is active, what the modal
//! shows, how a submission proceeds) lives here as plain Rust so it runs
//! under native `cargo test`. The `components` layer only reads the page,
//! calls into these modules and writes the result back.

pub mod contact;
pub mod modal;
pub mod nav;
pub mod projects;
pub mod theme;
pub mod toast;
