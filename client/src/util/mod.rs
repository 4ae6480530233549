//! Utility helpers shared across page features.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, DOM
//! lookups, timers, stylesheets) from the feature logic in `state`.

#[cfg(feature = "browser")]
pub mod debounce;
#[cfg(feature = "browser")]
pub mod dom;
pub mod motion;
pub mod resume;
pub mod storage;
pub mod styles;
