//! Preference stores backing the theme flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LocalStore` is the only place that touches `window.localStorage`;
//! `MemoryStore` is used where no browser is present.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::UiError;
use crate::state::theme::PreferenceStore;

/// In-process store. Writes never fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`. Reads degrade to `None` when storage is blocked.
#[cfg(feature = "browser")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

#[cfg(feature = "browser")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        window
            .local_storage()?
            .ok_or_else(|| UiError::Dom("localStorage is unavailable".to_owned()))
    }
}

#[cfg(feature = "browser")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage().and_then(|storage| Ok(storage.get_item(key)?)) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("reading preference {key} failed: {err}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        Self::storage()?.set_item(key, value)?;
        Ok(())
    }
}
