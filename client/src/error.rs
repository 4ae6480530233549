//! Error type shared by every initializer.
//!
//! Missing markup is not an error (features quietly stand down) and missing
//! data is reported through toasts, so `UiError` only covers the cases where
//! the browser itself refused an operation or embedded data was malformed.

/// Failure raised while wiring or driving a page feature.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// `window` is not reachable (not running in a browser main thread).
    #[error("browser window is unavailable")]
    NoWindow,
    /// `window.document` (or its body/head) is not reachable.
    #[error("document is unavailable")]
    NoDocument,
    /// A DOM or Web API call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),
    /// The inline site config could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    /// The embedded project catalog is malformed.
    #[error("invalid project catalog: {0}")]
    Catalog(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}
