//! Feature stylesheets and idempotent injection.
//!
//! Toasts and the project modal ship their own CSS. Each sheet is keyed by
//! an element id, and [`ensure_stylesheet`] inserts it only when no element
//! with that id exists yet, however many times it is called.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

use crate::error::UiError;

/// A `<style>` block identified by its element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    pub id: &'static str,
    pub css: &'static str,
}

/// Something that can hold identified stylesheets (the document head).
pub trait StyleHost {
    fn has_style(&self, id: &str) -> bool;

    /// # Errors
    ///
    /// Returns an error when the host refuses the insertion.
    fn insert_style(&self, sheet: &StyleSheet) -> Result<(), UiError>;
}

/// Insert `sheet` unless it is already present. Returns whether it inserted.
///
/// # Errors
///
/// Propagates the host's insertion failure.
pub fn ensure_stylesheet(host: &dyn StyleHost, sheet: &StyleSheet) -> Result<bool, UiError> {
    if host.has_style(sheet.id) {
        return Ok(false);
    }
    host.insert_style(sheet)?;
    Ok(true)
}

#[cfg(feature = "browser")]
impl StyleHost for web_sys::Document {
    fn has_style(&self, id: &str) -> bool {
        self.get_element_by_id(id).is_some()
    }

    fn insert_style(&self, sheet: &StyleSheet) -> Result<(), UiError> {
        let head = self.head().ok_or(UiError::NoDocument)?;
        let style = self.create_element("style")?;
        style.set_id(sheet.id);
        style.set_text_content(Some(sheet.css));
        head.append_child(&style)?;
        Ok(())
    }
}

pub const TOAST_STYLES: StyleSheet = StyleSheet {
    id: "notification-styles",
    css: r"
.notification {
    position: fixed;
    top: 100px;
    right: 2rem;
    background: var(--glass-white);
    backdrop-filter: blur(20px);
    border: 1px solid var(--glass-border);
    border-radius: 12px;
    padding: 1rem 1.5rem;
    color: white;
    display: flex;
    align-items: center;
    gap: 1rem;
    z-index: 3000;
    animation: slideInRight 0.3s ease;
    min-width: 300px;
    box-shadow: var(--shadow-glass);
}
.notification-success { border-left: 4px solid #00ff7f; }
.notification-error { border-left: 4px solid #ff4757; }
.notification button { background: none; border: none; color: white; cursor: pointer; padding: 0.25rem; border-radius: 50%; width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; }
.notification button:hover { background: rgba(255, 255, 255, 0.12); }
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@media (max-width: 600px) {
    .notification { right: 1rem; left: 1rem; min-width: auto; }
}
",
};

pub const MODAL_STYLES: StyleSheet = StyleSheet {
    id: "modal-styles",
    css: r"
.project-modal {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.8);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 2000;
    animation: fadeIn 0.25s ease forwards;
}
.modal-content {
    max-width: 720px;
    width: calc(100% - 3rem);
    max-height: 80vh;
    overflow-y: auto;
    margin: 2rem;
    padding: 2rem;
    position: relative;
    animation: slideIn 0.25s ease forwards;
    background: rgba(10, 10, 12, 0.45);
    border-radius: 12px;
    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(8px);
}
.modal-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: none;
    border: none;
    color: white;
    font-size: 1.2rem;
    cursor: pointer;
    width: 40px;
    height: 40px;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: all 0.2s ease;
}
.modal-close:hover { background: rgba(255, 255, 255, 0.06); color: var(--primary-gold); }
.project-description { color: rgba(255, 255, 255, 0.9); line-height: 1.6; margin-bottom: 1rem; }
.project-tech, .project-features { margin-bottom: 1rem; }
.project-tech h3, .project-features h3 { color: var(--primary-aqua); margin-bottom: 0.5rem; font-size: 1.05rem; }
.tech-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 0.5rem; }
.tech-tag { background: var(--glass-white); border: 1px solid var(--glass-border); padding: 0.4rem 0.8rem; border-radius: 10px; color: var(--primary-gold); font-size: 0.9rem; }
.project-features ul { list-style: none; padding-left: 0; }
.project-features li { color: rgba(255, 255, 255, 0.85); margin-bottom: 0.45rem; padding-left: 1.4rem; position: relative; }
.project-features li::before { content: '\25B6'; color: var(--primary-gold); position: absolute; left: 0; }
.modal-actions { display: flex; gap: 1rem; flex-wrap: wrap; margin-top: 1rem; }
.btn-primary, .btn-secondary { padding: 0.75rem 1.2rem; border: none; border-radius: 12px; cursor: pointer; font-weight: 600; transition: all 0.18s ease; min-width: 140px; }
.btn-primary { background: linear-gradient(45deg, var(--primary-gold), #ffed4e); color: var(--dark-navy); }
.btn-secondary { background: var(--glass-white); color: white; border: 1px solid var(--glass-border); }
.btn-primary:hover, .btn-secondary:hover { transform: translateY(-2px); box-shadow: 0 8px 25px rgba(0, 0, 0, 0.35); }
@keyframes fadeIn { from { opacity: 0 } to { opacity: 1 } }
@keyframes slideIn { from { transform: translateY(-30px); opacity: 0 } to { transform: translateY(0); opacity: 1 } }
@keyframes fadeOut { from { opacity: 1 } to { opacity: 0 } }
@media (max-width: 600px) {
    .modal-content { margin: 1rem; padding: 1rem; }
    .modal-actions { flex-direction: column; }
    .btn-primary, .btn-secondary { width: 100%; min-width: auto; }
}
",
};
