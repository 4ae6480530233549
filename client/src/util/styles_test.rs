use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct FakeHead {
    inserted: RefCell<Vec<&'static str>>,
}

impl StyleHost for FakeHead {
    fn has_style(&self, id: &str) -> bool {
        self.inserted.borrow().iter().any(|inserted| *inserted == id)
    }

    fn insert_style(&self, sheet: &StyleSheet) -> Result<(), UiError> {
        self.inserted.borrow_mut().push(sheet.id);
        Ok(())
    }
}

#[test]
fn ensure_inserts_once() {
    let head = FakeHead::default();
    assert!(ensure_stylesheet(&head, &TOAST_STYLES).expect("insert"));
    for _ in 0..5 {
        assert!(!ensure_stylesheet(&head, &TOAST_STYLES).expect("no-op"));
    }
    assert_eq!(*head.inserted.borrow(), vec!["notification-styles"]);
}

#[test]
fn distinct_sheets_are_tracked_separately() {
    let head = FakeHead::default();
    ensure_stylesheet(&head, &TOAST_STYLES).expect("toast");
    ensure_stylesheet(&head, &MODAL_STYLES).expect("modal");
    ensure_stylesheet(&head, &MODAL_STYLES).expect("modal again");
    assert_eq!(*head.inserted.borrow(), vec!["notification-styles", "modal-styles"]);
}

#[test]
fn modal_sheet_defines_close_animation() {
    assert!(MODAL_STYLES.css.contains("@keyframes fadeOut"));
    assert!(TOAST_STYLES.css.contains("@keyframes slideInRight"));
}
