//! Modal capability
//!
//! The submission flow closes its modal once a record is acknowledged. It only
//! needs to open, close and query modals by id, so that is all this trait
//! exposes; the browser implementation lives in `ui::common::modal`.

use std::cell::RefCell;
use std::collections::BTreeSet;

/// Identifier of a modal dialog (its DOM id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalId(&'static str);

impl ModalId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ModalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Open/close/query access to modal dialogs
pub trait ModalController {
    fn open(&self, id: ModalId);

    fn close(&self, id: ModalId);

    fn is_open(&self, id: ModalId) -> bool;
}

impl<M: ModalController + ?Sized> ModalController for &M {
    fn open(&self, id: ModalId) {
        (**self).open(id)
    }

    fn close(&self, id: ModalId) {
        (**self).close(id)
    }

    fn is_open(&self, id: ModalId) -> bool {
        (**self).is_open(id)
    }
}

/// Set of open modals kept in memory
#[derive(Debug, Default)]
pub struct ModalSet {
    open: RefCell<BTreeSet<ModalId>>,
}

impl ModalSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModalController for ModalSet {
    fn open(&self, id: ModalId) {
        self.open.borrow_mut().insert(id);
    }

    fn close(&self, id: ModalId) {
        self.open.borrow_mut().remove(&id);
    }

    fn is_open(&self, id: ModalId) -> bool {
        self.open.borrow().contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B2C: ModalId = ModalId::new("b2cModal");
    const B2B: ModalId = ModalId::new("b2bModal");

    #[test]
    fn test_open_close() {
        let modals = ModalSet::new();
        assert!(!modals.is_open(B2C));

        modals.open(B2C);
        assert!(modals.is_open(B2C));
        assert!(!modals.is_open(B2B));

        modals.close(B2C);
        assert!(!modals.is_open(B2C));
    }

    #[test]
    fn test_close_unopened_is_noop() {
        let modals = ModalSet::new();
        modals.close(B2B);
        assert!(!modals.is_open(B2B));
        assert!(!modals.is_open(B2C));
    }

    #[test]
    fn test_open_is_idempotent() {
        let modals = ModalSet::new();
        modals.open(B2C);
        modals.open(B2C);
        assert!(modals.is_open(B2C));

        // one close undoes any number of opens
        modals.close(B2C);
        assert!(!modals.is_open(B2C));
    }

    #[test]
    fn test_control_through_reference() {
        let modals = ModalSet::new();
        let controller = &modals;

        controller.open(B2B);
        assert!(modals.is_open(B2B));
        assert!(controller.is_open(B2B));
        controller.close(B2B);
        assert!(!modals.is_open(B2B));
    }

    #[test]
    fn test_display() {
        assert_eq!(B2C.to_string(), "b2cModal");
    }
}
