//! Stack of modals enforcing focus.
//!
//! Only the most recently opened modal that enforces focus redirects focus-in events. Modals
//! leave the stack in any order.

use std::{
    cell::RefCell,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_TRAP_ID: AtomicU64 = AtomicU64::new(1);

/// Allocates an id unique for the life of the process.
pub fn next_trap_id() -> u64 {
    NEXT_TRAP_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Open focus traps in opening order.
pub struct FocusTrapStack {
    ids: Vec<u64>,
}

impl FocusTrapStack {
    /// Pushes `id` on top, moving it there if it was already present.
    pub fn enter(&mut self, id: u64) {
        self.ids.retain(|open| *open != id);
        self.ids.push(id);
    }

    /// Removes `id` wherever it sits. Unknown ids are ignored.
    pub fn leave(&mut self, id: u64) {
        self.ids.retain(|open| *open != id);
    }

    /// Whether `id` is the topmost trap.
    pub fn is_top(&self, id: u64) -> bool {
        self.ids.last() == Some(&id)
    }

    /// Number of open traps.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no trap is open.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

thread_local! {
    static DOCUMENT_FOCUS_TRAPS: RefCell<FocusTrapStack> = RefCell::new(FocusTrapStack::default());
}

/// Runs `f` against the stack shared by every modal on this thread.
pub fn with_document_traps<R>(f: impl FnOnce(&mut FocusTrapStack) -> R) -> R {
    DOCUMENT_FOCUS_TRAPS.with(|traps| f(&mut traps.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn top_moves_back_when_inner_trap_leaves() {
        let mut traps = FocusTrapStack::default();
        traps.enter(1);
        traps.enter(2);
        assert!(traps.is_top(2));
        assert!(!traps.is_top(1));
        traps.leave(2);
        assert!(traps.is_top(1));
    }

    #[test]
    fn out_of_order_leave_keeps_the_top() {
        let mut traps = FocusTrapStack::default();
        traps.enter(1);
        traps.enter(2);
        traps.enter(3);
        traps.leave(2);
        assert!(traps.is_top(3));
        assert_eq!(traps.len(), 2);
        traps.leave(9);
        traps.leave(3);
        traps.leave(1);
        assert!(traps.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(next_trap_id(), next_trap_id());
    }
}
