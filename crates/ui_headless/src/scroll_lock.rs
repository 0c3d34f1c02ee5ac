//! Reference-counted document scroll lock.
//!
//! Several open modals may each request a lock. The document is locked on the first request and
//! restored only when the last holder releases it.

use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Host-visible change produced by a lock request or release.
pub enum ScrollLockChange {
    /// First holder: the host must save the current overflow and hide it.
    Engage,
    /// Last holder left: the host must restore the saved overflow.
    Restore,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Holder counter. The host owns the actual style mutation.
pub struct ScrollLock {
    holders: usize,
}

impl ScrollLock {
    /// Number of active holders.
    pub fn holders(&self) -> usize {
        self.holders
    }

    /// Whether the document is currently locked.
    pub fn is_engaged(&self) -> bool {
        self.holders > 0
    }

    /// Registers a holder.
    pub fn acquire(&mut self) -> Option<ScrollLockChange> {
        self.holders += 1;
        (self.holders == 1).then_some(ScrollLockChange::Engage)
    }

    /// Drops a holder. Releasing with no holders is ignored.
    pub fn release(&mut self) -> Option<ScrollLockChange> {
        if self.holders == 0 {
            return None;
        }
        self.holders -= 1;
        (self.holders == 0).then_some(ScrollLockChange::Restore)
    }
}

thread_local! {
    static DOCUMENT_SCROLL_LOCK: RefCell<ScrollLock> = RefCell::new(ScrollLock::default());
}

/// Runs `f` against the lock shared by every modal on this thread.
pub fn with_document_lock<R>(f: impl FnOnce(&mut ScrollLock) -> R) -> R {
    DOCUMENT_SCROLL_LOCK.with(|lock| f(&mut lock.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nested_holders_restore_only_after_last_release() {
        let mut lock = ScrollLock::default();
        assert_eq!(lock.acquire(), Some(ScrollLockChange::Engage));
        assert_eq!(lock.acquire(), None);
        assert_eq!(lock.release(), None);
        assert!(lock.is_engaged());
        assert_eq!(lock.release(), Some(ScrollLockChange::Restore));
        assert_eq!(lock.release(), None);
        assert_eq!(lock.holders(), 0);
    }
}
