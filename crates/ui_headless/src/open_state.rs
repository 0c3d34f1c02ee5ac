//! Open/close state machine shared by the select menu and other disclosure surfaces.

use crate::controllable::Controllable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Notification emitted by an accepted transition.
pub enum OpenTransition {
    /// `on_open` must be invoked.
    Opened,
    /// `on_close` must be invoked.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `Closed`/`Open` machine with optional external ownership of the open bit.
///
/// In controlled mode accepted transitions still report their notification but leave the bit
/// alone; the caller feeds the new value back through [`OpenState::sync`].
pub struct OpenState {
    open: Controllable<bool>,
    disabled: bool,
}

impl OpenState {
    /// Creates a machine; `controlled_open` selects controlled ownership when defined.
    pub fn new(controlled_open: Option<bool>, disabled: bool) -> Self {
        let mut state = Self {
            open: Controllable::new(controlled_open, None, false),
            disabled: false,
        };
        state.set_disabled(disabled);
        state
    }

    /// Resolved open bit.
    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    /// Whether transitions are currently rejected.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the caller owns the open bit.
    pub fn is_controlled(&self) -> bool {
        self.open.is_controlled()
    }

    /// Prop sync for the external flag and the disabled state.
    pub fn sync(&mut self, controlled_open: Option<bool>, disabled: bool) {
        self.open.sync(controlled_open);
        self.set_disabled(disabled);
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && !self.open.is_controlled() {
            self.open.force(false);
        }
    }

    /// `Closed -> Open`.
    pub fn open(&mut self) -> Option<OpenTransition> {
        if self.disabled || self.is_open() {
            return None;
        }
        self.open.commit(true);
        Some(OpenTransition::Opened)
    }

    /// `Open -> Closed`.
    pub fn close(&mut self) -> Option<OpenTransition> {
        if self.disabled || !self.is_open() {
            return None;
        }
        self.open.commit(false);
        Some(OpenTransition::Closed)
    }

    /// Inverts the resolved bit.
    pub fn toggle(&mut self) -> Option<OpenTransition> {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    /// Escape-key close, honored only while open and when `close_on_escape` is enabled.
    pub fn escape(&mut self, close_on_escape: bool) -> Option<OpenTransition> {
        if !close_on_escape {
            return None;
        }
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn uncontrolled_toggle_flips_and_notifies() {
        let mut state = OpenState::new(None, false);
        assert_eq!(state.toggle(), Some(OpenTransition::Opened));
        assert!(state.is_open());
        assert_eq!(state.toggle(), Some(OpenTransition::Closed));
        assert!(!state.is_open());
    }

    #[test]
    fn controlled_transition_notifies_without_flipping() {
        let mut state = OpenState::new(Some(false), false);
        assert_eq!(state.open(), Some(OpenTransition::Opened));
        assert!(!state.is_open());

        state.sync(Some(true), false);
        assert!(state.is_open());
        assert_eq!(state.close(), Some(OpenTransition::Closed));
        assert!(state.is_open());
    }

    #[test]
    fn disabled_rejects_every_transition() {
        let mut state = OpenState::new(Some(true), true);
        assert_eq!(state.toggle(), None);
        assert_eq!(state.open(), None);
        assert_eq!(state.close(), None);
        assert_eq!(state.escape(true), None);
    }

    #[test]
    fn disabling_an_open_uncontrolled_menu_closes_it_silently() {
        let mut state = OpenState::new(None, false);
        let _ = state.open();
        state.sync(None, true);
        assert!(!state.is_open());
    }

    #[test]
    fn escape_requires_open_state_and_flag() {
        let mut state = OpenState::new(None, false);
        assert_eq!(state.escape(true), None);
        let _ = state.open();
        assert_eq!(state.escape(false), None);
        assert_eq!(state.escape(true), Some(OpenTransition::Closed));
    }
}
