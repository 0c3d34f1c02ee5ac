//! Controlled/uncontrolled ownership of a single piece of component state.

#[derive(Debug, Clone, PartialEq, Eq)]
/// A value owned either by the caller (controlled) or by the component (uncontrolled).
///
/// The variant is resolved once per update cycle through [`Controllable::sync`]. While
/// [`Controllable::Controlled`] is active, user-driven mutations never change the mirrored value;
/// they are only reported to the caller, which is expected to feed the new value back in.
pub enum Controllable<T> {
    /// The caller owns the value; the component mirrors the last supplied prop.
    Controlled(T),
    /// The component owns the value.
    Uncontrolled(T),
}

impl<T: Clone + PartialEq> Controllable<T> {
    /// Resolves the initial ownership: `value` if defined, else `default_value`, else `empty`.
    pub fn new(value: Option<T>, default_value: Option<T>, empty: T) -> Self {
        match value {
            Some(value) => Self::Controlled(value),
            None => Self::Uncontrolled(default_value.unwrap_or(empty)),
        }
    }

    /// Returns the resolved current value.
    pub fn get(&self) -> &T {
        match self {
            Self::Controlled(value) | Self::Uncontrolled(value) => value,
        }
    }

    /// Returns whether the caller currently owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled(_))
    }

    /// One-way prop sync, run on every render pass.
    ///
    /// A defined external value always overwrites the mirror. When the external value becomes
    /// undefined, the last mirrored value seeds internal ownership.
    pub fn sync(&mut self, external: Option<T>) {
        match (external, &*self) {
            (Some(value), _) => *self = Self::Controlled(value),
            (None, Self::Controlled(last)) => *self = Self::Uncontrolled(last.clone()),
            (None, Self::Uncontrolled(_)) => {}
        }
    }

    /// Applies a user-driven mutation and reports whether the resolved value changed.
    ///
    /// Controlled values are left untouched.
    pub fn commit(&mut self, next: T) -> bool {
        match self {
            Self::Controlled(_) => false,
            Self::Uncontrolled(current) => {
                if *current == next {
                    return false;
                }
                *current = next;
                true
            }
        }
    }

    /// Replaces the value regardless of ownership. Only used for silent internal resets.
    pub(crate) fn force(&mut self, next: T) {
        match self {
            Self::Controlled(current) | Self::Uncontrolled(current) => *current = next,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initialization_prefers_value_then_default_then_empty() {
        assert_eq!(
            Controllable::new(Some(3), Some(2), 0),
            Controllable::Controlled(3)
        );
        assert_eq!(
            Controllable::new(None, Some(2), 0),
            Controllable::Uncontrolled(2)
        );
        assert_eq!(Controllable::new(None, None, 0), Controllable::Uncontrolled(0));
    }

    #[test]
    fn defined_zero_value_is_not_treated_as_missing() {
        let state = Controllable::new(Some(0), Some(5), 9);
        assert_eq!(*state.get(), 0);
        assert!(state.is_controlled());
    }

    #[test]
    fn controlled_commit_is_ignored_and_sync_overwrites() {
        let mut state = Controllable::new(Some("x".to_string()), None, String::new());
        assert!(!state.commit("typed".to_string()));
        assert_eq!(state.get(), "x");

        state.sync(Some("y".to_string()));
        assert_eq!(state.get(), "y");
    }

    #[test]
    fn dropping_external_value_keeps_last_mirror_as_seed() {
        let mut state = Controllable::new(Some(7), None, 0);
        state.sync(None);
        assert_eq!(state, Controllable::Uncontrolled(7));
        assert!(state.commit(8));
        assert_eq!(*state.get(), 8);
    }

    #[test]
    fn uncontrolled_commit_reports_change_only_when_value_differs() {
        let mut state = Controllable::new(None, None, false);
        assert!(!state.commit(false));
        assert!(state.commit(true));
    }
}
