//! Boolean and text value machines for checkboxes, switches, and text fields.

use crate::controllable::Controllable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native checkbox properties to write back after a change event.
pub struct NativeToggle {
    /// Resolved checked flag.
    pub checked: bool,
    /// Indeterminate flag from props.
    pub indeterminate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Checked-state machine for checkbox and switch controls.
pub struct ToggleState {
    checked: Controllable<bool>,
    disabled: bool,
}

impl ToggleState {
    /// Creates the machine from the `checked`/`default_checked` pair.
    pub fn new(checked: Option<bool>, default_checked: bool, disabled: bool) -> Self {
        Self {
            checked: Controllable::new(checked, Some(default_checked), false),
            disabled,
        }
    }

    /// Resolved checked state.
    pub fn is_checked(&self) -> bool {
        *self.checked.get()
    }

    /// Whether the caller owns the checked state.
    pub fn is_controlled(&self) -> bool {
        self.checked.is_controlled()
    }

    /// Prop sync.
    pub fn sync(&mut self, checked: Option<bool>, disabled: bool) {
        self.checked.sync(checked);
        self.disabled = disabled;
    }

    /// User toggle. Returns the requested value for `on_change`, or `None` when disabled.
    pub fn toggle(&mut self) -> Option<bool> {
        let next = !self.is_checked();
        self.request(next)
    }

    /// Properties the native input must carry once a change event has been handled. A click
    /// flips the browser's `checked` and clears `indeterminate` whoever owns the state.
    pub fn native(&self, indeterminate: bool) -> NativeToggle {
        NativeToggle {
            checked: self.is_checked(),
            indeterminate,
        }
    }

    /// Native `change` event carrying the browser's new checked flag.
    pub fn request(&mut self, next: bool) -> Option<bool> {
        if self.disabled {
            return None;
        }
        self.checked.commit(next);
        Some(next)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Text value and focus machine for text fields.
pub struct TextState {
    value: Controllable<String>,
    focused: bool,
    disabled: bool,
}

impl TextState {
    /// Creates the machine from the `value`/`default_value` pair.
    pub fn new(value: Option<String>, default_value: Option<String>, disabled: bool) -> Self {
        Self {
            value: Controllable::new(value, default_value, String::new()),
            focused: false,
            disabled,
        }
    }

    /// Resolved text.
    pub fn value(&self) -> &str {
        self.value.get()
    }

    /// Whether the caller owns the text.
    pub fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    /// Focus flag, owned internally.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Prop sync.
    pub fn sync(&mut self, value: Option<String>, disabled: bool) {
        self.value.sync(value);
        self.disabled = disabled;
        if disabled {
            self.focused = false;
        }
    }

    /// Native `input` event. Returns the text to report through `on_change`.
    pub fn input(&mut self, next: String) -> Option<String> {
        if self.disabled {
            return None;
        }
        self.value.commit(next.clone());
        Some(next)
    }

    /// Focus gained.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Focus lost.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// The floating label shrinks while focused or non-empty.
    pub fn shrink_label(&self) -> bool {
        self.focused || !self.value().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Glyph shown inside the checkbox box.
pub enum CheckboxGlyph {
    /// Partially-selected dash.
    Indeterminate,
    /// Check mark.
    Checked,
    /// Empty box (or the caller's unchecked icon).
    Unchecked,
}

/// Indeterminate wins over checked, checked over unchecked.
pub fn checkbox_glyph(checked: bool, indeterminate: bool) -> CheckboxGlyph {
    if indeterminate {
        CheckboxGlyph::Indeterminate
    } else if checked {
        CheckboxGlyph::Checked
    } else {
        CheckboxGlyph::Unchecked
    }
}
