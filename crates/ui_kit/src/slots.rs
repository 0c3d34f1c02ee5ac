//! Replaceable render slots.

use leptos::{ev::MouseEvent, Callback, View};

/// Caller-supplied renderer replacing a default sub-element.
pub type RenderSlot<P> = Callback<P, View>;

#[derive(Clone)]
/// Props handed to a custom modal backdrop.
pub struct BackdropSlotProps {
    /// Resolved backdrop class attribute.
    pub class: String,
    /// Click handler that applies the backdrop-close rules.
    pub on_click: Callback<MouseEvent>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Props handed to a custom select dropdown icon.
pub struct IconSlotProps {
    /// Resolved icon class attribute.
    pub class: String,
    /// Menu open state at render time.
    pub open: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Props handed to custom checkbox glyphs.
pub struct CheckboxIconProps {
    /// Resolved box class attribute.
    pub class: String,
    /// Whether the control is disabled.
    pub disabled: bool,
}
