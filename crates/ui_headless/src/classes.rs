//! Pure class resolvers mapping resolved props and state to ordered semantic class keys.
//!
//! Resolvers never produce concrete CSS class names. They emit semantic keys (for example
//! `button--contained-primary`) that the styling collaborator maps to real classes through a
//! [`ClassMap`]. Caller-supplied extra classes are carried separately and passed through verbatim.

use std::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};

use crate::tokens::{ButtonVariant, Color, FieldSize, FieldVariant, LabelPlacement, Size};

/// Default prefix applied to semantic keys without an explicit override.
pub const DEFAULT_CLASS_PREFIX: &str = "ui-";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered semantic class keys for one visual slot.
pub struct ClassList {
    keys: Vec<String>,
    extra: Option<String>,
}

impl ClassList {
    fn new(base: &str) -> Self {
        Self {
            keys: vec![base.to_string()],
            extra: None,
        }
    }

    fn push(&mut self, key: impl Into<String>) {
        self.keys.push(key.into());
    }

    fn push_if(&mut self, condition: bool, key: impl Into<String>) {
        if condition {
            self.push(key);
        }
    }

    /// Appends a caller-supplied class string that bypasses the [`ClassMap`].
    pub fn with_extra(mut self, extra: Option<&str>) -> Self {
        self.extra = extra
            .map(str::trim)
            .filter(|extra| !extra.is_empty())
            .map(str::to_string);
        self
    }

    /// Semantic keys in resolution order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns whether the list contains `key`.
    pub fn has(&self, key: &str) -> bool {
        self.keys.iter().any(|candidate| candidate == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Mapping from semantic class keys to concrete class names.
pub struct ClassMap {
    /// Prefix prepended to keys without an override.
    pub prefix: String,
    /// Explicit per-key class names (for example generated CSS-module names).
    pub overrides: BTreeMap<String, String>,
}

impl Default for ClassMap {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_CLASS_PREFIX.to_string(),
            overrides: BTreeMap::new(),
        }
    }
}

impl ClassMap {
    /// Concrete class name for one semantic key.
    pub fn class_for<'a>(&'a self, key: &str) -> Cow<'a, str> {
        match self.overrides.get(key) {
            Some(class) => Cow::Borrowed(class.as_str()),
            None => Cow::Owned(format!("{}{key}", self.prefix)),
        }
    }

    /// Renders a class list into a space-separated `class` attribute value.
    pub fn render(&self, list: &ClassList) -> String {
        let mut classes: Vec<Cow<'_, str>> =
            list.keys.iter().map(|key| self.class_for(key)).collect();
        if let Some(extra) = list.extra.as_deref() {
            classes.push(Cow::Borrowed(extra));
        }
        classes.join(" ")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Inputs for [`button_classes`].
pub struct ButtonClassInput {
    /// Fill style.
    pub variant: ButtonVariant,
    /// Size token.
    pub size: Size,
    /// Color scheme.
    pub color: Color,
}

/// `[button, size, variant, variant-color]`.
pub fn button_classes(input: ButtonClassInput) -> ClassList {
    let mut list = ClassList::new("button");
    list.push(format!("button--{}", input.size.token()));
    list.push(format!("button--{}", input.variant.token()));
    list.push(format!(
        "button--{}-{}",
        input.variant.token(),
        input.color.token()
    ));
    list
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Inputs for the checkbox resolvers.
pub struct CheckboxClassInput {
    /// Size token.
    pub size: Size,
    /// Color scheme, replaced by `error` while in error state.
    pub color: Color,
    /// Label position.
    pub label_placement: LabelPlacement,
    /// Resolved checked state.
    pub checked: bool,
    /// Indeterminate flag.
    pub indeterminate: bool,
    /// Validation error flag.
    pub error: bool,
    /// Disabled flag.
    pub disabled: bool,
    /// Required flag.
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Class lists for every checkbox slot.
pub struct CheckboxClasses {
    /// Outer container.
    pub container: ClassList,
    /// Visual box.
    pub control: ClassList,
    /// Label text.
    pub label: ClassList,
    /// Helper text.
    pub helper_text: ClassList,
}

/// Checkbox slots. Error replaces the color key on the box; both never appear together.
pub fn checkbox_classes(input: CheckboxClassInput) -> CheckboxClasses {
    let mut container = ClassList::new("checkbox");
    container.push(format!(
        "checkbox--placement-{}",
        input.label_placement.token()
    ));
    container.push_if(input.disabled, "checkbox--disabled");
    container.push_if(input.error, "checkbox--error");

    let mut control = ClassList::new("checkbox__box");
    control.push(format!("checkbox__box--{}", input.size.token()));
    let color = if input.error {
        Color::Error
    } else {
        input.color
    };
    control.push(format!("checkbox__box--{}", color.token()));
    control.push_if(input.checked, "checkbox__box--checked");
    control.push_if(input.indeterminate, "checkbox__box--indeterminate");

    let mut label = ClassList::new("checkbox__label");
    label.push(format!("checkbox__label--{}", input.size.token()));
    label.push_if(input.required, "checkbox__label--required");

    CheckboxClasses {
        container,
        control,
        label,
        helper_text: ClassList::new("checkbox__helper-text"),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Inputs for the switch resolvers.
pub struct SwitchClassInput {
    /// Size token.
    pub size: Size,
    /// Color scheme, only meaningful while checked and not in error.
    pub color: Color,
    /// Label position.
    pub label_placement: LabelPlacement,
    /// Resolved checked state.
    pub checked: bool,
    /// Validation error flag.
    pub error: bool,
    /// Disabled flag.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Class lists for every switch slot.
pub struct SwitchClasses {
    /// Wrapper around label, control, and helper text.
    pub container: ClassList,
    /// Switch track/thumb control.
    pub control: ClassList,
    /// Helper text.
    pub helper_text: ClassList,
}

/// Switch slots. The color key is emitted only while `checked && !error`.
pub fn switch_classes(input: SwitchClassInput) -> SwitchClasses {
    let mut control = ClassList::new("switch");
    control.push(format!("switch--{}", input.size.token()));
    control.push_if(
        input.checked && !input.error,
        format!("switch--{}", input.color.token()),
    );
    control.push_if(input.error, "switch--error");
    control.push_if(input.disabled, "switch--disabled");

    let mut container = ClassList::new("switch-field");
    container.push(format!(
        "switch-field--{}",
        input.label_placement.token()
    ));

    let mut helper_text = ClassList::new("switch-field__helper-text");
    helper_text.push_if(input.error, "switch-field__helper-text--error");

    SwitchClasses {
        container,
        control,
        helper_text,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Inputs for the text field resolvers.
pub struct TextFieldClassInput {
    /// Field chrome.
    pub variant: FieldVariant,
    /// Size token.
    pub size: FieldSize,
    /// Full-width layout flag.
    pub full_width: bool,
    /// Disabled flag.
    pub disabled: bool,
    /// Validation error flag.
    pub error: bool,
    /// Required flag.
    pub required: bool,
    /// Focus state.
    pub focused: bool,
    /// Whether the floating label is shrunk.
    pub shrink_label: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Class lists for every text field slot.
pub struct TextFieldClasses {
    /// Root wrapper.
    pub root: ClassList,
    /// Input chrome container.
    pub control: ClassList,
    /// Native input.
    pub input: ClassList,
    /// Floating label.
    pub label: ClassList,
    /// Notched outline, outlined variant only.
    pub notch: ClassList,
    /// Helper text.
    pub helper_text: ClassList,
}

/// Text field slots. Visual state precedence is disabled, then error, then focused.
pub fn text_field_classes(input: TextFieldClassInput) -> TextFieldClasses {
    let variant = input.variant.token();

    let mut root = ClassList::new("text-field");
    root.push_if(input.full_width, "text-field--full-width");

    let mut control = ClassList::new("text-field__control");
    control.push(format!("text-field__control--{variant}"));
    if let Some(state) = field_state(input.disabled, input.error, input.focused) {
        control.push(format!("text-field__control--{variant}-{state}"));
    }
    if input.size.is_small() {
        control.push(format!("text-field__control--{variant}-small"));
        control.push_if(
            input.focused,
            format!("text-field__control--{variant}-focused-small"),
        );
    }

    let mut native = ClassList::new("text-field__input");
    native.push_if(input.size.is_small(), "text-field__input--small");

    let mut label = ClassList::new("text-field__label");
    if let Some(state) = field_state(input.disabled, input.error, input.focused) {
        label.push(format!("text-field__label--{state}"));
    }
    label.push_if(input.shrink_label, "text-field__label--shrunk");
    label.push_if(input.required, "text-field__label--required");
    label.push_if(input.size.is_small(), "text-field__label--small");

    let mut helper_text = ClassList::new("text-field__helper-text");
    if input.disabled {
        helper_text.push("text-field__helper-text--disabled");
    } else if input.error {
        helper_text.push("text-field__helper-text--error");
    }

    let mut notch = ClassList::new("text-field__notch");
    notch.push_if(input.shrink_label, "text-field__notch--shrunk");
    if let Some(state) = field_state(input.disabled, input.error, input.focused) {
        notch.push(format!("text-field__notch--{state}"));
    }

    TextFieldClasses {
        root,
        control,
        input: native,
        label,
        notch,
        helper_text,
    }
}

fn field_state(disabled: bool, error: bool, focused: bool) -> Option<&'static str> {
    if disabled {
        Some("disabled")
    } else if error {
        Some("error")
    } else if focused {
        Some("focused")
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Inputs for the select resolvers.
pub struct SelectClassInput {
    /// Field chrome.
    pub variant: FieldVariant,
    /// Size token.
    pub size: FieldSize,
    /// Focus state.
    pub focused: bool,
    /// Validation error flag.
    pub error: bool,
    /// Disabled flag.
    pub disabled: bool,
    /// Required flag.
    pub required: bool,
    /// Full-width layout flag.
    pub full_width: bool,
    /// Content-sized layout flag.
    pub auto_width: bool,
    /// Multi-select mode.
    pub multiple: bool,
    /// Whether a real (non-sentinel) value is selected.
    pub has_value: bool,
    /// Whether the floating label is shrunk.
    pub shrink_label: bool,
    /// Menu open state.
    pub open: bool,
    /// Whether a placeholder was supplied.
    pub has_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Class lists for every select slot.
pub struct SelectClasses {
    /// Root wrapper.
    pub root: ClassList,
    /// Floating label.
    pub label: ClassList,
    /// Input chrome container.
    pub control: ClassList,
    /// Visible combobox display.
    pub display: ClassList,
    /// Dropdown indicator.
    pub icon: ClassList,
    /// Helper text.
    pub helper_text: ClassList,
}

/// Select slots.
pub fn select_classes(input: SelectClassInput) -> SelectClasses {
    let variant = input.variant.token();
    let small = input.size.is_small();

    let mut root = ClassList::new("select");
    root.push_if(input.full_width, "select--full-width");
    root.push_if(input.auto_width, "select--auto-width");

    let mut label = ClassList::new("select__label");
    label.push_if(small, "select__label--small");
    label.push_if(input.shrink_label, "select__label--shrunk");
    label.push_if(input.focused, "select__label--focused");
    label.push_if(input.error, "select__label--error");
    label.push_if(input.disabled, "select__label--disabled");
    label.push_if(input.required, "select__label--required");

    let mut control = ClassList::new("select__control");
    control.push(format!("select__control--{variant}"));
    control.push_if(small, format!("select__control--{variant}-small"));
    control.push_if(input.focused, format!("select__control--{variant}-focused"));
    control.push_if(
        small && input.focused,
        format!("select__control--{variant}-focused-small"),
    );
    control.push_if(input.error, format!("select__control--{variant}-error"));
    control.push_if(
        input.disabled,
        format!("select__control--{variant}-disabled"),
    );

    let mut display = ClassList::new("select__display");
    display.push_if(input.multiple, "select__display--multiple");
    display.push_if(input.disabled, "select__display--disabled");
    display.push_if(
        !input.has_value && input.has_placeholder,
        "select__display--placeholder",
    );

    let mut icon = ClassList::new("select__icon");
    icon.push_if(input.open, "select__icon--open");
    icon.push_if(input.disabled, "select__icon--disabled");

    let mut helper_text = ClassList::new("select__helper-text");
    helper_text.push_if(input.error, "select__helper-text--error");
    helper_text.push_if(input.disabled, "select__helper-text--disabled");

    SelectClasses {
        root,
        label,
        control,
        display,
        icon,
        helper_text,
    }
}

/// Menu item slot for one option.
pub fn select_option_classes(selected: bool, disabled: bool) -> ClassList {
    let mut list = ClassList::new("select__option");
    list.push_if(selected, "select__option--selected");
    list.push_if(disabled, "select__option--disabled");
    list
}

/// Dropdown menu surface.
pub fn select_menu_classes(multiple: bool) -> ClassList {
    let mut list = ClassList::new("select__menu");
    list.push_if(multiple, "select__menu--multiple");
    list
}

/// Multi-select chip and its delete button.
pub fn chip_classes(disabled: bool) -> (ClassList, ClassList) {
    let mut chip = ClassList::new("chip");
    chip.push_if(disabled, "chip--disabled");
    (chip, ClassList::new("chip__delete"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Class lists for every modal slot.
pub struct ModalClasses {
    /// Presentation root.
    pub root: ClassList,
    /// Backdrop layer.
    pub backdrop: ClassList,
    /// Dialog content container.
    pub content: ClassList,
}

/// Modal slots. `hidden` applies while a kept-mounted modal is closed.
pub fn modal_classes(open: bool, with_backdrop: bool) -> ModalClasses {
    let mut root = ClassList::new(if with_backdrop {
        "modal"
    } else {
        "modal--no-backdrop"
    });
    root.push_if(!open, "modal--hidden");

    ModalClasses {
        root,
        backdrop: ClassList::new("modal__backdrop"),
        content: ClassList::new("modal__content"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn keys(list: &ClassList) -> Vec<&str> {
        list.keys().iter().map(String::as_str).collect()
    }

    #[test]
    fn button_classes_follow_size_variant_color_order() {
        let list = button_classes(ButtonClassInput {
            variant: ButtonVariant::Outlined,
            size: Size::Small,
            color: Color::Success,
        });
        assert_eq!(
            keys(&list),
            vec![
                "button",
                "button--small",
                "button--outlined",
                "button--outlined-success"
            ]
        );
    }

    #[test]
    fn resolution_is_deterministic_for_a_fixed_input() {
        let input = SelectClassInput {
            focused: true,
            error: true,
            size: FieldSize::Small,
            ..SelectClassInput::default()
        };
        assert_eq!(select_classes(input), select_classes(input));
    }

    #[test]
    fn switch_color_applies_only_while_checked_without_error() {
        let base = SwitchClassInput {
            color: Color::Secondary,
            ..SwitchClassInput::default()
        };
        let off = switch_classes(base);
        assert!(!off.control.has("switch--secondary"));

        let on = switch_classes(SwitchClassInput {
            checked: true,
            ..base
        });
        assert!(on.control.has("switch--secondary"));

        let errored = switch_classes(SwitchClassInput {
            checked: true,
            error: true,
            ..base
        });
        assert!(!errored.control.has("switch--secondary"));
        assert!(errored.control.has("switch--error"));
    }

    #[test]
    fn checkbox_error_replaces_color_slot() {
        let classes = checkbox_classes(CheckboxClassInput {
            color: Color::Info,
            error: true,
            checked: true,
            ..CheckboxClassInput::default()
        });
        assert_eq!(
            keys(&classes.control),
            vec![
                "checkbox__box",
                "checkbox__box--medium",
                "checkbox__box--error",
                "checkbox__box--checked"
            ]
        );
        assert!(classes.container.has("checkbox--error"));
    }

    #[test]
    fn text_field_disabled_wins_over_error_and_focus() {
        let classes = text_field_classes(TextFieldClassInput {
            disabled: true,
            error: true,
            focused: true,
            ..TextFieldClassInput::default()
        });
        assert!(classes.control.has("text-field__control--outlined-disabled"));
        assert!(!classes.control.has("text-field__control--outlined-error"));
        assert!(classes.label.has("text-field__label--disabled"));
        assert!(classes.helper_text.has("text-field__helper-text--disabled"));
    }

    #[test]
    fn select_placeholder_class_requires_empty_value() {
        let empty = select_classes(SelectClassInput {
            has_placeholder: true,
            ..SelectClassInput::default()
        });
        assert!(empty.display.has("select__display--placeholder"));

        let filled = select_classes(SelectClassInput {
            has_placeholder: true,
            has_value: true,
            ..SelectClassInput::default()
        });
        assert!(!filled.display.has("select__display--placeholder"));
    }

    #[test]
    fn class_map_applies_prefix_overrides_and_extra() {
        let mut map = ClassMap::default();
        map.overrides
            .insert("button--small".to_string(), "btn_sm_x1".to_string());
        let list = button_classes(ButtonClassInput {
            size: Size::Small,
            ..ButtonClassInput::default()
        })
        .with_extra(Some(" toolbar-action "));

        assert_eq!(
            map.render(&list),
            "ui-button btn_sm_x1 ui-button--contained ui-button--contained-primary toolbar-action"
        );
    }

    #[test]
    fn kept_mounted_closed_modal_is_hidden() {
        let classes = modal_classes(false, false);
        assert_eq!(
            keys(&classes.root),
            vec!["modal--no-backdrop", "modal--hidden"]
        );
    }
}
