//! Select value/menu reducer, synthetic none-option injection, and display derivation.
//!
//! The Leptos `Select` keeps a [`SelectState`] in a signal, feeds every interaction through
//! [`reduce_select`], and executes the returned [`SelectEffect`] values in order by invoking the
//! caller's callbacks. The reducer never calls back into the caller itself.

use std::borrow::Cow;

use crate::{
    controllable::Controllable,
    open_state::{OpenState, OpenTransition},
    value::{OptionValue, SelectChange, SelectOption, SelectValue},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Synthetic empty-option settings (`include_none_option`, `none_option_text`, `none_option_value`).
pub struct NoneOption {
    /// Whether to inject the option at all.
    pub include: bool,
    /// Label of the injected option.
    pub text: String,
    /// Value of the injected option; also treated as "no value" for label/placeholder logic.
    pub value: OptionValue,
}

impl Default for NoneOption {
    fn default() -> Self {
        Self {
            include: true,
            text: "None".to_string(),
            value: OptionValue::empty(),
        }
    }
}

/// Caller options with the synthetic none option prepended when it applies.
///
/// Multi-select never gets the option, and it is skipped when a caller option already uses the
/// none value.
pub fn options_with_none<'a>(
    options: &'a [SelectOption],
    none: &NoneOption,
    multiple: bool,
) -> Cow<'a, [SelectOption]> {
    if multiple || !none.include || options.iter().any(|option| option.value == none.value) {
        return Cow::Borrowed(options);
    }
    let mut all = Vec::with_capacity(options.len() + 1);
    all.push(SelectOption::new(none.value.clone(), none.text.clone()));
    all.extend_from_slice(options);
    Cow::Owned(all)
}

/// Values used by more than one option, in first-seen order.
pub fn duplicate_option_values(options: &[SelectOption]) -> Vec<OptionValue> {
    let mut duplicates: Vec<OptionValue> = Vec::new();
    for (index, option) in options.iter().enumerate() {
        let repeated = options[..index]
            .iter()
            .any(|earlier| earlier.value == option.value);
        if repeated && !duplicates.contains(&option.value) {
            duplicates.push(option.value.clone());
        }
    }
    duplicates
}

/// First option whose value matches. Later duplicates are unreachable.
pub fn find_option<'a>(options: &'a [SelectOption], value: &OptionValue) -> Option<&'a SelectOption> {
    options.iter().find(|option| option.value == *value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One chip rendered for a selected value in multi-select mode.
pub struct ChipModel {
    /// Selected value.
    pub value: OptionValue,
    /// Option label, or the value's text form when no option matches.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Construction-time select props.
pub struct SelectInit {
    /// Controlling value, if any.
    pub value: Option<SelectValue>,
    /// Uncontrolled seed.
    pub default_value: Option<SelectValue>,
    /// Controlling open flag, if any.
    pub open: Option<bool>,
    /// Multi-select mode. Fixed for the lifetime of the instance.
    pub multiple: bool,
    /// Disabled flag.
    pub disabled: bool,
    /// Escape closes the open menu.
    pub close_on_escape: bool,
    /// Value treated as "nothing selected" in single mode.
    pub none_option_value: OptionValue,
}

impl Default for SelectInit {
    fn default() -> Self {
        Self {
            value: None,
            default_value: None,
            open: None,
            multiple: false,
            disabled: false,
            close_on_escape: true,
            none_option_value: OptionValue::empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Props re-read on every render pass.
pub struct SelectProps {
    /// Controlling value, if any.
    pub value: Option<SelectValue>,
    /// Controlling open flag, if any.
    pub open: Option<bool>,
    /// Disabled flag.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved select instance state.
pub struct SelectState {
    value: Controllable<SelectValue>,
    menu: OpenState,
    focused: bool,
    multiple: bool,
    close_on_escape: bool,
    none_option_value: OptionValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Interactions and prop updates accepted by [`reduce_select`].
pub enum SelectAction {
    /// Trigger click or Enter/Space on the trigger.
    Toggle,
    /// Explicit open request.
    Open,
    /// Explicit close request.
    Close,
    /// Mousedown outside both the trigger and the menu.
    ClickOutside,
    /// Escape pressed on the trigger.
    Escape,
    /// Menu option clicked.
    ChooseOption(SelectOption),
    /// Chip delete (multi-select only).
    RemoveValue(OptionValue),
    /// Trigger gained focus.
    Focus,
    /// Trigger lost focus.
    Blur,
    /// Re-render with new props.
    Sync(SelectProps),
}

impl SelectAction {
    /// Maps a trigger keydown to an action. Enter/Space map to [`SelectAction::Toggle`].
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " => Some(Self::Toggle),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Caller notifications emitted by [`reduce_select`].
pub enum SelectEffect {
    /// Invoke `on_change(event, value)`.
    Changed(SelectChange),
    /// Invoke `on_open()`.
    Opened,
    /// Invoke `on_close()`.
    Closed,
}

impl From<OpenTransition> for SelectEffect {
    fn from(transition: OpenTransition) -> Self {
        match transition {
            OpenTransition::Opened => Self::Opened,
            OpenTransition::Closed => Self::Closed,
        }
    }
}

impl SelectState {
    /// Resolves initial ownership of the value and open bit.
    pub fn new(init: SelectInit) -> Self {
        let multiple = init.multiple;
        Self {
            value: Controllable::new(
                init.value.map(|value| value.coerce(multiple)),
                init.default_value.map(|value| value.coerce(multiple)),
                SelectValue::empty(multiple),
            ),
            menu: OpenState::new(init.open, init.disabled),
            focused: false,
            multiple,
            close_on_escape: init.close_on_escape,
            none_option_value: init.none_option_value,
        }
    }

    /// Resolved value. Always [`SelectValue::Multiple`] in multi-select mode.
    pub fn value(&self) -> &SelectValue {
        self.value.get()
    }

    /// Resolved menu open bit.
    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Focus flag.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Disabled flag.
    pub fn is_disabled(&self) -> bool {
        self.menu.is_disabled()
    }

    /// Multi-select mode.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Whether a real value is selected (the none sentinel does not count).
    pub fn has_value(&self) -> bool {
        match self.value() {
            SelectValue::Multiple(values) => !values.is_empty(),
            SelectValue::Single(value) => !value.is_empty() && *value != self.none_option_value,
        }
    }

    /// The floating label shrinks while focused, open, or holding a value.
    pub fn shrink_label(&self) -> bool {
        self.focused || self.has_value() || self.is_open()
    }

    /// Whether `value` is currently selected.
    pub fn is_selected(&self, value: &OptionValue) -> bool {
        self.value().contains(value)
    }

    /// Text shown in the trigger.
    ///
    /// An unshrunk label doubles as the placeholder, so nothing is shown in that case.
    pub fn display_text(
        &self,
        options: &[SelectOption],
        has_label: bool,
        placeholder: Option<&str>,
    ) -> String {
        let fallback = || {
            if has_label && !self.shrink_label() {
                String::new()
            } else {
                placeholder.unwrap_or_default().to_string()
            }
        };

        match self.value() {
            SelectValue::Multiple(values) if values.is_empty() => fallback(),
            SelectValue::Multiple(_) => self
                .chips(options)
                .into_iter()
                .map(|chip| chip.label)
                .collect::<Vec<_>>()
                .join(", "),
            SelectValue::Single(value) => match find_option(options, value) {
                Some(option) if option.value != self.none_option_value => option.label.clone(),
                _ => fallback(),
            },
        }
    }

    /// Chips for the selected values, in selection order.
    pub fn chips(&self, options: &[SelectOption]) -> Vec<ChipModel> {
        let SelectValue::Multiple(values) = self.value() else {
            return Vec::new();
        };
        values
            .iter()
            .map(|value| ChipModel {
                value: value.clone(),
                label: find_option(options, value)
                    .map(|option| option.label.clone())
                    .unwrap_or_else(|| value.to_string()),
            })
            .collect()
    }

    fn commit(&mut self, next: SelectValue) -> SelectEffect {
        self.value.commit(next.clone());
        SelectEffect::Changed(SelectChange::new(next))
    }
}

/// Applies one [`SelectAction`] and returns the caller notifications it produced, in order.
///
/// Disabled selects and disabled options produce no effects. Value mutations in controlled mode
/// are reported through [`SelectEffect::Changed`] without touching the mirrored value.
pub fn reduce_select(state: &mut SelectState, action: SelectAction) -> Vec<SelectEffect> {
    let mut effects = Vec::new();
    match action {
        SelectAction::Toggle => effects.extend(state.menu.toggle().map(SelectEffect::from)),
        SelectAction::Open => effects.extend(state.menu.open().map(SelectEffect::from)),
        SelectAction::Close | SelectAction::ClickOutside => {
            effects.extend(state.menu.close().map(SelectEffect::from));
        }
        SelectAction::Escape => {
            let close_on_escape = state.close_on_escape;
            effects.extend(state.menu.escape(close_on_escape).map(SelectEffect::from));
        }
        SelectAction::ChooseOption(option) => {
            if option.disabled || state.is_disabled() {
                return effects;
            }
            if state.multiple {
                let mut values = state.value().values().to_vec();
                if values.contains(&option.value) {
                    values.retain(|value| *value != option.value);
                } else {
                    values.push(option.value);
                }
                let change = state.commit(SelectValue::Multiple(values));
                effects.push(change);
            } else {
                let change = state.commit(SelectValue::Single(option.value));
                effects.push(change);
                effects.extend(state.menu.close().map(SelectEffect::from));
            }
        }
        SelectAction::RemoveValue(value) => {
            if !state.multiple || state.is_disabled() || !state.is_selected(&value) {
                return effects;
            }
            let mut values = state.value().values().to_vec();
            values.retain(|candidate| *candidate != value);
            let change = state.commit(SelectValue::Multiple(values));
            effects.push(change);
        }
        SelectAction::Focus => state.focused = true,
        SelectAction::Blur => state.focused = false,
        SelectAction::Sync(props) => {
            let multiple = state.multiple;
            state
                .value
                .sync(props.value.map(|value| value.coerce(multiple)));
            state.menu.sync(props.open, props.disabled);
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ab_options() -> Vec<SelectOption> {
        vec![SelectOption::new(1, "A"), SelectOption::new(2, "B")]
    }

    fn multi() -> SelectState {
        SelectState::new(SelectInit {
            multiple: true,
            ..SelectInit::default()
        })
    }

    fn changed_values(effects: &[SelectEffect]) -> Vec<SelectValue> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                SelectEffect::Changed(change) => Some(change.value.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn none_option_is_injected_once_for_single_mode() {
        let options = ab_options();
        let all = options_with_none(&options, &NoneOption::default(), false);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].value, OptionValue::empty());
        assert_eq!(all[0].label, "None");
    }

    #[test]
    fn none_option_skipped_on_collision_multi_or_opt_out() {
        let options = vec![SelectOption::new("", "Any"), SelectOption::new("x", "X")];
        let none = NoneOption::default();
        assert_eq!(options_with_none(&options, &none, false).len(), 2);
        assert_eq!(options_with_none(&ab_options(), &none, true).len(), 2);
        let opted_out = NoneOption {
            include: false,
            ..NoneOption::default()
        };
        assert_eq!(options_with_none(&ab_options(), &opted_out, false).len(), 2);
    }

    #[test]
    fn multi_select_scenario_a_then_b_then_a() {
        let options = ab_options();
        let mut state = multi();
        let _ = reduce_select(&mut state, SelectAction::Toggle);

        let _ = reduce_select(&mut state, SelectAction::ChooseOption(options[0].clone()));
        let effects = reduce_select(&mut state, SelectAction::ChooseOption(options[1].clone()));
        assert_eq!(
            changed_values(&effects),
            vec![SelectValue::Multiple(vec![1.into(), 2.into()])]
        );

        let effects = reduce_select(&mut state, SelectAction::ChooseOption(options[0].clone()));
        assert_eq!(
            changed_values(&effects),
            vec![SelectValue::Multiple(vec![2.into()])]
        );
        assert!(state.is_open());
    }

    #[test]
    fn toggling_the_same_value_twice_is_identity() {
        let option = SelectOption::new("v", "V");
        let mut state = multi();
        let _ = reduce_select(&mut state, SelectAction::ChooseOption(option.clone()));
        let _ = reduce_select(&mut state, SelectAction::ChooseOption(option));
        assert_eq!(state.value(), &SelectValue::Multiple(Vec::new()));
    }

    #[test]
    fn single_choose_changes_then_closes() {
        let options = ab_options();
        let mut state = SelectState::new(SelectInit::default());
        let _ = reduce_select(&mut state, SelectAction::Open);
        let effects = reduce_select(&mut state, SelectAction::ChooseOption(options[1].clone()));
        assert_eq!(
            effects,
            vec![
                SelectEffect::Changed(SelectChange::new(SelectValue::Single(2.into()))),
                SelectEffect::Closed,
            ]
        );
        assert!(!state.is_open());
    }

    #[test]
    fn disabled_option_never_selects() {
        let mut state = SelectState::new(SelectInit::default());
        let effects = reduce_select(
            &mut state,
            SelectAction::ChooseOption(SelectOption::new(3, "C").disabled()),
        );
        assert!(effects.is_empty());
        assert_eq!(state.value(), &SelectValue::Single(OptionValue::empty()));
    }

    #[test]
    fn disabled_select_suppresses_every_interaction() {
        let options = ab_options();
        let mut state = SelectState::new(SelectInit {
            multiple: true,
            disabled: true,
            default_value: Some(SelectValue::Multiple(vec![1.into()])),
            ..SelectInit::default()
        });
        let actions = vec![
            SelectAction::Toggle,
            SelectAction::Open,
            SelectAction::Escape,
            SelectAction::ClickOutside,
            SelectAction::ChooseOption(options[1].clone()),
            SelectAction::RemoveValue(1.into()),
        ];
        for action in actions {
            assert!(reduce_select(&mut state, action).is_empty());
        }
        assert!(!state.is_open());
        assert_eq!(state.value(), &SelectValue::Multiple(vec![1.into()]));
    }

    #[test]
    fn remove_value_is_silent_when_absent_or_single() {
        let mut state = multi();
        assert!(reduce_select(&mut state, SelectAction::RemoveValue(9.into())).is_empty());

        let mut single = SelectState::new(SelectInit {
            default_value: Some(SelectValue::Single(1.into())),
            ..SelectInit::default()
        });
        assert!(reduce_select(&mut single, SelectAction::RemoveValue(1.into())).is_empty());
    }

    #[test]
    fn controlled_value_only_changes_through_sync() {
        let options = ab_options();
        let mut state = SelectState::new(SelectInit {
            value: Some(SelectValue::Single(1.into())),
            ..SelectInit::default()
        });
        let effects = reduce_select(&mut state, SelectAction::ChooseOption(options[1].clone()));
        assert_eq!(
            changed_values(&effects),
            vec![SelectValue::Single(2.into())]
        );
        assert_eq!(state.value(), &SelectValue::Single(1.into()));

        let _ = reduce_select(
            &mut state,
            SelectAction::Sync(SelectProps {
                value: Some(SelectValue::Single(2.into())),
                ..SelectProps::default()
            }),
        );
        assert_eq!(state.value(), &SelectValue::Single(2.into()));
    }

    #[test]
    fn scalar_value_in_multi_mode_is_coerced_to_array() {
        let state = SelectState::new(SelectInit {
            multiple: true,
            value: Some(SelectValue::Single("a".into())),
            ..SelectInit::default()
        });
        assert_eq!(state.value(), &SelectValue::Multiple(vec!["a".into()]));
    }

    #[test]
    fn display_text_hides_placeholder_behind_unshrunk_label() {
        let options = ab_options();
        let mut state = SelectState::new(SelectInit::default());
        assert_eq!(state.display_text(&options, true, Some("Pick")), "");
        assert_eq!(state.display_text(&options, false, Some("Pick")), "Pick");

        let _ = reduce_select(&mut state, SelectAction::Focus);
        assert_eq!(state.display_text(&options, true, Some("Pick")), "Pick");
    }

    #[test]
    fn none_value_counts_as_empty_for_display() {
        let none = NoneOption {
            value: "none".into(),
            ..NoneOption::default()
        };
        let all = options_with_none(&ab_options(), &none, false).into_owned();
        let state = SelectState::new(SelectInit {
            default_value: Some(SelectValue::Single("none".into())),
            none_option_value: "none".into(),
            ..SelectInit::default()
        });
        assert!(!state.has_value());
        assert_eq!(state.display_text(&all, false, Some("Pick")), "Pick");
    }

    #[test]
    fn duplicate_values_use_first_match_labels() {
        let options = vec![
            SelectOption::new(1, "First"),
            SelectOption::new(1, "Second"),
            SelectOption::new(2, "Two"),
        ];
        assert_eq!(duplicate_option_values(&options), vec![OptionValue::from(1)]);

        let state = SelectState::new(SelectInit {
            multiple: true,
            default_value: Some(SelectValue::Multiple(vec![1.into(), 7.into()])),
            ..SelectInit::default()
        });
        assert_eq!(
            state.chips(&options),
            vec![
                ChipModel {
                    value: 1.into(),
                    label: "First".to_string()
                },
                ChipModel {
                    value: 7.into(),
                    label: "7".to_string()
                },
            ]
        );
        assert_eq!(state.display_text(&options, false, None), "First, 7");
    }

    #[test]
    fn escape_key_maps_and_closes_only_while_open() {
        let mut state = SelectState::new(SelectInit::default());
        let escape = SelectAction::from_key("Escape").expect("escape maps");
        assert!(reduce_select(&mut state, escape.clone()).is_empty());
        let _ = reduce_select(&mut state, SelectAction::from_key(" ").expect("space maps"));
        assert_eq!(reduce_select(&mut state, escape), vec![SelectEffect::Closed]);
        assert_eq!(SelectAction::from_key("a"), None);
    }
}
