//! Form-control, select, and overlay primitives.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;
use ui_headless::ClassList;

use crate::config::{use_kit_config, KitContext};

mod controls;
mod overlays;
mod select;

pub use controls::{Button, Checkbox, Switch, TextField};
pub use overlays::Modal;
pub use select::{ArrowDropDownIcon, Chip, Select, SelectMenu};

pub(crate) fn merge_layout_class(
    kit: KitContext,
    list: ClassList,
    layout_class: Option<&'static str>,
) -> String {
    kit.class(&list.with_extra(layout_class))
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn described_by(helper_id: &str, has_helper: bool) -> Option<String> {
    has_helper.then(|| helper_id.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bool_tokens_match_data_attribute_contract() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }

    #[test]
    fn helper_text_id_is_linked_only_when_present() {
        assert_eq!(described_by("f-helper", true), Some("f-helper".to_string()));
        assert_eq!(described_by("f-helper", false), None);
    }
}
