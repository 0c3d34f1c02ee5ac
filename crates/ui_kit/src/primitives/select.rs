use std::rc::Rc;

use ui_headless::{
    classes::{chip_classes, select_classes, select_menu_classes, select_option_classes, SelectClassInput},
    reduce_select, resolve_dom_id,
    select::{duplicate_option_values, options_with_none},
    FieldSize, FieldVariant, OptionValue, SelectAction, SelectChange, SelectEffect, SelectInit,
    SelectOption, SelectProps as HeadlessSelectProps, SelectState, SelectValue,
};

use super::*;
use crate::{
    dom::node_contains,
    slots::{IconSlotProps, RenderSlot},
};

#[component]
/// Default dropdown indicator.
pub fn ArrowDropDownIcon(#[prop(into)] class: MaybeSignal<String>) -> impl IntoView {
    view! {
        <svg
            class=move || class.get()
            viewBox="0 0 24 24"
            width="24"
            height="24"
            aria-hidden="true"
            focusable="false"
        >
            <path d="M7 10l5 5 5-5z" fill="currentColor"></path>
        </svg>
    }
}

#[component]
/// Selected-value chip with a delete button.
pub fn Chip(
    #[prop(into)] label: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_delete: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let kit = use_kit_config();
    let delete = move |ev: web_sys::Event| {
        ev.stop_propagation();
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.call(ev);
        }
    };
    let delete_label = format!("Remove {label}");

    view! {
        <span
            class=move || kit.class(&chip_classes(disabled.get()).0)
            data-ui-primitive="true"
            data-ui-kind="chip"
        >
            <span data-ui-slot="label">{label}</span>
            {on_delete.is_some().then(|| view! {
                <button
                    type="button"
                    class=move || kit.class(&chip_classes(disabled.get()).1)
                    aria-label=delete_label.clone()
                    disabled=move || disabled.get()
                    on:mousedown=move |ev| ev.stop_propagation()
                    on:click=move |ev| delete(ev.into())
                    on:keydown=move |ev| match ev.key().as_str() {
                        "Backspace" | "Delete" => {
                            ev.prevent_default();
                            delete(ev.into());
                        }
                        _ => ev.stop_propagation(),
                    }
                >
                    "×"
                </button>
            })}
        </span>
    }
}

#[component]
/// Listbox surface listing the select options.
pub fn SelectMenu(
    #[prop(into)] id: String,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] value: Signal<SelectValue>,
    #[prop(optional)] multiple: bool,
    #[prop(optional, into)] labelled_by: Option<String>,
    on_choose: Callback<(web_sys::Event, SelectOption)>,
    /// Extra content rendered after the options.
    #[prop(optional)] extra: Option<ChildrenFn>,
) -> impl IntoView {
    let kit = use_kit_config();

    view! {
        <ul
            id=id
            role="listbox"
            aria-labelledby=labelled_by.filter(|id| !id.is_empty())
            aria-multiselectable=bool_token(multiple)
            class=kit.class(&select_menu_classes(multiple))
            data-ui-primitive="true"
            data-ui-kind="select-menu"
        >
            {move || {
                let current = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let selected = current.contains(&option.value);
                        let disabled = option.disabled;
                        let class = kit.class(&select_option_classes(selected, disabled));
                        let label = option.label.clone();
                        view! {
                            <li
                                role="option"
                                class=class
                                aria-selected=bool_token(selected)
                                aria-disabled=bool_token(disabled)
                                data-value=option.value.to_string()
                                on:mousedown=move |ev| ev.prevent_default()
                                on:click=move |ev| on_choose.call((ev.into(), option.clone()))
                            >
                                {label}
                            </li>
                        }
                    })
                    .collect_view()
            }}
            {extra.map(|extra| extra())}
        </ul>
    }
}

#[component]
/// Single or multi-value select with a combobox trigger, floating label, and chips.
///
/// `value` and `open` each make their piece of state controlled; unset, the select owns them.
/// Every committed change calls `on_change` with the native event and a [`SelectChange`]
/// whose `target.value` mirrors the new value.
pub fn Select(
    #[prop(into)] options: MaybeSignal<Vec<SelectOption>>,
    #[prop(optional, into)] value: MaybeProp<SelectValue>,
    #[prop(optional)] default_value: Option<SelectValue>,
    #[prop(optional, into)] open: MaybeProp<bool>,
    #[prop(optional)] multiple: bool,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] size: FieldSize,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] auto_width: bool,
    #[prop(optional)] close_on_escape: Option<bool>,
    #[prop(optional)] include_none_option: Option<bool>,
    #[prop(optional, into)] none_option_text: Option<String>,
    #[prop(optional)] none_option_value: Option<OptionValue>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<RenderSlot<IconSlotProps>>,
    #[prop(optional)] on_change: Option<Callback<(web_sys::Event, SelectChange)>>,
    #[prop(optional)] on_open: Option<Callback<()>>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let kit = use_kit_config();
    let none = kit
        .select()
        .none_option(include_none_option, none_option_text, none_option_value);
    let id = resolve_dom_id(id.as_deref(), "select");
    let label_id = format!("{id}-label");
    let menu_id = format!("{id}-menu");
    let helper_id = format!("{id}-helper-text");
    let root_ref = create_node_ref::<html::Div>();

    let state = create_rw_signal(SelectState::new(SelectInit {
        value: value.get_untracked(),
        default_value,
        open: open.get_untracked(),
        multiple,
        disabled: disabled.get_untracked(),
        close_on_escape: close_on_escape.unwrap_or(true),
        none_option_value: none.value.clone(),
    }));

    create_effect(move |_| {
        let props = HeadlessSelectProps {
            value: value.get(),
            open: open.get(),
            disabled: disabled.get(),
        };
        state.update(|state| {
            let _ = reduce_select(state, SelectAction::Sync(props));
        });
    });

    let all_options = create_memo(move |_| {
        options.with(|options| options_with_none(options, &none, multiple).into_owned())
    });

    let warn_id = id.clone();
    create_effect(move |_| {
        let duplicates = all_options.with(|options| duplicate_option_values(options));
        if !duplicates.is_empty() {
            logging::warn!(
                "select `{warn_id}` reuses option values {duplicates:?}; the first match wins"
            );
        }
    });

    let dispatch = move |ev: web_sys::Event, action: SelectAction| {
        let effects = state
            .try_update(|state| reduce_select(state, action))
            .unwrap_or_default();
        for effect in effects {
            match effect {
                SelectEffect::Changed(change) => {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call((ev.clone(), change));
                    }
                }
                SelectEffect::Opened => {
                    if let Some(on_open) = on_open.as_ref() {
                        on_open.call(());
                    }
                }
                SelectEffect::Closed => {
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(());
                    }
                }
            }
        }
    };

    let outside = window_event_listener(ev::mousedown, move |ev| {
        if !state.with_untracked(SelectState::is_open) {
            return;
        }
        let Some(root) = root_ref.get_untracked() else {
            return;
        };
        if !node_contains(&root, ev.target()) {
            dispatch(ev.into(), SelectAction::ClickOutside);
        }
    });
    on_cleanup(move || outside.remove());

    let has_label = label.is_some();
    let has_placeholder = placeholder.is_some();
    let has_helper = helper_text.is_some();
    let classes = create_memo(move |_| {
        state.with(|state| {
            select_classes(SelectClassInput {
                variant,
                size,
                focused: state.is_focused(),
                error: error.get(),
                disabled: state.is_disabled(),
                required,
                full_width,
                auto_width,
                multiple,
                has_value: state.has_value(),
                shrink_label: state.shrink_label(),
                open: state.is_open(),
                has_placeholder,
            })
        })
    });

    let display = move || {
        if multiple && state.with(SelectState::has_value) {
            let chips = all_options.with(|options| state.with(|state| state.chips(options)));
            chips
                .into_iter()
                .map(|chip| {
                    let value = chip.value;
                    view! {
                        <Chip
                            label=chip.label
                            disabled=disabled
                            on_delete=Callback::new(move |ev| {
                                dispatch(ev, SelectAction::RemoveValue(value.clone()))
                            })
                        />
                    }
                })
                .collect_view()
        } else {
            all_options
                .with(|options| {
                    state.with(|state| state.display_text(options, has_label, placeholder.as_deref()))
                })
                .into_view()
        }
    };

    let icon_view = move || {
        let props = IconSlotProps {
            class: kit.class(&classes.get().icon),
            open: state.with(SelectState::is_open),
        };
        match icon {
            Some(slot) => slot.call(props),
            None => view! { <ArrowDropDownIcon class=props.class /> }.into_view(),
        }
    };

    let menu_value = Signal::derive(move || state.with(|state| state.value().clone()));
    let menu_options = Signal::derive(move || all_options.get());
    let on_choose = Callback::new(move |(ev, option): (web_sys::Event, SelectOption)| {
        dispatch(ev, SelectAction::ChooseOption(option));
    });
    let menu_children: ChildrenFn =
        children.unwrap_or_else(|| Rc::new(|| Fragment::new(Vec::new())));
    let menu_label_id = has_label.then(|| label_id.clone());
    let menu_id_attr = menu_id.clone();

    view! {
        <div
            node_ref=root_ref
            class=move || kit.class(&classes.get().root.with_extra(layout_class))
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-variant=variant.token()
            data-ui-open=move || bool_token(state.with(SelectState::is_open))
        >
            {label.map(|label| view! {
                <label id=label_id.clone() for=id.clone() class=move || kit.class(&classes.get().label)>
                    {label}
                    {required.then(|| view! {
                        <span class=kit.class_key("asterisk") aria-hidden="true">" *"</span>
                    })}
                </label>
            })}
            <div class=move || kit.class(&classes.get().control)>
                <div
                    id=id.clone()
                    role="combobox"
                    class=move || kit.class(&classes.get().display)
                    tabindex=move || if state.with(SelectState::is_disabled) { "-1" } else { "0" }
                    aria-haspopup="listbox"
                    aria-controls=menu_id
                    aria-expanded=move || bool_token(state.with(SelectState::is_open))
                    aria-disabled=move || bool_token(state.with(SelectState::is_disabled))
                    aria-invalid=move || bool_token(error.get())
                    aria-required=bool_token(required)
                    aria-labelledby=has_label.then(|| label_id.clone())
                    aria-describedby=described_by(&helper_id, has_helper)
                    on:click=move |ev| dispatch(ev.into(), SelectAction::Toggle)
                    on:keydown=move |ev| {
                        let Some(action) = SelectAction::from_key(&ev.key()) else {
                            return;
                        };
                        if matches!(action, SelectAction::Toggle) {
                            ev.prevent_default();
                        }
                        dispatch(ev.into(), action);
                    }
                    on:focus=move |ev| {
                        dispatch(ev.clone().into(), SelectAction::Focus);
                        if let Some(on_focus) = on_focus.as_ref() {
                            on_focus.call(ev);
                        }
                    }
                    on:blur=move |ev| {
                        dispatch(ev.clone().into(), SelectAction::Blur);
                        if let Some(on_blur) = on_blur.as_ref() {
                            on_blur.call(ev);
                        }
                    }
                >
                    {display}
                </div>
                {icon_view}
                <select
                    name=name
                    multiple=multiple
                    required=required
                    disabled=move || disabled.get()
                    tabindex="-1"
                    aria-hidden="true"
                    hidden=true
                    data-ui-slot="native-select"
                >
                    {move || {
                        let current = menu_value.get();
                        all_options
                            .get()
                            .into_iter()
                            .map(|option| {
                                let selected = current.contains(&option.value);
                                view! {
                                    <option
                                        value=option.value.to_string()
                                        disabled=option.disabled
                                        prop:selected=selected
                                    >
                                        {option.label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <Show when=move || state.with(SelectState::is_open)>
                <SelectMenu
                    id=menu_id_attr.clone()
                    options=menu_options
                    value=menu_value
                    multiple=multiple
                    labelled_by=menu_label_id.clone().unwrap_or_default()
                    on_choose=on_choose
                    extra=menu_children.clone()
                />
            </Show>
            {helper_text.map(|text| view! {
                <div id=helper_id.clone() class=move || kit.class(&classes.get().helper_text)>
                    {text}
                </div>
            })}
        </div>
    }
}
