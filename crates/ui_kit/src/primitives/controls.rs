use ui_headless::{
    checkbox_glyph,
    classes::{
        button_classes, checkbox_classes, switch_classes, text_field_classes, ButtonClassInput,
        CheckboxClassInput, SwitchClassInput, TextFieldClassInput,
    },
    resolve_dom_id, ButtonVariant, CheckboxGlyph, Color, FieldSize, FieldVariant, LabelPlacement,
    Size, TextState, ToggleState,
};

use super::*;
use crate::slots::{CheckboxIconProps, RenderSlot};

fn required_asterisk(kit: KitContext, required: bool) -> Option<View> {
    required.then(|| {
        view! { <span class=kit.class_key("asterisk") aria-hidden="true">" *"</span> }.into_view()
    })
}

fn place_label(placement: LabelPlacement, label: Option<View>) -> (Option<View>, Option<View>) {
    if placement.label_first() {
        (label, None)
    } else {
        (None, label)
    }
}

#[component]
/// Action button with variant, size, and color tokens.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: Size,
    #[prop(optional)] color: Color,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let kit = use_kit_config();
    let class = merge_layout_class(
        kit,
        button_classes(ButtonClassInput {
            variant,
            size,
            color,
        }),
        layout_class,
    );

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            id=id
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Checkbox with label placement, helper text, indeterminate display, and replaceable glyphs.
///
/// `checked` makes the control controlled; otherwise `default_checked` seeds internal state.
/// `on_change` receives the native event and the requested checked value.
pub fn Checkbox(
    #[prop(optional, into)] checked: MaybeProp<bool>,
    #[prop(optional)] default_checked: bool,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] size: Size,
    #[prop(optional)] color: Color,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] label_placement: LabelPlacement,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<RenderSlot<CheckboxIconProps>>,
    #[prop(optional)] checked_icon: Option<RenderSlot<CheckboxIconProps>>,
    #[prop(optional)] indeterminate_icon: Option<RenderSlot<CheckboxIconProps>>,
    #[prop(optional)] on_change: Option<Callback<(web_sys::Event, bool)>>,
) -> impl IntoView {
    let kit = use_kit_config();
    let id = resolve_dom_id(id.as_deref(), "checkbox");
    let helper_id = format!("{id}-helper-text");
    let state = create_rw_signal(ToggleState::new(
        checked.get_untracked(),
        default_checked,
        disabled.get_untracked(),
    ));

    create_effect(move |_| {
        let (checked, disabled) = (checked.get(), disabled.get());
        state.update(|state| state.sync(checked, disabled));
    });

    let classes = create_memo(move |_| {
        checkbox_classes(CheckboxClassInput {
            size,
            color,
            label_placement,
            checked: state.with(ToggleState::is_checked),
            indeterminate: indeterminate.get(),
            error: error.get(),
            disabled: disabled.get(),
            required,
        })
    });

    let glyph = move || {
        let props = CheckboxIconProps {
            class: kit.class(&classes.get().control),
            disabled: disabled.get(),
        };
        let (slot, token) =
            match checkbox_glyph(state.with(ToggleState::is_checked), indeterminate.get()) {
                CheckboxGlyph::Indeterminate => (indeterminate_icon, "indeterminate"),
                CheckboxGlyph::Checked => (checked_icon, "checked"),
                CheckboxGlyph::Unchecked => (icon, "unchecked"),
            };
        match slot {
            Some(slot) => slot.call(props),
            None => view! { <span class=props.class aria-hidden="true" data-ui-glyph=token></span> }
                .into_view(),
        }
    };

    let has_helper = helper_text.is_some();
    let label_view = label.map(|label| {
        view! {
            <span class=move || kit.class(&classes.get().label)>
                {label}
                {required_asterisk(kit, required)}
            </span>
        }
        .into_view()
    });
    let (before, after) = place_label(label_placement, label_view);

    view! {
        <span data-ui-primitive="true" data-ui-kind="checkbox-field">
            <label
                class=move || kit.class(&classes.get().container.with_extra(layout_class))
                data-ui-placement=label_placement.token()
                data-ui-disabled=move || bool_token(disabled.get())
            >
                {before}
                <span data-ui-slot="control">
                    <input
                        type="checkbox"
                        id=id
                        name=name
                        value=value
                        required=required
                        disabled=move || disabled.get()
                        aria-invalid=move || bool_token(error.get())
                        aria-describedby=described_by(&helper_id, has_helper)
                        prop:checked=move || state.with(ToggleState::is_checked)
                        prop:indeterminate=move || indeterminate.get()
                        data-ui-slot="input"
                        on:change=move |ev| {
                            let next = event_target_checked(&ev);
                            let requested = state.try_update(|state| state.request(next)).flatten();
                            let native = state
                                .with_untracked(|state| state.native(indeterminate.get_untracked()));
                            let input = event_target::<web_sys::HtmlInputElement>(&ev);
                            input.set_checked(native.checked);
                            input.set_indeterminate(native.indeterminate);
                            if let (Some(checked), Some(on_change)) = (requested, on_change.as_ref()) {
                                on_change.call((ev, checked));
                            }
                        }
                    />
                    {glyph}
                </span>
                {after}
            </label>
            {helper_text.map(|text| view! {
                <span id=helper_id.clone() class=move || kit.class(&classes.get().helper_text)>
                    {text}
                </span>
            })}
        </span>
    }
}

#[component]
/// On/off switch with `role="switch"` semantics.
///
/// Renders only the control when neither `label` nor `helper_text` is given.
pub fn Switch(
    #[prop(optional, into)] checked: MaybeProp<bool>,
    #[prop(optional)] default_checked: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional)] size: Size,
    #[prop(optional)] color: Color,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] label_placement: LabelPlacement,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<(web_sys::Event, bool)>>,
) -> impl IntoView {
    let kit = use_kit_config();
    let id = resolve_dom_id(id.as_deref(), "switch");
    let helper_id = format!("{id}-helper-text");
    let state = create_rw_signal(ToggleState::new(
        checked.get_untracked(),
        default_checked,
        disabled.get_untracked(),
    ));

    create_effect(move |_| {
        let (checked, disabled) = (checked.get(), disabled.get());
        state.update(|state| state.sync(checked, disabled));
    });

    let classes = create_memo(move |_| {
        switch_classes(SwitchClassInput {
            size,
            color,
            label_placement,
            checked: state.with(ToggleState::is_checked),
            error: error.get(),
            disabled: disabled.get(),
        })
    });

    let has_helper = helper_text.is_some();
    let bare = label.is_none() && !has_helper;
    let described = described_by(&helper_id, has_helper);
    let control = view! {
        <span
            class=move || {
                let list = classes.get().control;
                if bare {
                    kit.class(&list.with_extra(layout_class))
                } else {
                    kit.class(&list)
                }
            }
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-selected=move || bool_token(state.with(ToggleState::is_checked))
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <input
                type="checkbox"
                role="switch"
                id=id
                name=name
                aria-label=aria_label
                aria-checked=move || bool_token(state.with(ToggleState::is_checked))
                aria-describedby=described
                disabled=move || disabled.get()
                prop:checked=move || state.with(ToggleState::is_checked)
                data-ui-slot="input"
                on:change=move |ev| {
                    let next = event_target_checked(&ev);
                    let requested = state.try_update(|state| state.request(next)).flatten();
                    if let (Some(checked), Some(on_change)) = (requested, on_change.as_ref()) {
                        on_change.call((ev, checked));
                    }
                }
            />
            <span data-ui-slot="track">
                <span data-ui-slot="thumb"></span>
            </span>
        </span>
    }
    .into_view();

    if bare {
        return control;
    }

    let label_view = label.map(|label| view! { <span data-ui-slot="label">{label}</span> }.into_view());
    let (before, after) = place_label(label_placement, label_view);

    view! {
        <span data-ui-kind="switch-field">
            <label class=move || kit.class(&classes.get().container.with_extra(layout_class))>
                {before}
                {control}
                {after}
            </label>
            {helper_text.map(|text| view! {
                <span id=helper_id.clone() class=move || kit.class(&classes.get().helper_text)>
                    {text}
                </span>
            })}
        </span>
    }
    .into_view()
}

#[component]
/// Text input with a floating label, helper text, and outlined, filled, or standard chrome.
///
/// `value` makes the field controlled. `on_change` receives the native input event and the new
/// text; the rendered text only changes once the caller feeds it back through `value`.
pub fn TextField(
    #[prop(optional, into)] value: MaybeProp<String>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] size: FieldSize,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_change: Option<Callback<(web_sys::Event, String)>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let kit = use_kit_config();
    let id = resolve_dom_id(id.as_deref(), "text-field");
    let helper_id = format!("{id}-helper-text");
    let state = create_rw_signal(TextState::new(
        value.get_untracked(),
        default_value,
        disabled.get_untracked(),
    ));

    create_effect(move |_| {
        let (value, disabled) = (value.get(), disabled.get());
        state.update(|state| state.sync(value, disabled));
    });

    let classes = create_memo(move |_| {
        state.with(|state| {
            text_field_classes(TextFieldClassInput {
                variant,
                size,
                full_width,
                disabled: disabled.get(),
                error: error.get(),
                required,
                focused: state.is_focused(),
                shrink_label: state.shrink_label(),
            })
        })
    });

    let has_label = label.is_some();
    let has_helper = helper_text.is_some();
    let placeholder = if has_label { None } else { placeholder };
    let outlined = matches!(variant, FieldVariant::Outlined);
    let legend_label = label.clone();

    view! {
        <div
            class=move || kit.class(&classes.get().root.with_extra(layout_class))
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-variant=variant.token()
        >
            <div class=move || kit.class(&classes.get().control)>
                <input
                    id=id.clone()
                    name=name
                    type=input_type.unwrap_or("text")
                    autocomplete=autocomplete
                    placeholder=placeholder
                    node_ref=node_ref
                    class=move || kit.class(&classes.get().input)
                    required=required
                    disabled=move || disabled.get()
                    aria-invalid=move || bool_token(error.get())
                    aria-describedby=described_by(&helper_id, has_helper)
                    prop:value=move || state.with(|state| state.value().to_string())
                    on:input=move |ev| {
                        let next = event_target_value(&ev);
                        let reported = state.try_update(|state| state.input(next)).flatten();
                        if let (Some(text), Some(on_change)) = (reported, on_change.as_ref()) {
                            on_change.call((ev, text));
                        }
                    }
                    on:focus=move |ev| {
                        state.update(TextState::focus);
                        if let Some(on_focus) = on_focus.as_ref() {
                            on_focus.call(ev);
                        }
                    }
                    on:blur=move |ev| {
                        state.update(TextState::blur);
                        if let Some(on_blur) = on_blur.as_ref() {
                            on_blur.call(ev);
                        }
                    }
                    on:keydown=move |ev| {
                        if let Some(on_keydown) = on_keydown.as_ref() {
                            on_keydown.call(ev);
                        }
                    }
                />
                {label.map(|label| view! {
                    <label for=id.clone() class=move || kit.class(&classes.get().label)>
                        {label}
                        {required_asterisk(kit, required)}
                    </label>
                })}
                {outlined.then(|| {
                    view! {
                        <fieldset class=move || kit.class(&classes.get().notch) aria-hidden="true">
                            {move || {
                                let shrunk = state.with(TextState::shrink_label);
                                legend_label.clone().filter(|_| shrunk).map(|label| view! {
                                    <legend>
                                        <span>{label}{required.then_some(" *")}</span>
                                    </legend>
                                })
                            }}
                        </fieldset>
                    }
                })}
            </div>
            {helper_text.map(|text| view! {
                <div id=helper_id.clone() class=move || kit.class(&classes.get().helper_text)>
                    {text}
                </div>
            })}
        </div>
    }
}
