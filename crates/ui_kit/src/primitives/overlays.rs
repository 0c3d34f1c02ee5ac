use std::rc::Rc;

use ui_headless::{
    classes::modal_classes, BackdropMode, CloseHandler, CloseReason, ModalLifecycle, ModalNotice,
    ModalOptions,
};

use super::*;
use crate::{
    dom::{target_is_current, WebModalHost},
    slots::{BackdropSlotProps, RenderSlot},
};

#[component]
/// Dialog overlay with backdrop, focus management, and page scroll lock.
///
/// `open` is always owned by the caller. Escape and backdrop clicks only request closure through
/// `on_close`; the modal stays open until `open` turns false. Every `Option` flag falls back to
/// the provider's modal defaults.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] backdrop: Option<BackdropMode>,
    #[prop(optional, into)] close_on_escape: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] close_on_backdrop_click: Option<MaybeSignal<bool>>,
    #[prop(optional)] keep_mounted: Option<bool>,
    #[prop(optional)] disable_auto_focus: Option<bool>,
    #[prop(optional)] disable_enforce_focus: Option<bool>,
    #[prop(optional)] disable_restore_focus: Option<bool>,
    #[prop(optional)] disable_scroll_lock: Option<bool>,
    #[prop(optional)] disable_portal: Option<bool>,
    /// Portal mount point. Defaults to the document body.
    #[prop(optional)]
    container: Option<web_sys::Element>,
    #[prop(optional)] backdrop_slot: Option<RenderSlot<BackdropSlotProps>>,
    #[prop(optional)] on_close: Option<Callback<(web_sys::Event, CloseReason)>>,
    #[prop(optional)] on_enter: Option<Callback<()>>,
    #[prop(optional)] on_exited: Option<Callback<()>>,
    #[prop(optional, into)] aria_labelledby: Option<String>,
    #[prop(optional, into)] aria_describedby: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let kit = use_kit_config();
    let defaults = kit.modal();
    let options = create_memo(move |_| ModalOptions {
        backdrop: backdrop.unwrap_or(defaults.backdrop),
        close_on_backdrop_click: close_on_backdrop_click
            .map_or(defaults.close_on_backdrop_click, |flag| flag.get()),
        close_on_escape: close_on_escape.map_or(defaults.close_on_escape, |flag| flag.get()),
        keep_mounted: keep_mounted.unwrap_or(defaults.keep_mounted),
        disable_auto_focus: disable_auto_focus.unwrap_or(defaults.disable_auto_focus),
        disable_enforce_focus: disable_enforce_focus.unwrap_or(defaults.disable_enforce_focus),
        disable_restore_focus: disable_restore_focus.unwrap_or(defaults.disable_restore_focus),
        disable_scroll_lock: disable_scroll_lock.unwrap_or(defaults.disable_scroll_lock),
        disable_portal: disable_portal.unwrap_or(defaults.disable_portal),
    });

    let content_ref = create_node_ref::<html::Div>();
    let lifecycle = store_value(ModalLifecycle::new(
        WebModalHost::new(content_ref),
        options.get_untracked(),
    ));
    let close_handler = on_close.map(|on_close| -> CloseHandler<web_sys::Event> {
        Rc::new(move |ev: &web_sys::Event, reason| on_close.call((ev.clone(), reason)))
    });
    lifecycle.with_value(|lifecycle| lifecycle.set_on_close(close_handler));
    let closer = store_value(lifecycle.with_value(ModalLifecycle::closer));

    let notify = move |notice: Option<ModalNotice>| match notice {
        Some(ModalNotice::Entered) => {
            if let Some(on_enter) = on_enter.as_ref() {
                on_enter.call(());
            }
        }
        Some(ModalNotice::Exited) => {
            if let Some(on_exited) = on_exited.as_ref() {
                on_exited.call(());
            }
        }
        None => {}
    };

    create_effect(move |_| {
        let options = options.get();
        lifecycle.with_value(|lifecycle| lifecycle.set_options(options));
    });

    create_effect(move |_| {
        let open = open.get();
        let notice = lifecycle
            .try_update_value(|lifecycle| lifecycle.set_open(open))
            .flatten();
        notify(notice);
    });

    on_cleanup(move || {
        let notice = lifecycle
            .try_update_value(|lifecycle| lifecycle.teardown())
            .flatten();
        notify(notice);
    });

    let on_backdrop_click = Callback::new(move |ev: MouseEvent| {
        let event: &web_sys::Event = ev.as_ref();
        let target_is_backdrop = target_is_current(event);
        let _ = closer
            .get_value()
            .backdrop_click(event, target_is_backdrop);
    });

    let classes = create_memo(move |_| {
        modal_classes(open.get(), options.with(ModalOptions::renders_backdrop))
    });
    let children = store_value(children);
    let labels = store_value((aria_labelledby, aria_describedby));
    let container = store_value(container);

    let body = move || {
        let backdrop_view = options.with(ModalOptions::renders_backdrop).then(|| {
            let props = BackdropSlotProps {
                class: kit.class(&classes.get_untracked().backdrop),
                on_click: on_backdrop_click,
            };
            match backdrop_slot {
                Some(slot) => slot.call(props),
                None => view! {
                    <div
                        class=props.class
                        aria-hidden="true"
                        data-ui-slot="backdrop"
                        on:click=move |ev| props.on_click.call(ev)
                    ></div>
                }
                .into_view(),
            }
        });
        let (labelled_by, described_by) = labels.get_value();

        view! {
            <div
                class=move || merge_layout_class(kit, classes.get().root, layout_class)
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-open=move || bool_token(open.get())
            >
                {backdrop_view}
                <div
                    node_ref=content_ref
                    class=move || kit.class(&classes.get().content)
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=labelled_by
                    aria-describedby=described_by
                    tabindex="-1"
                >
                    {children.with_value(|children| children())}
                </div>
            </div>
        }
    };

    view! {
        <Show when=move || open.get() || options.with(|options| options.keep_mounted)>
            {move || {
                if options.with(|options| options.disable_portal) {
                    return body().into_view();
                }
                match container.get_value() {
                    Some(mount) => view! { <Portal mount=mount>{body}</Portal> }.into_view(),
                    None => view! { <Portal>{body}</Portal> }.into_view(),
                }
            }}
        </Show>
    }
}
