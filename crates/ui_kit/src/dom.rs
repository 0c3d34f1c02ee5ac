//! Browser adapters: focus helpers, document scroll lock, and the [`WebModalHost`].

use std::cell::RefCell;

use leptos::{
    ev, html, leptos_dom::helpers::WindowListenerHandle, logging, window_event_listener, NodeRef,
};
use ui_headless::{
    focus_trap::with_document_traps,
    modal::host::{FocusHandler, KeyHandler},
    scroll_lock::{with_document_lock, ScrollLockChange},
    AutoFocusTarget, ModalHost,
};
use wasm_bindgen::JsCast;

const FOCUSABLE_SELECTOR: &str = "button:not([disabled]), [href], input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

thread_local! {
    static SAVED_BODY_OVERFLOW: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub(crate) fn document() -> Option<web_sys::Document> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.document())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Returns the current active element as an [`web_sys::HtmlElement`] when possible.
pub(crate) fn active_html_element() -> Option<web_sys::HtmlElement> {
    document()
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an HTML element, ignoring browser focus errors.
pub(crate) fn focus_html_element(element: &web_sys::HtmlElement) {
    let _ = element.focus();
}

/// Whether `target` is `root` or one of its descendants.
pub(crate) fn node_contains(root: &web_sys::Node, target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| root.contains(Some(&node)))
}

/// Whether the event was dispatched on the element that owns the listener.
pub(crate) fn target_is_current(ev: &web_sys::Event) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

fn first_focusable(container: &web_sys::Element) -> Option<web_sys::HtmlElement> {
    container
        .query_selector(FOCUSABLE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

fn apply_body_scroll_change(change: ScrollLockChange) {
    let Some(body) = document().and_then(|document| document.body()) else {
        return;
    };
    let style = body.style();
    match change {
        ScrollLockChange::Engage => {
            let prior = style.get_property_value("overflow").unwrap_or_default();
            SAVED_BODY_OVERFLOW.with(|saved| *saved.borrow_mut() = Some(prior));
            let _ = style.set_property("overflow", "hidden");
        }
        ScrollLockChange::Restore => {
            let prior = SAVED_BODY_OVERFLOW.with(|saved| saved.borrow_mut().take());
            match prior.filter(|prior| !prior.is_empty()) {
                Some(prior) => {
                    let _ = style.set_property("overflow", &prior);
                }
                None => {
                    let _ = style.remove_property("overflow");
                }
            }
        }
    }
}

fn defer_to_next_tick(task: Box<dyn FnOnce()>) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || task());
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    drop(task);
}

#[derive(Clone, Copy)]
/// [`ModalHost`] over the live document, scoped to one modal's content container.
pub struct WebModalHost {
    content: NodeRef<html::Div>,
}

impl WebModalHost {
    /// Creates a host whose content subtree is the element bound to `content`.
    pub fn new(content: NodeRef<html::Div>) -> Self {
        Self { content }
    }

    fn container(&self) -> Option<web_sys::HtmlElement> {
        self.content
            .get_untracked()
            .map(|content| content.unchecked_ref::<web_sys::HtmlElement>().clone())
            .filter(|content| content.is_connected())
    }
}

impl ModalHost for WebModalHost {
    type Element = web_sys::HtmlElement;
    type Listener = WindowListenerHandle;
    type Event = web_sys::Event;

    fn active_element(&self) -> Option<Self::Element> {
        active_html_element()
    }

    fn focus_element(&self, element: &Self::Element) -> bool {
        if !element.is_connected() {
            return false;
        }
        focus_html_element(element);
        true
    }

    fn focus_is_within_content(&self) -> bool {
        let Some(container) = self.container() else {
            return false;
        };
        active_html_element()
            .is_some_and(|active| container.contains(Some(active.unchecked_ref::<web_sys::Node>())))
    }

    fn focus_content(&self) -> AutoFocusTarget {
        let Some(container) = self.container() else {
            logging::debug_warn!("modal auto-focus skipped: content is not mounted");
            return AutoFocusTarget::Detached;
        };
        match first_focusable(&container) {
            Some(first) => {
                focus_html_element(&first);
                AutoFocusTarget::FirstFocusable
            }
            None => {
                focus_html_element(&container);
                AutoFocusTarget::Container
            }
        }
    }

    fn acquire_scroll_lock(&self) {
        if let Some(change) = with_document_lock(|lock| lock.acquire()) {
            apply_body_scroll_change(change);
        }
    }

    fn release_scroll_lock(&self) {
        if let Some(change) = with_document_lock(|lock| lock.release()) {
            apply_body_scroll_change(change);
        }
    }

    fn enter_focus_trap(&self, id: u64) {
        with_document_traps(|traps| traps.enter(id));
    }

    fn leave_focus_trap(&self, id: u64) {
        with_document_traps(|traps| traps.leave(id));
    }

    fn is_top_focus_trap(&self, id: u64) -> bool {
        with_document_traps(|traps| traps.is_top(id))
    }

    fn stop_propagation(&self, event: &Self::Event) {
        event.stop_propagation();
    }

    fn listen_keydown(&self, handler: KeyHandler<Self::Event>) -> Self::Listener {
        window_event_listener(ev::keydown, move |ev| {
            let key = ev.key();
            let event: &web_sys::Event = ev.as_ref();
            handler(event, &key);
        })
    }

    fn listen_focus_in(&self, handler: FocusHandler) -> Self::Listener {
        window_event_listener(ev::focusin, move |_| handler())
    }

    fn remove_listener(&self, listener: Self::Listener) {
        listener.remove();
    }

    fn defer(&self, task: Box<dyn FnOnce()>) {
        defer_to_next_tick(task);
    }
}
