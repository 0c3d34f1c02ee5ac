//! Modal open/close lifecycle: focus capture and restoration, scroll lock, document listeners,
//! and deferred auto-focus, bracketed strictly by entry into and exit from the open state.
//!
//! [`ModalLifecycle`] is driven by the resolved `open` flag. Every side effect installed on entry
//! is recorded and released by the matching exit, whichever path causes it: a prop change,
//! [`ModalLifecycle::teardown`], or dropping the lifecycle.

pub mod host;

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use serde::{Deserialize, Serialize};

use self::host::ModalHost;
use crate::focus_trap::next_trap_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Backdrop rendering and click behavior.
pub enum BackdropMode {
    /// Backdrop rendered; clicks may close.
    Visible,
    /// No backdrop element.
    Hidden,
    /// Backdrop rendered; clicks never close.
    Static,
}

impl Default for BackdropMode {
    fn default() -> Self {
        Self::Visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Modal feature toggles. Each `disable_*` flag removes one lifecycle behavior.
pub struct ModalOptions {
    /// Backdrop mode.
    pub backdrop: BackdropMode,
    /// Clicking the backdrop itself requests close.
    pub close_on_backdrop_click: bool,
    /// Escape requests close.
    pub close_on_escape: bool,
    /// Content stays in the tree while closed.
    pub keep_mounted: bool,
    /// Skip the deferred auto-focus step.
    pub disable_auto_focus: bool,
    /// Skip the focus-in redirect listener.
    pub disable_enforce_focus: bool,
    /// Skip capturing and restoring prior focus.
    pub disable_restore_focus: bool,
    /// Leave page scrolling untouched.
    pub disable_scroll_lock: bool,
    /// Render in place instead of portaling.
    pub disable_portal: bool,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            backdrop: BackdropMode::Visible,
            close_on_backdrop_click: true,
            close_on_escape: true,
            keep_mounted: false,
            disable_auto_focus: false,
            disable_enforce_focus: false,
            disable_restore_focus: false,
            disable_scroll_lock: false,
            disable_portal: false,
        }
    }
}

impl ModalOptions {
    /// Whether a backdrop element is rendered.
    pub fn renders_backdrop(&self) -> bool {
        !matches!(self.backdrop, BackdropMode::Hidden)
    }

    /// Only clicks whose target is the backdrop element count; static backdrops never close.
    pub fn backdrop_click_closes(&self, target_is_backdrop: bool) -> bool {
        target_is_backdrop
            && self.close_on_backdrop_click
            && matches!(self.backdrop, BackdropMode::Visible)
    }

    /// Whether `key` closes a modal in the given open state.
    pub fn escape_closes(&self, open: bool, key: &str) -> bool {
        open && self.close_on_escape && key == "Escape"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why `on_close` was invoked.
pub enum CloseReason {
    /// Click on the backdrop element.
    BackdropClick,
    /// Escape key.
    EscapeKeyDown,
}

impl CloseReason {
    /// Wire name passed to callers that expect string reasons.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BackdropClick => "backdropClick",
            Self::EscapeKeyDown => "escapeKeyDown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle edge the caller must be notified about.
pub enum ModalNotice {
    /// Invoke `on_enter`.
    Entered,
    /// Invoke `on_exited`.
    Exited,
}

/// Close request handler: `(event, reason)`.
pub type CloseHandler<E> = Rc<dyn Fn(&E, CloseReason)>;

struct Shared<E> {
    options: Cell<ModalOptions>,
    open: Cell<bool>,
    focus_generation: Cell<u64>,
    on_close: RefCell<Option<CloseHandler<E>>>,
}

impl<E> Shared<E> {
    fn request_close(&self, event: &E, reason: CloseReason) {
        let handler = self.on_close.borrow().clone();
        if let Some(handler) = handler {
            handler(event, reason);
        }
    }

    fn next_focus_generation(&self) -> u64 {
        let generation = self.focus_generation.get().wrapping_add(1);
        self.focus_generation.set(generation);
        generation
    }
}

/// Close-request handle sharing the lifecycle's options, open flag and handler.
pub struct ModalCloser<E> {
    shared: Rc<Shared<E>>,
}

impl<E> Clone for ModalCloser<E> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<E> ModalCloser<E> {
    /// Requests close for a backdrop click when the options allow it.
    pub fn backdrop_click(&self, event: &E, target_is_backdrop: bool) -> bool {
        let options = self.shared.options.get();
        if !self.shared.open.get() || !options.backdrop_click_closes(target_is_backdrop) {
            return false;
        }
        self.shared.request_close(event, CloseReason::BackdropClick);
        true
    }
}

struct Installed<H: ModalHost> {
    prior_focus: Option<H::Element>,
    scroll_locked: bool,
    key_listener: H::Listener,
    focus_listener: Option<H::Listener>,
}

/// Side-effect manager for one modal instance.
pub struct ModalLifecycle<H: ModalHost> {
    host: H,
    trap_id: u64,
    shared: Rc<Shared<H::Event>>,
    installed: Option<Installed<H>>,
}

impl<H: ModalHost> ModalLifecycle<H> {
    /// Creates a closed lifecycle. Nothing is installed until [`ModalLifecycle::set_open`].
    pub fn new(host: H, options: ModalOptions) -> Self {
        Self {
            host,
            trap_id: next_trap_id(),
            shared: Rc::new(Shared {
                options: Cell::new(options),
                open: Cell::new(false),
                focus_generation: Cell::new(0),
                on_close: RefCell::new(None),
            }),
            installed: None,
        }
    }

    /// Host this lifecycle drives.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether the open-state side effects are installed.
    pub fn is_open(&self) -> bool {
        self.installed.is_some()
    }

    /// Current options.
    pub fn options(&self) -> ModalOptions {
        self.shared.options.get()
    }

    /// Replaces the options. Escape and backdrop decisions see the change immediately.
    pub fn set_options(&self, options: ModalOptions) {
        self.shared.options.set(options);
    }

    /// Replaces the close request handler.
    pub fn set_on_close(&self, handler: Option<CloseHandler<H::Event>>) {
        *self.shared.on_close.borrow_mut() = handler;
    }

    /// Applies the resolved open flag and reports the lifecycle edge it caused, if any.
    pub fn set_open(&mut self, open: bool) -> Option<ModalNotice> {
        match (open, self.installed.is_some()) {
            (true, false) => {
                let installed = self.install();
                self.installed = Some(installed);
                Some(ModalNotice::Entered)
            }
            (false, true) => {
                self.release();
                Some(ModalNotice::Exited)
            }
            _ => None,
        }
    }

    /// Unmount path. Equivalent to closing.
    pub fn teardown(&mut self) -> Option<ModalNotice> {
        self.set_open(false)
    }

    /// Backdrop click handler. Returns whether `on_close` was requested.
    pub fn backdrop_click(&self, event: &H::Event, target_is_backdrop: bool) -> bool {
        self.closer().backdrop_click(event, target_is_backdrop)
    }

    /// Detached handle for close requests that must not borrow the lifecycle.
    pub fn closer(&self) -> ModalCloser<H::Event> {
        ModalCloser {
            shared: Rc::clone(&self.shared),
        }
    }

    fn install(&mut self) -> Installed<H> {
        let options = self.shared.options.get();
        self.shared.open.set(true);

        let prior_focus = if options.disable_restore_focus {
            None
        } else {
            self.host.active_element()
        };

        let scroll_locked = !options.disable_scroll_lock;
        if scroll_locked {
            self.host.acquire_scroll_lock();
        }

        let shared = Rc::clone(&self.shared);
        let host = self.host.clone();
        let key_listener = self.host.listen_keydown(Rc::new(move |event: &H::Event, key: &str| {
            if shared.options.get().escape_closes(shared.open.get(), key) {
                host.stop_propagation(event);
                shared.request_close(event, CloseReason::EscapeKeyDown);
            }
        }));

        let focus_listener = (!options.disable_enforce_focus).then(|| {
            let shared = Rc::clone(&self.shared);
            let host = self.host.clone();
            let trap_id = self.trap_id;
            self.host.enter_focus_trap(trap_id);
            self.host.listen_focus_in(Rc::new(move || {
                if shared.open.get()
                    && host.is_top_focus_trap(trap_id)
                    && !host.focus_is_within_content()
                {
                    let _ = host.focus_content();
                }
            }))
        });

        if !options.disable_auto_focus {
            let generation = self.shared.next_focus_generation();
            let shared = Rc::clone(&self.shared);
            let host = self.host.clone();
            self.host.defer(Box::new(move || {
                let current = shared.open.get() && shared.focus_generation.get() == generation;
                if current && !host.focus_is_within_content() {
                    let _ = host.focus_content();
                }
            }));
        }

        Installed {
            prior_focus,
            scroll_locked,
            key_listener,
            focus_listener,
        }
    }

    fn release(&mut self) {
        let Some(installed) = self.installed.take() else {
            return;
        };
        self.shared.open.set(false);
        self.shared.next_focus_generation();

        if installed.scroll_locked {
            self.host.release_scroll_lock();
        }
        self.host.remove_listener(installed.key_listener);
        if let Some(listener) = installed.focus_listener {
            self.host.remove_listener(listener);
            self.host.leave_focus_trap(self.trap_id);
        }
        if let Some(prior) = installed.prior_focus {
            let _ = self.host.focus_element(&prior);
        }
    }
}

impl<H: ModalHost> Drop for ModalLifecycle<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn static_backdrop_ignores_generic_flag() {
        let options = ModalOptions {
            backdrop: BackdropMode::Static,
            ..ModalOptions::default()
        };
        assert!(!options.backdrop_click_closes(true));
        assert!(options.renders_backdrop());
    }

    #[test]
    fn bubbled_clicks_never_close() {
        let options = ModalOptions::default();
        assert!(!options.backdrop_click_closes(false));
        assert!(options.backdrop_click_closes(true));
    }

    #[test]
    fn escape_requires_open_flag_and_key() {
        let options = ModalOptions::default();
        assert!(options.escape_closes(true, "Escape"));
        assert!(!options.escape_closes(false, "Escape"));
        assert!(!options.escape_closes(true, "Enter"));
        let disabled = ModalOptions {
            close_on_escape: false,
            ..options
        };
        assert!(!disabled.escape_closes(true, "Escape"));
    }

    #[test]
    fn close_reasons_use_wire_names() {
        assert_eq!(CloseReason::BackdropClick.as_str(), "backdropClick");
        assert_eq!(CloseReason::EscapeKeyDown.as_str(), "escapeKeyDown");
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ModalOptions =
            serde_json::from_str(r#"{"backdrop":"static","keep_mounted":true}"#).expect("parse");
        assert_eq!(
            options,
            ModalOptions {
                backdrop: BackdropMode::Static,
                keep_mounted: true,
                ..ModalOptions::default()
            }
        );
    }
}
