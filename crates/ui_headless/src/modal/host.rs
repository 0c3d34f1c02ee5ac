//! Host capability contract used by the modal lifecycle, plus an in-memory implementation.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::{focus_trap::FocusTrapStack, scroll_lock::ScrollLock};

/// Keydown handler: receives the host event and its `key` string.
pub type KeyHandler<E> = Rc<dyn Fn(&E, &str)>;
/// Focus-in handler invoked whenever focus moves anywhere in the document.
pub type FocusHandler = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of an auto-focus or focus-enforcement request.
pub enum AutoFocusTarget {
    /// Focus landed on the first focusable descendant.
    FirstFocusable,
    /// No focusable descendant exists; the content container took focus.
    Container,
    /// The content subtree is not mounted; nothing was focused.
    Detached,
}

/// Document capabilities a modal needs while it is open.
///
/// Implementations are cheap handles; clones refer to the same document.
pub trait ModalHost: Clone + 'static {
    /// Focusable element handle.
    type Element: Clone + 'static;
    /// Token identifying an installed listener.
    type Listener: 'static;
    /// Event passed through to `on_close`.
    type Event: 'static;

    /// Element currently holding focus, if any.
    fn active_element(&self) -> Option<Self::Element>;
    /// Moves focus to `element` if it is still attached to the document.
    fn focus_element(&self, element: &Self::Element) -> bool;
    /// Whether the focused element lies inside the modal content subtree.
    fn focus_is_within_content(&self) -> bool;
    /// Focuses the first focusable descendant of the content, or the container itself.
    fn focus_content(&self) -> AutoFocusTarget;
    /// Adds one scroll-lock holder.
    fn acquire_scroll_lock(&self);
    /// Removes one scroll-lock holder.
    fn release_scroll_lock(&self);
    /// Pushes a focus trap for the modal identified by `id`.
    fn enter_focus_trap(&self, id: u64);
    /// Removes the focus trap for `id`.
    fn leave_focus_trap(&self, id: u64);
    /// Whether `id` is the topmost focus trap; only that modal redirects focus.
    fn is_top_focus_trap(&self, id: u64) -> bool;
    /// Stops a handled event from reaching other listeners.
    fn stop_propagation(&self, event: &Self::Event);
    /// Installs a document-level keydown listener.
    fn listen_keydown(&self, handler: KeyHandler<Self::Event>) -> Self::Listener;
    /// Installs a document-level focus-in listener.
    fn listen_focus_in(&self, handler: FocusHandler) -> Self::Listener;
    /// Removes a listener installed by this host.
    fn remove_listener(&self, listener: Self::Listener);
    /// Runs `task` after the current render commit.
    fn defer(&self, task: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Side-effect counters recorded by [`MemoryModalHost`].
pub struct HostCounters {
    /// Scroll-lock acquisitions.
    pub scroll_acquired: usize,
    /// Scroll-lock releases.
    pub scroll_released: usize,
    /// Keydown listeners installed.
    pub key_installed: usize,
    /// Keydown listeners removed.
    pub key_removed: usize,
    /// Focus listeners installed.
    pub focus_installed: usize,
    /// Focus listeners removed.
    pub focus_removed: usize,
    /// Content auto-focus requests that ran.
    pub content_focused: usize,
    /// Events whose propagation was stopped.
    pub propagation_stopped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Listener token issued by [`MemoryModalHost`].
pub struct MemoryListener(u64);

/// Element handle in the in-memory document.
pub type MemoryElement = &'static str;

#[derive(Default)]
struct MemoryDocument {
    focused: Option<MemoryElement>,
    detached: Vec<MemoryElement>,
    content_elements: Vec<MemoryElement>,
    content_mounted: bool,
    container: MemoryElement,
    next_listener: u64,
    key_listeners: BTreeMap<u64, KeyHandler<String>>,
    focus_listeners: BTreeMap<u64, FocusHandler>,
    deferred: Vec<Box<dyn FnOnce()>>,
    counters: HostCounters,
}

#[derive(Clone)]
/// Single-threaded in-memory document for exercising modal lifecycles without a browser.
///
/// Elements are plain string names. The content subtree consists of the container plus the
/// focusable elements registered with [`MemoryModalHost::with_content`].
pub struct MemoryModalHost {
    document: Rc<RefCell<MemoryDocument>>,
    scroll_lock: Rc<RefCell<ScrollLock>>,
    focus_traps: Rc<RefCell<FocusTrapStack>>,
}

impl Default for MemoryModalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryModalHost {
    /// Creates a document with a mounted, empty content container named `"modal"`.
    pub fn new() -> Self {
        Self {
            document: Rc::new(RefCell::new(MemoryDocument {
                content_mounted: true,
                container: "modal",
                ..MemoryDocument::default()
            })),
            scroll_lock: Rc::new(RefCell::new(ScrollLock::default())),
            focus_traps: Rc::new(RefCell::new(FocusTrapStack::default())),
        }
    }

    /// Creates a second document view sharing this host's scroll lock and focus-trap stack, as
    /// another modal would.
    pub fn sibling(&self, container: MemoryElement) -> Self {
        let host = Self {
            document: Rc::new(RefCell::new(MemoryDocument {
                content_mounted: true,
                container,
                ..MemoryDocument::default()
            })),
            scroll_lock: Rc::clone(&self.scroll_lock),
            focus_traps: Rc::clone(&self.focus_traps),
        };
        host.document.borrow_mut().focused = self.focused();
        host
    }

    /// Registers focusable content descendants, in tab order.
    pub fn with_content(self, elements: &[MemoryElement]) -> Self {
        self.document.borrow_mut().content_elements = elements.to_vec();
        self
    }

    /// Moves focus directly, as a user click or tab would.
    pub fn set_focus(&self, element: MemoryElement) {
        self.document.borrow_mut().focused = Some(element);
    }

    /// Currently focused element.
    pub fn focused(&self) -> Option<MemoryElement> {
        self.document.borrow().focused
    }

    /// Detaches an element from the document so later focus requests against it fail.
    pub fn detach(&self, element: MemoryElement) {
        let mut document = self.document.borrow_mut();
        document.detached.push(element);
        if document.focused == Some(element) {
            document.focused = None;
        }
    }

    /// Mounts or unmounts the content subtree.
    pub fn set_content_mounted(&self, mounted: bool) {
        self.document.borrow_mut().content_mounted = mounted;
    }

    /// Side-effect counters so far.
    pub fn counters(&self) -> HostCounters {
        self.document.borrow().counters
    }

    /// Whether the shared scroll lock is engaged.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.borrow().is_engaged()
    }

    /// Number of open focus traps across this host and its siblings.
    pub fn focus_traps(&self) -> usize {
        self.focus_traps.borrow().len()
    }

    /// Number of currently installed listeners of either kind.
    pub fn live_listeners(&self) -> usize {
        let document = self.document.borrow();
        document.key_listeners.len() + document.focus_listeners.len()
    }

    /// Number of deferred tasks waiting to run.
    pub fn pending_deferred(&self) -> usize {
        self.document.borrow().deferred.len()
    }

    /// Runs every deferred task queued so far, including tasks queued while running.
    pub fn run_deferred(&self) {
        loop {
            let tasks = std::mem::take(&mut self.document.borrow_mut().deferred);
            if tasks.is_empty() {
                break;
            }
            for task in tasks {
                task();
            }
        }
    }

    /// Dispatches a keydown to every installed key listener.
    pub fn dispatch_key(&self, key: &str) {
        let handlers: Vec<_> = self
            .document
            .borrow()
            .key_listeners
            .values()
            .cloned()
            .collect();
        let event = key.to_string();
        for handler in handlers {
            handler(&event, key);
        }
    }

    /// Moves focus to `element` and notifies every focus listener.
    pub fn dispatch_focus_in(&self, element: MemoryElement) {
        self.set_focus(element);
        let handlers: Vec<_> = self
            .document
            .borrow()
            .focus_listeners
            .values()
            .cloned()
            .collect();
        for handler in handlers {
            handler();
        }
    }

    fn next_listener(document: &mut MemoryDocument) -> u64 {
        document.next_listener += 1;
        document.next_listener
    }
}

impl ModalHost for MemoryModalHost {
    type Element = MemoryElement;
    type Listener = MemoryListener;
    type Event = String;

    fn active_element(&self) -> Option<Self::Element> {
        self.focused()
    }

    fn focus_element(&self, element: &Self::Element) -> bool {
        let mut document = self.document.borrow_mut();
        if document.detached.contains(element) {
            return false;
        }
        document.focused = Some(*element);
        true
    }

    fn focus_is_within_content(&self) -> bool {
        let document = self.document.borrow();
        match document.focused {
            Some(element) => {
                element == document.container || document.content_elements.contains(&element)
            }
            None => false,
        }
    }

    fn focus_content(&self) -> AutoFocusTarget {
        let mut document = self.document.borrow_mut();
        if !document.content_mounted {
            return AutoFocusTarget::Detached;
        }
        document.counters.content_focused += 1;
        match document.content_elements.first().copied() {
            Some(first) => {
                document.focused = Some(first);
                AutoFocusTarget::FirstFocusable
            }
            None => {
                document.focused = Some(document.container);
                AutoFocusTarget::Container
            }
        }
    }

    fn acquire_scroll_lock(&self) {
        self.document.borrow_mut().counters.scroll_acquired += 1;
        let _ = self.scroll_lock.borrow_mut().acquire();
    }

    fn release_scroll_lock(&self) {
        self.document.borrow_mut().counters.scroll_released += 1;
        let _ = self.scroll_lock.borrow_mut().release();
    }

    fn enter_focus_trap(&self, id: u64) {
        self.focus_traps.borrow_mut().enter(id);
    }

    fn leave_focus_trap(&self, id: u64) {
        self.focus_traps.borrow_mut().leave(id);
    }

    fn is_top_focus_trap(&self, id: u64) -> bool {
        self.focus_traps.borrow().is_top(id)
    }

    fn stop_propagation(&self, _event: &Self::Event) {
        self.document.borrow_mut().counters.propagation_stopped += 1;
    }

    fn listen_keydown(&self, handler: KeyHandler<Self::Event>) -> Self::Listener {
        let mut document = self.document.borrow_mut();
        let id = Self::next_listener(&mut document);
        document.key_listeners.insert(id, handler);
        document.counters.key_installed += 1;
        MemoryListener(id)
    }

    fn listen_focus_in(&self, handler: FocusHandler) -> Self::Listener {
        let mut document = self.document.borrow_mut();
        let id = Self::next_listener(&mut document);
        document.focus_listeners.insert(id, handler);
        document.counters.focus_installed += 1;
        MemoryListener(id)
    }

    fn remove_listener(&self, listener: Self::Listener) {
        let mut document = self.document.borrow_mut();
        if document.key_listeners.remove(&listener.0).is_some() {
            document.counters.key_removed += 1;
        } else if document.focus_listeners.remove(&listener.0).is_some() {
            document.counters.focus_removed += 1;
        }
    }

    fn defer(&self, task: Box<dyn FnOnce()>) {
        self.document.borrow_mut().deferred.push(task);
    }
}
