use std::{cell::RefCell, rc::Rc};

use pretty_assertions::assert_eq;
use ui_headless::{
    BackdropMode, CloseReason, MemoryModalHost, ModalHost, ModalLifecycle, ModalNotice,
    ModalOptions,
};

fn recording_lifecycle(
    host: &MemoryModalHost,
    options: ModalOptions,
) -> (ModalLifecycle<MemoryModalHost>, Rc<RefCell<Vec<CloseReason>>>) {
    let reasons = Rc::new(RefCell::new(Vec::new()));
    let lifecycle = ModalLifecycle::new(host.clone(), options);
    let sink = Rc::clone(&reasons);
    lifecycle.set_on_close(Some(Rc::new(move |_event: &String, reason: CloseReason| {
        sink.borrow_mut().push(reason);
    })));
    (lifecycle, reasons)
}

#[test]
fn side_effects_balance_across_arbitrary_open_sequences() {
    let host = MemoryModalHost::new().with_content(&["ok"]);
    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());

    let sequence = [
        true, false, true, true, false, false, true, false, true, false, true,
    ];
    for open in sequence {
        let _ = lifecycle.set_open(open);
    }
    let _ = lifecycle.set_open(false);
    host.run_deferred();

    let counters = host.counters();
    assert_eq!(counters.scroll_acquired, counters.scroll_released);
    assert_eq!(counters.key_installed, counters.key_removed);
    assert_eq!(counters.focus_installed, counters.focus_removed);
    assert_eq!(counters.key_installed, 5);
    assert_eq!(host.live_listeners(), 0);
    assert!(!host.scroll_locked());
}

#[test]
fn entry_and_exit_each_notify_exactly_once() {
    let host = MemoryModalHost::new();
    let mut lifecycle = ModalLifecycle::new(host, ModalOptions::default());
    assert_eq!(lifecycle.set_open(true), Some(ModalNotice::Entered));
    assert_eq!(lifecycle.set_open(true), None);
    assert_eq!(lifecycle.set_open(false), Some(ModalNotice::Exited));
    assert_eq!(lifecycle.set_open(false), None);
    assert_eq!(lifecycle.teardown(), None);
}

#[test]
fn focus_returns_to_the_element_focused_before_opening() {
    let host = MemoryModalHost::new().with_content(&["first", "second"]);
    host.set_focus("trigger");
    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());

    let _ = lifecycle.set_open(true);
    host.run_deferred();
    assert_eq!(host.focused(), Some("first"));

    let _ = lifecycle.set_open(false);
    assert_eq!(host.focused(), Some("trigger"));
}

#[test]
fn prior_focus_is_not_reused_by_the_next_open_cycle() {
    let host = MemoryModalHost::new().with_content(&["first"]);
    host.set_focus("trigger");
    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());
    let _ = lifecycle.set_open(true);
    let _ = lifecycle.set_open(false);

    host.set_focus("other");
    let _ = lifecycle.set_open(true);
    host.run_deferred();
    let _ = lifecycle.set_open(false);
    assert_eq!(host.focused(), Some("other"));
}

#[test]
fn restore_is_skipped_when_disabled_or_detached() {
    let host = MemoryModalHost::new().with_content(&["first"]);
    host.set_focus("trigger");
    let options = ModalOptions {
        disable_restore_focus: true,
        ..ModalOptions::default()
    };
    let mut lifecycle = ModalLifecycle::new(host.clone(), options);
    let _ = lifecycle.set_open(true);
    host.run_deferred();
    let _ = lifecycle.set_open(false);
    assert_eq!(host.focused(), Some("first"));

    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());
    host.set_focus("gone");
    let _ = lifecycle.set_open(true);
    host.run_deferred();
    host.detach("gone");
    let _ = lifecycle.set_open(false);
    assert_eq!(host.focused(), Some("first"));
}

#[test]
fn auto_focus_falls_back_to_the_container() {
    let host = MemoryModalHost::new();
    host.set_focus("trigger");
    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());
    let _ = lifecycle.set_open(true);
    assert_eq!(host.focused(), Some("trigger"));
    host.run_deferred();
    assert_eq!(host.focused(), Some("modal"));
}

#[test]
fn closing_before_the_deferred_tick_cancels_auto_focus() {
    let host = MemoryModalHost::new().with_content(&["first"]);
    host.set_focus("trigger");
    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());

    let _ = lifecycle.set_open(true);
    let _ = lifecycle.set_open(false);
    host.set_content_mounted(false);
    host.run_deferred();

    assert_eq!(host.counters().content_focused, 0);
    assert_eq!(host.focused(), Some("trigger"));
}

#[test]
fn rapid_reopen_runs_only_the_latest_auto_focus() {
    let host = MemoryModalHost::new().with_content(&["first"]);
    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());
    let _ = lifecycle.set_open(true);
    let _ = lifecycle.set_open(false);
    let _ = lifecycle.set_open(true);
    assert_eq!(host.pending_deferred(), 2);

    host.run_deferred();
    assert_eq!(host.counters().content_focused, 1);
}

#[test]
fn disabled_auto_focus_leaves_focus_alone() {
    let host = MemoryModalHost::new().with_content(&["first"]);
    host.set_focus("trigger");
    let options = ModalOptions {
        disable_auto_focus: true,
        ..ModalOptions::default()
    };
    let mut lifecycle = ModalLifecycle::new(host.clone(), options);
    let _ = lifecycle.set_open(true);
    assert_eq!(host.pending_deferred(), 0);
    assert_eq!(host.focused(), Some("trigger"));
}

#[test]
fn escape_invokes_on_close_exactly_once() {
    let host = MemoryModalHost::new();
    let (mut lifecycle, reasons) = recording_lifecycle(&host, ModalOptions::default());
    let _ = lifecycle.set_open(true);

    host.dispatch_key("Enter");
    host.dispatch_key("Escape");
    assert_eq!(*reasons.borrow(), vec![CloseReason::EscapeKeyDown]);

    let _ = lifecycle.set_open(false);
    host.dispatch_key("Escape");
    assert_eq!(reasons.borrow().len(), 1);
}

#[test]
fn option_changes_apply_to_escape_while_open() {
    let host = MemoryModalHost::new();
    let (mut lifecycle, reasons) = recording_lifecycle(&host, ModalOptions::default());
    let _ = lifecycle.set_open(true);
    lifecycle.set_options(ModalOptions {
        close_on_escape: false,
        ..ModalOptions::default()
    });
    host.dispatch_key("Escape");
    assert!(reasons.borrow().is_empty());
}

#[test]
fn backdrop_clicks_close_only_on_the_backdrop_itself() {
    let host = MemoryModalHost::new();
    let (mut lifecycle, reasons) = recording_lifecycle(&host, ModalOptions::default());
    let event = "click".to_string();
    assert!(!lifecycle.backdrop_click(&event, true));

    let _ = lifecycle.set_open(true);
    assert!(!lifecycle.backdrop_click(&event, false));
    assert!(lifecycle.closer().backdrop_click(&event, true));
    assert_eq!(*reasons.borrow(), vec![CloseReason::BackdropClick]);

    lifecycle.set_options(ModalOptions {
        backdrop: BackdropMode::Static,
        ..ModalOptions::default()
    });
    assert!(!lifecycle.backdrop_click(&event, true));
    assert_eq!(reasons.borrow().len(), 1);
}

#[test]
fn focus_leaving_the_content_is_redirected_inside() {
    let host = MemoryModalHost::new().with_content(&["first", "second"]);
    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());
    let _ = lifecycle.set_open(true);
    host.run_deferred();

    host.dispatch_focus_in("second");
    assert_eq!(host.focused(), Some("second"));
    host.dispatch_focus_in("page-link");
    assert_eq!(host.focused(), Some("first"));
}

#[test]
fn disabled_enforcement_installs_no_focus_listener() {
    let host = MemoryModalHost::new().with_content(&["first"]);
    let options = ModalOptions {
        disable_enforce_focus: true,
        disable_scroll_lock: true,
        ..ModalOptions::default()
    };
    let mut lifecycle = ModalLifecycle::new(host.clone(), options);
    let _ = lifecycle.set_open(true);
    host.dispatch_focus_in("page-link");

    assert_eq!(host.focused(), Some("page-link"));
    assert_eq!(host.counters().focus_installed, 0);
    assert!(!host.scroll_locked());
}

#[test]
fn scroll_lock_set_at_entry_is_released_even_if_options_change() {
    let host = MemoryModalHost::new();
    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());
    let _ = lifecycle.set_open(true);
    lifecycle.set_options(ModalOptions {
        disable_scroll_lock: true,
        ..ModalOptions::default()
    });
    let _ = lifecycle.set_open(false);
    assert_eq!(host.counters().scroll_released, 1);
    assert!(!host.scroll_locked());
}

#[test]
fn nested_modals_keep_the_page_locked_until_the_outer_closes() {
    let outer_host = MemoryModalHost::new();
    let inner_host = outer_host.sibling("inner");
    let mut outer = ModalLifecycle::new(outer_host.clone(), ModalOptions::default());
    let mut inner = ModalLifecycle::new(inner_host.clone(), ModalOptions::default());

    let _ = outer.set_open(true);
    let _ = inner.set_open(true);
    let _ = inner.set_open(false);
    assert!(outer_host.scroll_locked());

    let _ = outer.set_open(false);
    assert!(!outer_host.scroll_locked());
}

#[test]
fn teardown_and_drop_release_everything() {
    let host = MemoryModalHost::new();
    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());
    let _ = lifecycle.set_open(true);
    assert_eq!(lifecycle.teardown(), Some(ModalNotice::Exited));
    assert_eq!(host.live_listeners(), 0);

    let mut dropped = ModalLifecycle::new(host.clone(), ModalOptions::default());
    let _ = dropped.set_open(true);
    assert!(host.scroll_locked());
    drop(dropped);
    assert_eq!(host.live_listeners(), 0);
    assert!(!host.scroll_locked());
}

#[test]
fn host_reports_focus_targets() {
    let host = MemoryModalHost::new();
    host.set_content_mounted(false);
    assert_eq!(host.focus_content(), ui_headless::AutoFocusTarget::Detached);
    host.set_content_mounted(true);
    assert_eq!(host.focus_content(), ui_headless::AutoFocusTarget::Container);
}

#[test]
fn unmounting_an_open_modal_reports_exit_once() {
    let host = MemoryModalHost::new().with_content(&["first"]);
    host.set_focus("trigger");
    let mut lifecycle = ModalLifecycle::new(host.clone(), ModalOptions::default());
    assert_eq!(lifecycle.set_open(true), Some(ModalNotice::Entered));

    assert_eq!(lifecycle.teardown(), Some(ModalNotice::Exited));
    assert_eq!(lifecycle.teardown(), None);
    assert_eq!(host.focused(), Some("trigger"));
    assert!(!host.scroll_locked());
}

#[test]
fn handled_escape_stops_propagation() {
    let host = MemoryModalHost::new();
    let (mut lifecycle, reasons) = recording_lifecycle(&host, ModalOptions::default());
    let _ = lifecycle.set_open(true);

    host.dispatch_key("Tab");
    assert_eq!(host.counters().propagation_stopped, 0);
    host.dispatch_key("Escape");
    assert_eq!(host.counters().propagation_stopped, 1);
    assert_eq!(reasons.borrow().len(), 1);

    lifecycle.set_options(ModalOptions {
        close_on_escape: false,
        ..ModalOptions::default()
    });
    host.dispatch_key("Escape");
    assert_eq!(host.counters().propagation_stopped, 1);
}

#[test]
fn only_the_topmost_modal_enforces_focus() {
    let outer_host = MemoryModalHost::new().with_content(&["outer-ok"]);
    let inner_host = outer_host.sibling("inner").with_content(&["inner-ok"]);
    let mut outer = ModalLifecycle::new(outer_host.clone(), ModalOptions::default());
    let mut inner = ModalLifecycle::new(inner_host.clone(), ModalOptions::default());

    let _ = outer.set_open(true);
    let _ = inner.set_open(true);
    assert_eq!(outer_host.focus_traps(), 2);

    outer_host.dispatch_focus_in("inner-ok");
    assert_eq!(outer_host.focused(), Some("inner-ok"));
    inner_host.dispatch_focus_in("page-link");
    assert_eq!(inner_host.focused(), Some("inner-ok"));

    let _ = inner.set_open(false);
    assert_eq!(outer_host.focus_traps(), 1);
    outer_host.dispatch_focus_in("page-link");
    assert_eq!(outer_host.focused(), Some("outer-ok"));

    let _ = outer.set_open(false);
    assert_eq!(outer_host.focus_traps(), 0);
}
