//! Integration tests for the notification lifecycle, debouncing and the
//! confirmation gate
//!
//! Timing is deterministic: the lifecycle API takes explicit `Instant`s,
//! so these tests construct the timeline instead of sleeping.

use flashtui::confirm::ConfirmGate;
use flashtui::debounce::Debouncer;
use flashtui::notify::{NotificationCenter, NotificationKind, NotificationState};
use std::time::{Duration, Instant};

fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

#[test]
fn test_toast_is_removed_within_5500ms_without_interaction() {
    let start = Instant::now();
    let mut center = NotificationCenter::new();
    let id = center.show_toast("Saved", NotificationKind::Success, start);

    assert_eq!(center.get(id).unwrap().kind, NotificationKind::Success);

    // Still visible through the full display window
    center.tick(at(start, 4999));
    assert_eq!(center.get(id).unwrap().state(), NotificationState::Visible);

    // Fading once the 5000 ms deadline passes, gone after the 500 ms fade
    center.tick(at(start, 5000));
    assert!(center.get(id).unwrap().is_fading());
    center.tick(at(start, 5500));
    assert!(center.get(id).is_none());
}

#[test]
fn test_alert_clicked_at_1000ms_is_gone_by_1300ms() {
    let start = Instant::now();
    let mut center = NotificationCenter::new();
    let id = center.attach_alert("Session expired", NotificationKind::Warning, start);

    center.dismiss(id, at(start, 1000));
    center.tick(at(start, 1300));
    assert!(center.get(id).is_none());

    // The original 5000 ms auto-dismiss deadline passing later must be a
    // silent no-op
    center.tick(at(start, 5000));
    center.tick(at(start, 6000));
    assert!(center.is_empty());
}

#[test]
fn test_removal_is_idempotent() {
    let start = Instant::now();
    let mut center = NotificationCenter::new();
    let id = center.show_toast("once only", NotificationKind::Info, start);

    center.dismiss(id, at(start, 100));
    center.dismiss(id, at(start, 150));
    center.tick(at(start, 400));
    assert!(center.get(id).is_none());

    // Dismissing an already-removed notification does nothing
    center.dismiss(id, at(start, 500));
    center.tick(at(start, 600));
    assert!(center.is_empty());
}

#[test]
fn test_alerts_and_toasts_share_one_lifecycle() {
    let start = Instant::now();
    let mut center = NotificationCenter::new();
    center.attach_alert("from the page", NotificationKind::Unstyled, start);
    center.show_toast("from the app", NotificationKind::Info, at(start, 1000));

    center.tick(at(start, 5500));
    // The alert (created at t=0) is gone, the toast (t=1000) still lives
    let remaining: Vec<_> = center.on_screen().collect();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].message, "from the app");

    center.tick(at(start, 6000));
    center.tick(at(start, 6600));
    assert!(center.is_empty());
}

#[test]
fn test_unrecognized_kind_name_defaults_to_info() {
    let start = Instant::now();
    let mut center = NotificationCenter::new();
    let id = center.show_toast_named("odd kind", "sparkle", start);
    assert_eq!(center.get(id).unwrap().kind, NotificationKind::Info);

    for (name, kind) in [
        ("success", NotificationKind::Success),
        ("error", NotificationKind::Error),
        ("warning", NotificationKind::Warning),
        ("info", NotificationKind::Info),
    ] {
        assert_eq!(NotificationKind::from_name(name), kind);
    }
}

#[test]
fn test_debounce_burst_fires_once_with_latest_arguments() {
    let start = Instant::now();
    let mut debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(50));

    debouncer.call("t0", start);
    debouncer.call("t10", at(start, 10));
    debouncer.call("t20", at(start, 20));

    let mut fired = Vec::new();
    for ms in [30, 50, 69, 70, 71, 120] {
        if let Some(value) = debouncer.poll(at(start, ms)) {
            fired.push((ms, value));
        }
    }
    assert_eq!(fired, vec![(70, "t20")]);
}

#[test]
fn test_debounce_windows_are_independent_per_instance() {
    let start = Instant::now();
    let mut first: Debouncer<u32> = Debouncer::new(Duration::from_millis(50));
    let mut second: Debouncer<u32> = Debouncer::new(Duration::from_millis(50));

    first.call(1, start);
    second.call(2, at(start, 40));

    assert_eq!(first.poll(at(start, 50)), Some(1));
    assert_eq!(second.poll(at(start, 50)), None);
    assert_eq!(second.poll(at(start, 90)), Some(2));
}

#[test]
fn test_confirm_gate_runs_action_only_on_yes() {
    let mut gate: ConfirmGate<&str> = ConfirmGate::new();

    gate.request("Delete everything?", "delete");
    assert_eq!(gate.message(), Some("Delete everything?"));
    assert_eq!(gate.resolve(false), None);

    gate.request("Delete everything?", "delete");
    assert_eq!(gate.resolve(true), Some("delete"));
    assert!(!gate.is_open());
}
