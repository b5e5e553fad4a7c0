//! Double-click confirmation and native-notification handling.

use crate::helpers::GestureHarness;
use pointer_gestures::{ButtonMask, NativeDoubleClick, SemanticEvent};

use SemanticEvent::{Press, PressActivate, Release};

#[test]
fn test_confirmed_double_swallows_both_pairs() {
    let mut h = GestureHarness::new();
    h.press(0, ButtonMask::PRIMARY);
    h.release(50);
    h.press(100, ButtonMask::PRIMARY);
    h.release(150);

    assert!(h.events().is_empty());
    assert!(!h.engine().gesture().is_active());
    assert_eq!(h.engine().next_deadline(), None);
}

#[test]
fn test_native_notification_suppressed_exactly_once() {
    let mut h = GestureHarness::new();
    h.press(0, ButtonMask::PRIMARY);
    h.release(50);
    h.press(100, ButtonMask::PRIMARY);
    h.release(150);

    assert_eq!(
        h.engine_mut().native_double_click(160),
        NativeDoubleClick::Suppressed
    );
    // A repeated notification has no matching gesture anymore.
    assert_eq!(
        h.engine_mut().native_double_click(170),
        NativeDoubleClick::PassThrough
    );
}

#[test]
fn test_native_notification_after_single_replay_is_suppressed() {
    // Some hosts deliver the native double-click even when the engine has
    // already classified the presses as two singles; it must not leak
    // through as a third interpretation.
    let mut h = GestureHarness::new();
    h.press(0, ButtonMask::PRIMARY);
    h.release(50);
    h.tick(400);
    assert_eq!(h.names(), vec![Press, PressActivate, Release]);

    assert_eq!(
        h.engine_mut().native_double_click(410),
        NativeDoubleClick::Suppressed
    );
}

#[test]
fn test_jitter_between_taps_still_confirms_double() {
    let mut h = GestureHarness::new();
    h.press(0, ButtonMask::PRIMARY);
    h.release(50);
    assert!(!h.move_to(70, 101.0, 101.0));
    h.press(100, ButtonMask::PRIMARY);
    h.release(150);
    assert!(h.events().is_empty());
}

#[test]
fn test_slow_second_tap_is_two_singles() {
    let mut h = GestureHarness::new();
    h.press(0, ButtonMask::PRIMARY);
    h.release(50);
    h.tick(400);
    // Second tap lands after the window closed: a fresh gesture.
    h.press(500, ButtonMask::PRIMARY);
    h.release(550);
    h.tick(900);

    assert_eq!(
        h.names(),
        vec![Press, PressActivate, Release, Press, PressActivate, Release]
    );
}

#[test]
fn test_unsolicited_native_notification_passes_through() {
    let mut h = GestureHarness::new();
    assert_eq!(
        h.engine_mut().native_double_click(0),
        NativeDoubleClick::PassThrough
    );
    assert!(h.events().is_empty());
}

#[test]
fn test_orphaned_notification_discards_pending_decision() {
    let mut h = GestureHarness::new();
    h.press(0, ButtonMask::PRIMARY);
    assert_eq!(
        h.engine_mut().native_double_click(20),
        NativeDoubleClick::PassThrough
    );
    // The buffered press must never replay after the cleanup.
    h.tick(1000);
    assert!(h.events().is_empty());
    assert_eq!(h.engine().next_deadline(), None);
}
