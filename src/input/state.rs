//! Gesture and decision state records.
//!
//! Two records with deliberately different lifecycles back the engine:
//!
//! - [`GestureState`] lives from a press to its resolving release and is
//!   reset to an immutable default snapshot at the end of every gesture.
//! - [`DecisionState`] survives across the up/down boundary of a single
//!   click, because the classification of that click (single vs. double)
//!   is still open when its release arrives.

use crate::types::{ButtonMask, PointerPoint, RawPointerEvent, SurfaceId};

// ============================================================================
// Gesture State
// ============================================================================

/// Mutable state of the in-flight gesture.
///
/// Exactly one instance lives per engine; `reset` restores the default
/// snapshot between gestures so nothing leaks into the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureState {
    /// Buttons currently down on the tracked surface.
    pub buttons: ButtonMask,
    /// Surface this gesture is tracked on; `None` when idle.
    pub surface: Option<SurfaceId>,
    /// False once movement or elapsed hold time has disqualified a `click`
    /// classification. Independent of double-click logic.
    pub still_click: bool,
    /// Coordinates (all four spaces) at gesture start.
    pub start: PointerPoint,
    /// Coordinates at the last processed sample.
    pub last: PointerPoint,
}

impl GestureState {
    /// Begin a fresh gesture. Start and last coincide until the first
    /// processed move.
    pub fn begin(&mut self, surface: SurfaceId, buttons: ButtonMask, point: PointerPoint) {
        self.surface = Some(surface);
        self.buttons = buttons;
        self.still_click = true;
        self.start = point;
        self.last = point;
    }

    /// True while a gesture is being tracked.
    pub fn is_active(&self) -> bool {
        self.surface.is_some()
    }

    /// Movement or hold time ruled out a `click` on release.
    pub fn disqualify_click(&mut self) {
        self.still_click = false;
    }

    /// Record a processed sample.
    pub fn update_last(&mut self, point: PointerPoint) {
        self.last = point;
    }

    /// Restore the default snapshot.
    pub fn reset(&mut self) {
        *self = GestureState::default();
    }
}

// ============================================================================
// Decision State
// ============================================================================

/// Pending double-click decision: the buffered originals awaiting replay and
/// the one-shot native-notification suppression flag.
///
/// The decision timer itself lives in [`super::TimerSet`]; the engine keeps
/// the invariant that `first_press` is non-null iff that timer is armed or a
/// finalize is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecisionState {
    first_press: Option<RawPointerEvent>,
    first_release: Option<RawPointerEvent>,
    suppress_native_double: bool,
}

impl DecisionState {
    /// A press is buffered and awaiting classification.
    pub fn is_pending(&self) -> bool {
        self.first_press.is_some()
    }

    /// The first release of the prospective double click is buffered too.
    pub fn has_buffered_release(&self) -> bool {
        self.first_release.is_some()
    }

    /// Button mask of the buffered press, if any.
    pub fn pending_buttons(&self) -> Option<ButtonMask> {
        self.first_press.map(|raw| raw.buttons)
    }

    pub fn buffer_press(&mut self, raw: RawPointerEvent) {
        self.first_press = Some(raw);
    }

    pub fn buffer_release(&mut self, raw: RawPointerEvent) {
        self.first_release = Some(raw);
    }

    /// Take both buffered events, clearing the pending state before any
    /// replay work happens. Returns `None` when nothing is pending, which
    /// makes a second finalize in a row a no-op.
    pub fn take_buffered(&mut self) -> Option<(RawPointerEvent, Option<RawPointerEvent>)> {
        let press = self.first_press.take()?;
        Some((press, self.first_release.take()))
    }

    /// Drop buffered events without replaying them (confirmed double
    /// interaction, or safety-net cleanup).
    pub fn drop_buffered(&mut self) {
        self.first_press = None;
        self.first_release = None;
    }

    /// Arm the one-shot suppression of the next native double-click
    /// notification. Harmless if no notification ever arrives.
    pub fn mark_suppression(&mut self) {
        self.suppress_native_double = true;
    }

    /// Reset the suppression flag at the start of a new gesture.
    pub fn clear_suppression(&mut self) {
        self.suppress_native_double = false;
    }

    /// Consume the suppression flag; true if it was set.
    pub fn consume_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_native_double)
    }

    #[cfg(test)]
    pub fn suppression_armed(&self) -> bool {
        self.suppress_native_double
    }
}
