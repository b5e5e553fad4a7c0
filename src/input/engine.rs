//! The disambiguation engine.
//!
//! ## Decision flow
//!
//! ```text
//! raw press   -> buffer + arm decision timer (400ms single / 150ms chord)
//! raw move    -> buffered distance-only; > tolerance forces finalize
//! raw release -> buffered (inside window) or handled as click/release
//! second press, same mask      -> ignored (noise / prospective double)
//! second press, different mask -> force finalize
//! second release inside window -> confirmed double, both pairs swallowed
//! timer fires -> finalize: replay buffered press (+ release)
//! ```
//!
//! Finalize is the sole cancellation path: it clears the armed deadline and
//! the buffered events before any replay work, so a stale timer can never
//! fire against already-finalized state and calling it twice is a no-op.
//!
//! ## Performance Notes
//!
//! Pointer move is a hot path during drags (60+ events per second). The
//! handlers stay allocation-free; enable the `profiling` feature to see
//! per-handler timing.

use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::events::{EventDetail, EventSink, SemanticEvent};
use crate::input::state::{DecisionState, GestureState};
use crate::input::timer::{TimerKind, TimerSet};
use crate::profile_scope;
use crate::sampler::PointSampler;
use crate::types::{EngineId, PointerDelta, PointerPoint, RawPointerEvent, SurfaceId};

/// What the host should do with a native double-click notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeDoubleClick {
    /// The engine already resolved the underlying presses; block the
    /// notification from reaching later-registered handlers.
    Suppressed,
    /// Orphaned notification (its presses never reached this engine). The
    /// engine performed a safety-net cleanup; let the notification pass.
    PassThrough,
}

/// Pointer-input disambiguation engine for one pointing device on one
/// surface at a time.
///
/// All handlers run on a single logical thread and never block; the engine
/// "waits" by arming deadlines the host drives via [`tick`](Self::tick) and
/// [`next_deadline`](Self::next_deadline). Every raw-event entry point first
/// fires deadlines at or before the event's own timestamp, so a timer is
/// never observed late relative to the raw stream.
pub struct PointerEngine<S: PointSampler, E: EventSink> {
    engine_id: EngineId,
    config: EngineConfig,
    sampler: S,
    sink: E,
    gesture: GestureState,
    decision: DecisionState,
    timers: TimerSet,
}

impl<S: PointSampler, E: EventSink> PointerEngine<S, E> {
    pub fn new(engine_id: EngineId, config: EngineConfig, sampler: S, sink: E) -> Self {
        Self {
            engine_id,
            config,
            sampler,
            sink,
            gesture: GestureState::default(),
            decision: DecisionState::default(),
            timers: TimerSet::default(),
        }
    }

    /// The sink, for hosts (and tests) that need the delivered events back.
    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }

    /// Current gesture state snapshot.
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Earliest armed deadline in host milliseconds. The host must call
    /// [`tick`](Self::tick) at (or any time after) this deadline if no raw
    /// event arrives first.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Fire every deadline at or before `now_ms`, in deadline order.
    pub fn tick(&mut self, now_ms: u64) {
        while let Some(kind) = self.timers.pop_due(now_ms) {
            match kind {
                TimerKind::Decision => {
                    trace!(now_ms, "decision window elapsed");
                    self.finalize(now_ms);
                }
                TimerKind::ClickDisqualify => {
                    // Only a button still held past the delay disqualifies;
                    // the mask stays set while a release is merely buffered,
                    // which is deliberate: a buffered pair replayed after the
                    // full decision window is reported as press/release.
                    if self.gesture.is_active() && !self.gesture.buttons.is_empty() {
                        trace!(now_ms, "hold exceeded click window");
                        self.gesture.disqualify_click();
                    }
                }
            }
        }
    }

    // ========================================================================
    // Raw event handlers
    // ========================================================================

    /// Handle a raw press event.
    pub fn pointer_down(&mut self, raw: RawPointerEvent, surface: SurfaceId) {
        profile_scope!("pointer_down");
        self.tick(raw.time_ms);

        if self.timers.is_armed(TimerKind::Decision) {
            if self.decision.pending_buttons() == Some(raw.buttons) {
                // Either duplicate delivery from the input source or the
                // second press of a prospective double click; the second
                // release decides which.
                trace!(buttons = raw.buttons.0, "repeated press ignored");
                return;
            }
            // A different button joined the gesture. Resolve the pending
            // decision now; combinations past two buttons are not handled.
            debug!(
                pending = self.decision.pending_buttons().map(|b| b.0),
                new = raw.buttons.0,
                "second button forces finalize"
            );
            self.finalize(raw.time_ms);
            return;
        }

        let point = self.sampler.sample(&raw, surface);
        self.gesture.begin(surface, raw.buttons, point);

        let window_ms = if raw.buttons.is_chord() {
            self.config.chord_window_ms
        } else {
            self.config.single_button_window_ms
        };
        self.timers.arm(TimerKind::Decision, raw.time_ms + window_ms);
        self.timers.arm(
            TimerKind::ClickDisqualify,
            raw.time_ms + self.config.click_disqualify_ms,
        );
        self.decision.clear_suppression();
        self.decision.buffer_press(raw);
        trace!(
            time_ms = raw.time_ms,
            buttons = raw.buttons.0,
            window_ms,
            "press buffered"
        );
    }

    /// Handle a raw move event. Returns `true` if a listener claimed the
    /// resulting `drag`; the host should then stop propagation and suppress
    /// its default behavior.
    pub fn pointer_move(&mut self, raw: RawPointerEvent) -> bool {
        profile_scope!("pointer_move");
        self.tick(raw.time_ms);

        let Some(surface) = self.gesture.surface else {
            // Idle hover; baseline move tracking is the host's concern.
            return false;
        };
        let point = self.sampler.sample(&raw, surface);

        if self.timers.is_armed(TimerKind::Decision) {
            let delta = point.local.delta(self.gesture.last.local);
            if delta.l1() <= self.config.drag_tolerance_px {
                // Positioning jitter between prospective double-click taps.
                self.gesture.update_last(point);
                return false;
            }
            // A genuine drag. Resolve the pending decision, then fall
            // through so this same sample produces the first live drag
            // event - nothing is dropped.
            debug!(l1 = delta.l1(), "drag cancels double-click decision");
            self.finalize(raw.time_ms);
        }

        self.emit_drag(raw, point)
    }

    /// Handle a raw release event. Returns `true` if a listener claimed the
    /// resulting `release`/`click`.
    pub fn pointer_up(&mut self, raw: RawPointerEvent) -> bool {
        profile_scope!("pointer_up");
        self.tick(raw.time_ms);

        if self.timers.is_armed(TimerKind::Decision) {
            if !self.decision.has_buffered_release() {
                trace!(time_ms = raw.time_ms, "release buffered");
                self.decision.buffer_release(raw);
                return false;
            }
            // Second release of a two-press sequence inside the window:
            // a confirmed double interaction. Both pairs are intentionally
            // swallowed; the host's native double-click notification
            // represents the gesture downstream.
            debug!(time_ms = raw.time_ms, "double interaction confirmed");
            self.timers.disarm(TimerKind::Decision);
            self.decision.drop_buffered();
            self.decision.mark_suppression();
            self.end_gesture();
            return false;
        }

        self.handle_live_release(raw)
    }

    /// Handle the host's native double-click notification.
    pub fn native_double_click(&mut self, now_ms: u64) -> NativeDoubleClick {
        self.tick(now_ms);

        if self.decision.consume_suppression() {
            trace!(now_ms, "native double-click suppressed");
            return NativeDoubleClick::Suppressed;
        }
        // Unexpected notification, e.g. its originating presses were
        // intercepted upstream. Clean up as if the gesture ended normally;
        // leaking state here would desynchronize all future classification.
        warn!(now_ms, "orphaned native double-click, resetting state");
        self.timers.clear();
        self.decision.drop_buffered();
        self.gesture.reset();
        NativeDoubleClick::PassThrough
    }

    // ========================================================================
    // Decision resolution
    // ========================================================================

    /// Collapse the pending decision into a single interaction. Reached from
    /// timer expiry, a disqualifying drag, or a second differing button.
    ///
    /// Safe to call when nothing is pending: the deadline and buffers are
    /// cleared before any replay, so a second invocation is a no-op.
    fn finalize(&mut self, now_ms: u64) {
        // A native double-click may still arrive for presses we are about to
        // replay as singles; it would be redundant, so swallow it.
        self.decision.mark_suppression();
        self.timers.disarm(TimerKind::Decision);
        let Some((press, release)) = self.decision.take_buffered() else {
            return;
        };

        debug!(now_ms, replay_release = release.is_some(), "finalize");
        self.commit_press(press);
        if let Some(release) = release {
            self.handle_live_release(release);
        }
    }

    /// Replay a buffered press as if the decision window had never existed.
    fn commit_press(&mut self, press: RawPointerEvent) {
        let Some(surface) = self.gesture.surface else {
            return;
        };
        let point = self.sampler.sample(&press, surface);

        // Re-anchor the gesture at the press sample; jitter observed during
        // the window is discarded. The click classification carries over:
        // a hold that already exceeded the click window stays disqualified.
        let still_click = self.gesture.still_click;
        self.gesture.begin(surface, press.buttons, point);
        self.gesture.still_click = still_click;

        let detail = self.detail(
            SemanticEvent::Press,
            press,
            surface,
            Some(point),
            Some(PointerDelta::ZERO),
        );
        let claimed = self.sink.emit(surface, SemanticEvent::Press, &detail);
        if !claimed {
            // Nothing intercepted the press; let a higher layer create a
            // brand-new object if it wants to.
            let activate = self.detail(SemanticEvent::PressActivate, press, surface, None, None);
            self.sink
                .emit(surface, SemanticEvent::PressActivate, &activate);
        }
    }

    /// Ordinary (non-buffered) release: classify as click or release, emit,
    /// and reset for the next gesture.
    fn handle_live_release(&mut self, raw: RawPointerEvent) -> bool {
        let Some(surface) = self.gesture.surface else {
            return false;
        };
        let point = self.sampler.sample(&raw, surface);

        let claimed = if self.gesture.still_click {
            let detail = self.detail(SemanticEvent::Click, raw, surface, None, None);
            self.sink.emit(surface, SemanticEvent::Click, &detail)
        } else {
            let delta = point.delta(self.gesture.last);
            let detail = self.detail(
                SemanticEvent::Release,
                raw,
                surface,
                Some(point),
                Some(delta),
            );
            self.sink.emit(surface, SemanticEvent::Release, &detail)
        };

        self.end_gesture();
        claimed
    }

    /// Live drag emission; any live movement disqualifies a click.
    fn emit_drag(&mut self, raw: RawPointerEvent, point: PointerPoint) -> bool {
        let Some(surface) = self.gesture.surface else {
            return false;
        };
        let delta = point.delta(self.gesture.last);
        let detail = self.detail(SemanticEvent::Drag, raw, surface, Some(point), Some(delta));
        let claimed = self.sink.emit(surface, SemanticEvent::Drag, &detail);
        self.gesture.disqualify_click();
        self.gesture.update_last(point);
        claimed
    }

    /// Gesture-scoped cleanup: disarm the hold timer and restore the default
    /// state snapshot.
    fn end_gesture(&mut self) {
        self.timers.disarm(TimerKind::ClickDisqualify);
        self.gesture.reset();
    }

    fn detail(
        &self,
        event: SemanticEvent,
        source: RawPointerEvent,
        surface: SurfaceId,
        current: Option<PointerPoint>,
        delta: Option<PointerDelta>,
    ) -> EventDetail {
        EventDetail {
            event,
            source_event: source,
            buttons: self.gesture.buttons,
            surface_id: surface,
            engine_id: self.engine_id,
            start_point: self.gesture.start,
            last_point: self.gesture.last,
            current_point: current,
            delta_point: delta,
        }
    }
}
