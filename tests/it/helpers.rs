//! Test helpers for driving gesture scripts against a fresh engine.
//!
//! `GestureHarness` keeps the current cursor position and held-button mask so
//! tests read as a sequence of user actions (`press`, `move_to`, `release`,
//! `tick`) instead of raw event plumbing.

use pointer_gestures::{
    ButtonMask, CollectingSink, EmittedEvent, EngineConfig, EngineId, PointerEngine,
    RawPointerEvent, SemanticEvent, SurfaceId, Vec2, ViewportSampler,
};

/// Surface every harness-driven gesture targets.
pub const SURFACE: SurfaceId = SurfaceId(1);

/// Install a process-wide test subscriber once, so `RUST_LOG=trace` shows
/// the engine's decision log while debugging a failing script.
fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Scripted driver around one engine and a recording sink.
pub struct GestureHarness {
    engine: PointerEngine<ViewportSampler, CollectingSink>,
    cursor: Vec2,
    held: ButtonMask,
}

impl GestureHarness {
    /// Default config, nothing claimed.
    pub fn new() -> Self {
        Self::build(EngineConfig::default(), CollectingSink::new())
    }

    /// Default config, claiming the given event names.
    pub fn claiming(names: &[SemanticEvent]) -> Self {
        Self::build(EngineConfig::default(), CollectingSink::claiming(names))
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::build(config, CollectingSink::new())
    }

    fn build(config: EngineConfig, sink: CollectingSink) -> Self {
        init_tracing();
        Self {
            engine: PointerEngine::new(EngineId(1), config, ViewportSampler::default(), sink),
            cursor: Vec2::new(100.0, 100.0),
            held: ButtonMask::NONE,
        }
    }

    fn raw(&self, time_ms: u64) -> RawPointerEvent {
        RawPointerEvent::new(time_ms, self.held, self.cursor, self.cursor)
    }

    /// Press buttons at the current cursor position.
    pub fn press(&mut self, time_ms: u64, buttons: ButtonMask) {
        self.held = buttons;
        let raw = self.raw(time_ms);
        self.engine.pointer_down(raw, SURFACE);
    }

    /// Release all buttons at the current cursor position.
    pub fn release(&mut self, time_ms: u64) -> bool {
        self.held = ButtonMask::NONE;
        let raw = self.raw(time_ms);
        self.engine.pointer_up(raw)
    }

    /// Move the cursor to client coordinates `(x, y)`.
    pub fn move_to(&mut self, time_ms: u64, x: f32, y: f32) -> bool {
        self.cursor = Vec2::new(x, y);
        let raw = self.raw(time_ms);
        self.engine.pointer_move(raw)
    }

    /// Advance host time, firing any due engine timers.
    pub fn tick(&mut self, now_ms: u64) {
        self.engine.tick(now_ms);
    }

    pub fn names(&self) -> Vec<SemanticEvent> {
        self.engine.sink().names()
    }

    pub fn events(&self) -> &[EmittedEvent] {
        &self.engine.sink().events
    }

    pub fn engine(&self) -> &PointerEngine<ViewportSampler, CollectingSink> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PointerEngine<ViewportSampler, CollectingSink> {
        &mut self.engine
    }
}
