//! Pointer-input disambiguation for interactive surfaces.
//!
//! Converts the raw press/move/release stream of a pointing device into
//! unambiguous semantic events: `press`, `press-activate`, `drag`, `release`
//! and `click`. The hard part is time: a press is not classifiable at the
//! moment it happens, so the engine buffers it behind a decision window and
//! replays it once movement, additional buttons, a second click, or a timeout
//! settle what the user meant. See [`input`] for the mechanics.
//!
//! Hosts integrate through three seams:
//!
//! - [`PointSampler`](sampler::PointSampler) projects raw coordinates into
//!   the four spaces every emitted event carries.
//! - [`EventSink`](events::EventSink) delivers semantic events and reports
//!   whether a listener claimed them.
//! - [`PointerEngine::tick`](input::PointerEngine::tick) /
//!   [`next_deadline`](input::PointerEngine::next_deadline) drive the
//!   engine's timers from the host's scheduler.

pub mod config;
pub mod constants;
pub mod events;
pub mod input;
pub mod perf;
pub mod sampler;
pub mod types;

pub use config::{ConfigError, EngineConfig, EngineConfigOverlay};
pub use events::{CollectingSink, EmittedEvent, EventDetail, EventSink, SemanticEvent};
pub use input::{EnginePool, NativeDoubleClick, PointerEngine};
pub use sampler::{PointSampler, ViewportSampler, ViewportTransform};
pub use types::{
    ButtonMask, EngineId, PointerDelta, PointerPoint, RawPointerEvent, SurfaceId, Vec2, Vec3,
};
