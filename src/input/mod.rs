//! Pointer-input disambiguation.
//!
//! This module converts a raw stream of press/move/release events into a
//! deterministic sequence of semantic events (`press`, `press-activate`,
//! `drag`, `release`, `click`) despite the inherent ambiguity of input
//! timing: at the moment a button goes down, nobody knows yet whether it is
//! a click, a drag, or the first half of a double click.
//!
//! ## Architecture
//!
//! The engine makes an irrevocable decision from an event stream whose
//! future is unknown, using timeouts, cancellation and event replay rather
//! than waiting indefinitely. A first press is buffered behind a decision
//! timer; movement beyond a small tolerance, a second differing button, or
//! the timeout itself all collapse the pending state through a single
//! idempotent finalize path that replays the buffered events as ordinary
//! single-interaction handling.
//!
//! ## Modules
//!
//! - `state` - gesture and decision state records
//! - `timer` - armed-deadline bookkeeping for the two engine timers
//! - `engine` - the disambiguation engine itself
//! - `pool` - per-surface engine pooling for multi-surface hosts

mod engine;
mod pool;
mod state;
mod timer;

pub use engine::{NativeDoubleClick, PointerEngine};
pub use pool::EnginePool;
pub use state::{DecisionState, GestureState};
pub use timer::{TimerKind, TimerSet};
