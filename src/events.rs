//! Semantic events and the delivery seam.
//!
//! The engine never talks to the host UI directly; every outgoing event goes
//! through [`EventSink::emit`], which reports whether some listener claimed
//! it. Claiming a `press` suppresses the follow-up `press-activate`, letting
//! a higher layer implement select-existing vs. create-new semantics without
//! the engine knowing anything about it.

use serde::{Deserialize, Serialize};

use crate::types::{ButtonMask, EngineId, PointerDelta, PointerPoint, RawPointerEvent, SurfaceId};

// ============================================================================
// Event Names
// ============================================================================

/// The five semantic interaction events the engine can emit.
///
/// Exactly one of `Release`/`Click` is emitted per gesture, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticEvent {
    Press,
    PressActivate,
    Drag,
    Release,
    Click,
}

impl SemanticEvent {
    /// Wire name of the event.
    pub fn name(self) -> &'static str {
        match self {
            SemanticEvent::Press => "press",
            SemanticEvent::PressActivate => "press-activate",
            SemanticEvent::Drag => "drag",
            SemanticEvent::Release => "release",
            SemanticEvent::Click => "click",
        }
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Payload attached to every semantic event.
///
/// Motion-bearing events (`press`, `drag`, `release`) carry `current_point`
/// and `delta_point`; `click` and `press-activate` use the reduced shape with
/// both absent (their delta is zero by definition).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    pub event: SemanticEvent,
    /// The raw host event that produced this semantic event.
    pub source_event: RawPointerEvent,
    pub buttons: ButtonMask,
    pub surface_id: SurfaceId,
    pub engine_id: EngineId,
    pub start_point: PointerPoint,
    pub last_point: PointerPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_point: Option<PointerPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_point: Option<PointerDelta>,
}

// ============================================================================
// Delivery
// ============================================================================

/// Delivery seam for semantic events.
///
/// Returns `true` if a listener claimed the event. For a `drag` this means
/// the host should stop propagation and suppress its default behavior; for a
/// `press` it additionally suppresses the engine's `press-activate`.
pub trait EventSink {
    fn emit(&mut self, target: SurfaceId, name: SemanticEvent, detail: &EventDetail) -> bool;
}

/// One delivered event, as recorded by [`CollectingSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmittedEvent {
    pub target: SurfaceId,
    pub name: SemanticEvent,
    pub detail: EventDetail,
}

/// Sink that records every emission in order and claims the event names it
/// was told to claim. Used by the test suite and handy for host bring-up.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub events: Vec<EmittedEvent>,
    claim: Vec<SemanticEvent>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that answers "claimed" for the given event names.
    pub fn claiming(names: &[SemanticEvent]) -> Self {
        Self {
            events: Vec::new(),
            claim: names.to_vec(),
        }
    }

    /// Event names in emission order.
    pub fn names(&self) -> Vec<SemanticEvent> {
        self.events.iter().map(|e| e.name).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for CollectingSink {
    fn emit(&mut self, target: SurfaceId, name: SemanticEvent, detail: &EventDetail) -> bool {
        self.events.push(EmittedEvent {
            target,
            name,
            detail: *detail,
        });
        self.claim.contains(&name)
    }
}
