//! Core value types shared across the crate.
//!
//! Everything here is a small, fixed-shape `Copy` value: points, button
//! masks, identifiers, and the raw event record the host feeds into the
//! engine. Snapshotting any of these is a plain field-by-field copy, so a
//! previously emitted event payload can never be retroactively altered by
//! later mutation of live state.

use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry
// ============================================================================

/// 2-D point or delta in a pixel-based coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn delta(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    /// L1 (Manhattan) length. Used for the drag-cancels-double-click
    /// tolerance check.
    pub fn l1(self) -> f32 {
        self.x.abs() + self.y.abs()
    }
}

/// 3-D point or delta in the projected world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn delta(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// One logical pointer position projected into all four coordinate spaces.
///
/// A `PointerPoint` always carries every projection together; there is no way
/// to construct a partial point. `page`/`client` come straight from the host
/// event, `local` is relative to the tracked surface (zoom/pan applied), and
/// `world` is the projected model-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPoint {
    pub page: Vec2,
    pub client: Vec2,
    pub local: Vec2,
    pub world: Vec3,
}

impl PointerPoint {
    pub fn new(page: Vec2, client: Vec2, local: Vec2, world: Vec3) -> Self {
        Self {
            page,
            client,
            local,
            world,
        }
    }

    /// Deltas `self - other` in all four spaces at once.
    pub fn delta(self, other: PointerPoint) -> PointerDelta {
        PointerDelta {
            page: self.page.delta(other.page),
            client: self.client.delta(other.client),
            local: self.local.delta(other.local),
            world: self.world.delta(other.world),
        }
    }
}

/// Difference between two [`PointerPoint`]s, kept in all four spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerDelta {
    pub page: Vec2,
    pub client: Vec2,
    pub local: Vec2,
    pub world: Vec3,
}

impl PointerDelta {
    pub const ZERO: PointerDelta = PointerDelta {
        page: Vec2::ZERO,
        client: Vec2::ZERO,
        local: Vec2::ZERO,
        world: Vec3::ZERO,
    };
}

// ============================================================================
// Buttons
// ============================================================================

/// Bitmask of pointer buttons currently held down.
///
/// Matches the host convention: bit 0 is the primary button, bit 1 the
/// secondary, bit 2 the middle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    pub const NONE: ButtonMask = ButtonMask(0);
    pub const PRIMARY: ButtonMask = ButtonMask(1);
    pub const SECONDARY: ButtonMask = ButtonMask(2);
    pub const MIDDLE: ButtonMask = ButtonMask(4);

    /// True if no button is down.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if exactly one button is down.
    pub fn is_single(self) -> bool {
        self.0 != 0 && self.0 & (self.0 - 1) == 0
    }

    /// True if two or more buttons are down (a chord).
    pub fn is_chord(self) -> bool {
        !self.is_empty() && !self.is_single()
    }

    /// Union of two masks.
    pub fn with(self, other: ButtonMask) -> ButtonMask {
        ButtonMask(self.0 | other.0)
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Identifies one engine instance; carried in every event payload so a
/// downstream consumer can tell which pointing device produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngineId(pub u32);

/// Opaque handle for the surface a gesture is tracked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(pub u32);

// ============================================================================
// Raw Events
// ============================================================================

/// A device-level pointer event as delivered by the host.
///
/// The engine never inspects host-specific fields; it needs the timestamp,
/// the resulting button mask, and the page/client coordinates the Point
/// Sampler projects from. Buffered originals of this type are replayed
/// verbatim when a pending decision resolves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPointerEvent {
    /// Host timestamp in milliseconds, monotonic within a session.
    pub time_ms: u64,
    /// Buttons held down after this event was applied.
    pub buttons: ButtonMask,
    /// Position in page coordinates.
    pub page: Vec2,
    /// Position in client (viewport) coordinates.
    pub client: Vec2,
}

impl RawPointerEvent {
    pub fn new(time_ms: u64, buttons: ButtonMask, page: Vec2, client: Vec2) -> Self {
        Self {
            time_ms,
            buttons,
            page,
            client,
        }
    }
}
