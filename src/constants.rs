//! Crate-wide constants.
//!
//! Centralizes the timing windows and pixel tolerances that drive gesture
//! classification, so every tunable lives in one place.

// ============================================================================
// Decision Windows
// ============================================================================

/// Double-click decision window for a single-button press, in milliseconds.
///
/// Human double-clicks of the same finger are measurably slow; the engine
/// waits this long before committing a lone press as a single interaction.
pub const SINGLE_BUTTON_WINDOW_MS: u64 = 400;

/// Decision window for multi-button chords, in milliseconds.
///
/// Two buttons pressed "simultaneously" are reported a few milliseconds
/// apart, so the chord window only needs to absorb that reporting skew.
pub const CHORD_WINDOW_MS: u64 = 150;

// ============================================================================
// Click Classification
// ============================================================================

/// Time after which a held-but-unmoved button no longer counts as a click,
/// in milliseconds.
pub const CLICK_DISQUALIFY_MS: u64 = 200;

/// Maximum L1 distance (local space, pixels) a pointer may travel inside the
/// decision window before the movement counts as a drag rather than the
/// positioning jitter between double-click taps.
pub const DRAG_TOLERANCE_PX: f32 = 3.0;

// ============================================================================
// Limits
// ============================================================================

/// Upper bound accepted for any configured decision window, in milliseconds.
/// Guards against a host accidentally passing seconds where the engine
/// expects milliseconds.
pub const MAX_WINDOW_MS: u64 = 10_000;
