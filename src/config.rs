//! Engine configuration.
//!
//! `EngineConfig` holds the validated timing windows and tolerances the
//! engine runs with. Hosts that persist user settings can deserialize an
//! `EngineConfigOverlay` (all fields optional) and merge it over the
//! defaults, so a partial settings file never clobbers unrelated values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    CHORD_WINDOW_MS, CLICK_DISQUALIFY_MS, DRAG_TOLERANCE_PX, MAX_WINDOW_MS,
    SINGLE_BUTTON_WINDOW_MS,
};

/// Errors raised while validating or merging configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A decision window of zero would finalize every press immediately.
    #[error("{name} must be greater than zero")]
    ZeroWindow { name: &'static str },

    /// A window so large it was probably given in the wrong unit.
    #[error("{name} is {value}ms (max {max}ms)")]
    WindowTooLarge {
        name: &'static str,
        value: u64,
        max: u64,
    },

    /// The chord window must not exceed the single-button window; a chord is
    /// disambiguated faster than a same-finger double click, never slower.
    #[error("chord window ({chord}ms) exceeds single-button window ({single}ms)")]
    ChordExceedsSingle { chord: u64, single: u64 },

    /// Negative or non-finite drag tolerance.
    #[error("drag tolerance must be a finite value >= 0, got {0}")]
    InvalidTolerance(f32),
}

/// Validated engine tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Double-click decision window for a single button, in milliseconds.
    pub single_button_window_ms: u64,
    /// Decision window for multi-button chords, in milliseconds.
    pub chord_window_ms: u64,
    /// Delay after which a held-but-unmoved button stops counting as a click.
    pub click_disqualify_ms: u64,
    /// L1 local-space distance that turns decision-window movement into a drag.
    pub drag_tolerance_px: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            single_button_window_ms: SINGLE_BUTTON_WINDOW_MS,
            chord_window_ms: CHORD_WINDOW_MS,
            click_disqualify_ms: CLICK_DISQUALIFY_MS,
            drag_tolerance_px: DRAG_TOLERANCE_PX,
        }
    }
}

impl EngineConfig {
    /// Check every invariant, returning the config by value on success so
    /// call sites can write `EngineConfig { .. }.validated()?`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("single_button_window_ms", self.single_button_window_ms),
            ("chord_window_ms", self.chord_window_ms),
            ("click_disqualify_ms", self.click_disqualify_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroWindow { name });
            }
            if value > MAX_WINDOW_MS {
                return Err(ConfigError::WindowTooLarge {
                    name,
                    value,
                    max: MAX_WINDOW_MS,
                });
            }
        }
        if self.chord_window_ms > self.single_button_window_ms {
            return Err(ConfigError::ChordExceedsSingle {
                chord: self.chord_window_ms,
                single: self.single_button_window_ms,
            });
        }
        if !self.drag_tolerance_px.is_finite() || self.drag_tolerance_px < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.drag_tolerance_px));
        }
        Ok(self)
    }

    /// Merge a partial overlay over this config, then re-validate.
    pub fn with_overlay(self, overlay: &EngineConfigOverlay) -> Result<Self, ConfigError> {
        Self {
            single_button_window_ms: overlay
                .single_button_window_ms
                .unwrap_or(self.single_button_window_ms),
            chord_window_ms: overlay.chord_window_ms.unwrap_or(self.chord_window_ms),
            click_disqualify_ms: overlay
                .click_disqualify_ms
                .unwrap_or(self.click_disqualify_ms),
            drag_tolerance_px: overlay.drag_tolerance_px.unwrap_or(self.drag_tolerance_px),
        }
        .validated()
    }
}

/// Partial configuration as read from a host settings file. Every field is
/// optional; absent fields keep their current value on merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfigOverlay {
    pub single_button_window_ms: Option<u64>,
    pub chord_window_ms: Option<u64>,
    pub click_disqualify_ms: Option<u64>,
    pub drag_tolerance_px: Option<f32>,
}
