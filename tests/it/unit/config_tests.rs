//! Configuration overlay and validation tests, exercised the way a host
//! settings file would reach them.

use pointer_gestures::{ConfigError, EngineConfig, EngineConfigOverlay};

#[test]
fn test_overlay_parses_from_partial_settings_json() {
    let overlay: EngineConfigOverlay =
        serde_json::from_str(r#"{ "single_button_window_ms": 300 }"#).unwrap();
    let merged = EngineConfig::default().with_overlay(&overlay).unwrap();
    assert_eq!(merged.single_button_window_ms, 300);
    // Absent fields keep their defaults.
    assert_eq!(merged.chord_window_ms, 150);
    assert_eq!(merged.click_disqualify_ms, 200);
    assert_eq!(merged.drag_tolerance_px, 3.0);
}

#[test]
fn test_invalid_overlay_is_rejected_on_merge() {
    let overlay: EngineConfigOverlay =
        serde_json::from_str(r#"{ "chord_window_ms": 900 }"#).unwrap();
    let err = EngineConfig::default().with_overlay(&overlay).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ChordExceedsSingle { chord: 900, single: 400 }
    ));
}

#[test]
fn test_error_messages_name_the_offending_field() {
    let err = EngineConfig {
        click_disqualify_ms: 0,
        ..Default::default()
    }
    .validated()
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "click_disqualify_ms must be greater than zero"
    );

    let err = EngineConfig {
        single_button_window_ms: 100,
        ..Default::default()
    }
    .validated()
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "chord window (150ms) exceeds single-button window (100ms)"
    );
}
