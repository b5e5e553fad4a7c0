//! Snapshot tests using the insta crate.
//!
//! The event payload is a wire contract for host integrations, so its JSON
//! shape is pinned with inline snapshots: the full motion-bearing form, the
//! reduced form, and the default configuration.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::GestureHarness;
use pointer_gestures::{ButtonMask, EngineConfig};

#[test]
fn snapshot_press_detail_full_shape() {
    let mut h = GestureHarness::new();
    h.press(0, ButtonMask::PRIMARY);
    h.tick(400);

    let detail = h.events()[0].detail;
    insta::assert_json_snapshot!(detail, @r#"
    {
      "event": "press",
      "source_event": {
        "time_ms": 0,
        "buttons": 1,
        "page": {
          "x": 100.0,
          "y": 100.0
        },
        "client": {
          "x": 100.0,
          "y": 100.0
        }
      },
      "buttons": 1,
      "surface_id": 1,
      "engine_id": 1,
      "start_point": {
        "page": {
          "x": 100.0,
          "y": 100.0
        },
        "client": {
          "x": 100.0,
          "y": 100.0
        },
        "local": {
          "x": 100.0,
          "y": 100.0
        },
        "world": {
          "x": 100.0,
          "y": 100.0,
          "z": 0.0
        }
      },
      "last_point": {
        "page": {
          "x": 100.0,
          "y": 100.0
        },
        "client": {
          "x": 100.0,
          "y": 100.0
        },
        "local": {
          "x": 100.0,
          "y": 100.0
        },
        "world": {
          "x": 100.0,
          "y": 100.0,
          "z": 0.0
        }
      },
      "current_point": {
        "page": {
          "x": 100.0,
          "y": 100.0
        },
        "client": {
          "x": 100.0,
          "y": 100.0
        },
        "local": {
          "x": 100.0,
          "y": 100.0
        },
        "world": {
          "x": 100.0,
          "y": 100.0,
          "z": 0.0
        }
      },
      "delta_point": {
        "page": {
          "x": 0.0,
          "y": 0.0
        },
        "client": {
          "x": 0.0,
          "y": 0.0
        },
        "local": {
          "x": 0.0,
          "y": 0.0
        },
        "world": {
          "x": 0.0,
          "y": 0.0,
          "z": 0.0
        }
      }
    }
    "#);
}

#[test]
fn snapshot_click_detail_reduced_shape() {
    let mut h = GestureHarness::new();
    h.press(0, ButtonMask::PRIMARY);
    // Second button forces an early finalize; the release is then a click.
    h.press(50, ButtonMask::SECONDARY);
    h.release(100);

    let detail = h.events().last().unwrap().detail;
    // No current_point/delta_point: a click's delta is zero by definition.
    insta::assert_json_snapshot!(detail, @r#"
    {
      "event": "click",
      "source_event": {
        "time_ms": 100,
        "buttons": 0,
        "page": {
          "x": 100.0,
          "y": 100.0
        },
        "client": {
          "x": 100.0,
          "y": 100.0
        }
      },
      "buttons": 1,
      "surface_id": 1,
      "engine_id": 1,
      "start_point": {
        "page": {
          "x": 100.0,
          "y": 100.0
        },
        "client": {
          "x": 100.0,
          "y": 100.0
        },
        "local": {
          "x": 100.0,
          "y": 100.0
        },
        "world": {
          "x": 100.0,
          "y": 100.0,
          "z": 0.0
        }
      },
      "last_point": {
        "page": {
          "x": 100.0,
          "y": 100.0
        },
        "client": {
          "x": 100.0,
          "y": 100.0
        },
        "local": {
          "x": 100.0,
          "y": 100.0
        },
        "world": {
          "x": 100.0,
          "y": 100.0,
          "z": 0.0
        }
      }
    }
    "#);
}

#[test]
fn snapshot_default_engine_config() {
    insta::assert_json_snapshot!(EngineConfig::default(), @r#"
    {
      "single_button_window_ms": 400,
      "chord_window_ms": 150,
      "click_disqualify_ms": 200,
      "drag_tolerance_px": 3.0
    }
    "#);
}
