//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin down the serialized shape of the backend-agnostic
//! curve representation and the settings file format, so accidental changes
//! to either surface as a reviewable diff.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use inkboard::Settings;
use inkboard::smoothing::StrokeBuilder;
use inkboard::types::{StrokeStyle, point};

#[test]
fn snapshot_smoothed_segments() {
    let mut builder = StrokeBuilder::start(point(0.0, 0.0), StrokeStyle::default());
    builder.add_point(point(10.0, 0.0));
    builder.add_point(point(10.0, 10.0));

    insta::assert_json_snapshot!(builder.segments(), @r#"
    [
      {
        "MoveTo": {
          "x": 0.0,
          "y": 0.0
        }
      },
      {
        "QuadTo": {
          "ctrl": {
            "x": 0.0,
            "y": 0.0
          },
          "to": {
            "x": 5.0,
            "y": 0.0
          }
        }
      },
      {
        "QuadTo": {
          "ctrl": {
            "x": 10.0,
            "y": 0.0
          },
          "to": {
            "x": 10.0,
            "y": 5.0
          }
        }
      }
    ]
    "#);
}

#[test]
fn snapshot_default_stroke_style() {
    insta::assert_json_snapshot!(StrokeStyle::default(), @r#"
    {
      "color": {
        "r": 0,
        "g": 0,
        "b": 0,
        "a": 255
      },
      "width": 5.0
    }
    "#);
}

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(Settings::default(), @r##"
    {
      "stroke_color": "#000000",
      "stroke_width": 5.0
    }
    "##);
}
