use std::io::Cursor;

use super::*;
use crate::glyph::quantize::Polarity;

#[test]
fn minimal_sdf_config_uses_defaults() {
    let cfg = AnimationConfig::from_reader(Cursor::new(r#"{ "source": { "kind": "sdf" } }"#))
        .unwrap();
    assert_eq!(cfg, AnimationConfig::sdf_default());
    assert_eq!(cfg.schedule(), ApertureSchedule::sdf_default());
    cfg.validate().unwrap();
}

#[test]
fn full_image_config_parses() {
    let json = r#"
{
  "name": "pincer",
  "grid": { "cols": 60, "rows": 24 },
  "frames": 30,
  "tiers": ["small", "large"],
  "ramp": "basic",
  "schedule": { "min": 0.0, "max": 0.8, "phase": 0.0, "ease": "in_out_quad" },
  "source": {
    "kind": "image",
    "path": "claw.png",
    "warp_strength": 0.3,
    "saturation_cutoff": 0.2,
    "polarity": "bright_is_dense"
  }
}
"#;
    let cfg = AnimationConfig::from_reader(Cursor::new(json)).unwrap();
    assert_eq!(cfg.name, "pincer");
    assert_eq!(cfg.grid, Grid::new(60, 24).unwrap());
    assert_eq!(cfg.ramp, GlyphRamp::basic());
    assert_eq!(cfg.schedule().max, 0.8);
    let SourceConfig::Image(img) = &cfg.source else {
        panic!("expected image source");
    };
    assert_eq!(img.path, PathBuf::from("claw.png"));
    assert_eq!(img.warp_strength, 0.3);
    assert_eq!(img.policy.saturation_cutoff, 0.2);
    assert_eq!(img.policy.alpha_cutoff, PixelPolicy::default().alpha_cutoff);
    assert_eq!(img.policy.polarity, Polarity::BrightIsDense);
    cfg.validate().unwrap();
}

#[test]
fn image_schedule_defaults_to_unit_openness() {
    let cfg = AnimationConfig::from_reader(Cursor::new(
        r#"{ "source": { "kind": "image", "path": "x.png" } }"#,
    ))
    .unwrap();
    assert_eq!(cfg.schedule(), ApertureSchedule::image_default());
}

#[test]
fn invalid_configs_are_rejected() {
    let cases = [
        r#"{ "grid": { "cols": 0, "rows": 5 }, "source": { "kind": "sdf" } }"#,
        r#"{ "frames": 0, "source": { "kind": "sdf" } }"#,
        r#"{ "tiers": [], "source": { "kind": "sdf" } }"#,
        r#"{ "tiers": ["../up"], "source": { "kind": "sdf" } }"#,
        r#"{ "schedule": { "min": 0.4, "max": 0.1 }, "source": { "kind": "sdf" } }"#,
        r#"{ "source": { "kind": "sdf", "aspect": -1.0 } }"#,
        r#"{ "source": { "kind": "image", "path": "x.png", "alpha_cutoff": 2.0 } }"#,
    ];
    for json in cases {
        let cfg = AnimationConfig::from_reader(Cursor::new(json)).unwrap();
        assert!(cfg.validate().is_err(), "accepted: {json}");
    }
}

#[test]
fn malformed_json_is_a_validation_error() {
    for json in [
        r#"{ "ramp": "", "source": { "kind": "sdf" } }"#,
        r#"{ "source": { "kind": "vector" } }"#,
        r#"{ "source": { "kind": "sdf" }, "colour": true }"#,
        "{",
    ] {
        let err = AnimationConfig::from_reader(Cursor::new(json)).unwrap_err();
        assert!(matches!(err, ClawError::Validation(_)), "{json}: {err}");
    }
}

#[test]
fn build_reports_missing_image() {
    let cfg = AnimationConfig::from_reader(Cursor::new(
        r#"{ "source": { "kind": "image", "path": "does-not-exist.png" } }"#,
    ))
    .unwrap();
    let err = cfg.build(Path::new("target")).unwrap_err();
    assert!(matches!(err, ClawError::Decode { .. }));
}

#[test]
fn build_sdf_sequencer() {
    let seq = AnimationConfig::sdf_default().build(Path::new(".")).unwrap();
    assert_eq!(seq.settings().frames, 48);
    assert_eq!(seq.settings().tiers, vec!["low", "medium", "high"]);
}
