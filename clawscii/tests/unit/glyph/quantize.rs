use super::*;

fn basic() -> Quantizer {
    Quantizer::new(GlyphRamp::basic(), PixelPolicy::default())
}

#[test]
fn brightness_extremes_hit_ramp_ends() {
    let q = basic();
    let last = q.ramp().len() - 1;
    assert_eq!(q.brightness_index(0.0), 0);
    assert_eq!(q.brightness_index(1.0), last);
    for step in 0..=100 {
        let i = q.brightness_index(step as f64 / 100.0);
        assert!(i <= last);
    }
}

#[test]
fn dense_polarity_flips_the_ramp() {
    let policy = PixelPolicy {
        polarity: Polarity::BrightIsDense,
        ..PixelPolicy::default()
    };
    let q = Quantizer::new(GlyphRamp::basic(), policy);
    assert_eq!(q.brightness_index(1.0), 0);
    assert_eq!(q.brightness_index(0.0), q.ramp().len() - 1);
}

#[test]
fn gray_pixels_are_background() {
    let q = basic();
    let gray = Rgba::new(128.0, 128.0, 128.0, 255.0);
    assert_eq!(q.glyph(&CellSignal::Pixels([gray, gray])), ' ');
    let white = Rgba::new(255.0, 255.0, 255.0, 255.0);
    assert_eq!(q.glyph(&CellSignal::Pixels([white, white])), ' ');
}

#[test]
fn transparent_pixels_are_background() {
    let q = basic();
    let ghost = Rgba::new(250.0, 20.0, 20.0, 10.0);
    assert_eq!(q.glyph(&CellSignal::Pixels([ghost, ghost])), ' ');
    assert_eq!(
        q.glyph(&CellSignal::Pixels([Rgba::TRANSPARENT, Rgba::TRANSPARENT])),
        ' '
    );
}

#[test]
fn half_coverage_still_renders() {
    let q = basic();
    let red = Rgba::new(255.0, 0.0, 0.0, 255.0);
    let gray = Rgba::new(90.0, 90.0, 90.0, 255.0);
    let b = q.pixel_brightness(&[red, gray]).unwrap();
    // Only the red sample contributes.
    assert!((b - 0.299).abs() < 1e-9);
    assert_ne!(q.glyph(&CellSignal::Pixels([red, gray])), ' ');
}

#[test]
fn saturated_dark_pixels_are_denser_than_bright_ones() {
    let q = basic();
    let dark = Rgba::new(60.0, 10.0, 10.0, 255.0);
    let bright = Rgba::new(255.0, 200.0, 120.0, 255.0);
    let di = q.brightness_index(q.pixel_brightness(&[dark, dark]).unwrap());
    let bi = q.brightness_index(q.pixel_brightness(&[bright, bright]).unwrap());
    assert!(di < bi);
}

#[test]
fn interior_depth_selects_denser_glyphs() {
    let q = Quantizer::new(GlyphRamp::dense(), PixelPolicy::default());
    let len = q.ramp().len();
    assert_eq!(q.distance_index(-6.0), Some(0));
    assert_eq!(q.distance_index(-60.0), Some(0));
    let shallow = q.distance_index(-0.5).unwrap();
    let deep = q.distance_index(-4.0).unwrap();
    assert!(deep < shallow);
    assert!(shallow < (len as f64 * 0.6).ceil() as usize);
}

#[test]
fn edge_band_uses_its_own_range() {
    let q = Quantizer::new(GlyphRamp::dense(), PixelPolicy::default());
    let len = q.ramp().len() as f64;
    let at_zero = q.distance_index(0.0).unwrap();
    assert_eq!(at_zero, (len * 0.4).floor() as usize);
    let near_out = q.distance_index(1.49).unwrap();
    assert!(near_out > at_zero);
    assert!(near_out < (len * 0.8).ceil() as usize);
    assert_eq!(q.distance_index(1.5), None);
    assert_eq!(q.distance_index(f64::NAN), None);
}

#[test]
fn single_glyph_ramp_never_overflows() {
    let q = Quantizer::new(GlyphRamp::new("#").unwrap(), PixelPolicy::default());
    assert_eq!(q.distance_index(-3.0), Some(0));
    assert_eq!(q.distance_index(1.2), Some(0));
    assert_eq!(q.brightness_index(1.0), 0);
}

#[test]
fn policy_validation() {
    assert!(PixelPolicy::default().validate().is_ok());
    let bad = PixelPolicy {
        saturation_cutoff: 1.5,
        ..PixelPolicy::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn nan_brightness_never_renders_as_ink() {
    let q = basic();
    let last = q.ramp().len() - 1;
    assert_eq!(q.brightness_index(f64::NAN), last);

    let broken = Rgba::new(f64::NAN, 0.0, 200.0, 255.0);
    assert_eq!(q.pixel_brightness(&[broken, broken]), None);
    assert_eq!(q.glyph(&CellSignal::Pixels([broken, broken])), ' ');
}
