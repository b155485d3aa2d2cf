use super::*;

fn gray_2x2() -> PixelBuffer {
    PixelBuffer::from_rgba8(2, 2, [128u8, 128, 128, 255].repeat(4)).unwrap()
}

#[test]
fn uniform_buffer_samples_uniformly_in_bounds() {
    let img = gray_2x2();
    for &(x, y) in &[(0.0, 0.0), (0.5, 0.5), (1.0, 1.0), (1.99, 0.25), (0.0, 1.75)] {
        assert_eq!(img.sample(x, y), Rgba::new(128.0, 128.0, 128.0, 255.0));
    }
}

#[test]
fn out_of_bounds_samples_are_transparent() {
    let img = gray_2x2();
    for &(x, y) in &[(-0.01, 0.5), (2.0, 0.5), (0.5, 2.0), (0.5, -3.0), (f64::NAN, 0.0)] {
        assert_eq!(img.sample(x, y), Rgba::TRANSPARENT);
    }
}

#[test]
fn bilinear_interpolates_between_neighbors() {
    let data = vec![
        0, 0, 0, 255, 200, 100, 0, 255, //
        0, 0, 0, 255, 200, 100, 0, 255,
    ];
    let img = PixelBuffer::from_rgba8(2, 2, data).unwrap();
    let px = img.sample(0.25, 0.5);
    assert!((px.r - 50.0).abs() < 1e-9);
    assert!((px.g - 25.0).abs() < 1e-9);
    assert_eq!(px.a, 255.0);

    // The last column clamps to itself.
    assert_eq!(img.sample(1.5, 0.0), Rgba::new(200.0, 100.0, 0.0, 255.0));
}

#[test]
fn rejects_mismatched_buffers() {
    assert!(PixelBuffer::from_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(PixelBuffer::from_rgba8(0, 2, vec![]).is_err());
}
