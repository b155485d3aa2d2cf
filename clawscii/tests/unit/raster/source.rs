use super::*;
use crate::foundation::core::Point;
use crate::shape::claw::ClawModel;

#[test]
fn sdf_probe_matches_direct_evaluation() {
    let grid = Grid::new(80, 32).unwrap();
    let mapping = ShapeMapping::default();
    let source = SdfSource::new(ClawModel::default(), mapping);
    let probe = source.pose(grid, 0.3);
    for &(col, row) in &[(0, 0), (30, 16), (50, 10), (79, 31)] {
        let expected = source
            .field()
            .evaluate(mapping.point(grid, col, row), 0.3);
        assert_eq!(probe.probe(col, row), CellSignal::Distance(expected));
    }
}

#[test]
fn fixed_shape_source_is_centered() {
    let grid = Grid::new(10, 5).unwrap();
    let mapping = ShapeMapping {
        aspect: 1.0,
        center_x: 0.5,
        center_y: 0.5,
        scale: 1.0,
    };
    let source = SdfSource::new(Shape::circle(Point::ORIGIN, 2.0), mapping);
    let probe = source.pose(grid, 0.0);
    let CellSignal::Distance(center) = probe.probe(5, 2) else {
        panic!("expected distance");
    };
    assert!((center + 1.5).abs() < 1e-12);
}

#[test]
fn image_probe_samples_both_sub_rows() {
    // Top half red, bottom half blue; one output row covers both.
    let mut data = Vec::new();
    for y in 0..4 {
        for _ in 0..2 {
            if y < 2 {
                data.extend_from_slice(&[255, 0, 0, 255]);
            } else {
                data.extend_from_slice(&[0, 0, 255, 255]);
            }
        }
    }
    let pixels = PixelBuffer::from_rgba8(2, 4, data).unwrap();
    let source = ImageSource::new(pixels, ArticulationWarp::default());
    let grid = Grid::new(1, 1).unwrap();
    let CellSignal::Pixels([top, bottom]) = source.pose(grid, 0.0).probe(0, 0) else {
        panic!("expected pixels");
    };
    assert_eq!(top, Rgba::new(255.0, 0.0, 0.0, 255.0));
    assert_eq!(bottom, Rgba::new(0.0, 0.0, 255.0, 255.0));
}

#[test]
fn image_probe_applies_the_warp_to_the_upper_half() {
    // Rows 0..8 opaque white-ish red on top, transparent below row 8.
    let (w, h) = (10u32, 16u32);
    let mut data = Vec::new();
    for y in 0..h {
        for _ in 0..w {
            if y < 8 {
                data.extend_from_slice(&[220, 40, 40, 255]);
            } else {
                data.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    let pixels = PixelBuffer::from_rgba8(w, h, data).unwrap();
    let source = ImageSource::new(pixels, ArticulationWarp::new(0.5));
    let grid = Grid::new(5, 4).unwrap();

    let closed = source.pose(grid, 0.0).probe(4, 1);
    let open = source.pose(grid, 1.0).probe(4, 1);
    let CellSignal::Pixels([closed_top, _]) = closed else {
        panic!("expected pixels");
    };
    let CellSignal::Pixels([open_top, _]) = open else {
        panic!("expected pixels");
    };
    assert_eq!(closed_top.a, 255.0);
    // Near the tips the gather point is pushed into the transparent lower half.
    assert_eq!(open_top.a, 0.0);
}
