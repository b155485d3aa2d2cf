use super::*;

#[test]
fn lower_half_is_untouched() {
    let warp = ArticulationWarp::default();
    for &(x, y) in &[(0.0, 50.0), (99.0, 50.0), (60.0, 99.0)] {
        let p = Point::new(x, y);
        assert_eq!(warp.source_point(p, 100, 100, 1.0), p);
    }
}

#[test]
fn closed_pose_is_identity() {
    let warp = ArticulationWarp::default();
    let p = Point::new(80.0, 10.0);
    assert_eq!(warp.source_point(p, 100, 100, 0.0), p);
}

#[test]
fn hinge_side_barely_moves_and_tips_move_most() {
    let warp = ArticulationWarp::default();
    let hinge = warp.source_point(Point::new(0.0, 10.0), 100, 100, 1.0);
    let tip = warp.source_point(Point::new(100.0, 10.0), 100, 100, 1.0);
    assert_eq!(hinge.y, 10.0);
    assert!((tip.y - (10.0 + 22.0)).abs() < 1e-9);

    // h^1.5 grows slower than linear near the hinge.
    let mid = warp.source_point(Point::new(50.0, 10.0), 100, 100, 1.0);
    assert!(mid.y - 10.0 < 11.0);
    assert!((mid.y - 10.0 - 22.0 * 0.5f64.powf(1.5)).abs() < 1e-9);
}

#[test]
fn displacement_scales_with_openness() {
    let warp = ArticulationWarp::new(0.5);
    assert_eq!(warp.max_displacement(0.5, 40), 10.0);
    assert_eq!(warp.max_displacement(0.0, 40), 0.0);
}
