use super::*;

#[test]
fn rotated_shape_moves_with_rotation() {
    // A small circle on the +x axis ends up on the +y axis after a quarter turn.
    let s = Shape::circle(Point::new(5.0, 0.0), 1.0).rotated(std::f64::consts::FRAC_PI_2);
    assert!(s.distance(Point::new(0.0, 5.0)) < -0.99);
    assert!(s.distance(Point::new(5.0, 0.0)) > 0.0);
}

#[test]
fn union_takes_nearest_child() {
    let s = Shape::circle(Point::new(-3.0, 0.0), 1.0).union(Shape::rect(
        Point::new(3.0, 0.0),
        Vec2::new(1.0, 1.0),
    ));
    assert!(s.distance(Point::new(-3.0, 0.0)) < 0.0);
    assert!(s.distance(Point::new(3.0, 0.0)) < 0.0);
    assert!(s.distance(Point::ORIGIN) > 0.0);
}

#[test]
fn smooth_union_zero_k_matches_union() {
    let a = Shape::circle(Point::new(-1.0, 0.0), 1.5);
    let b = Shape::ellipse(Point::new(1.0, 0.0), Vec2::new(2.0, 1.0));
    let hard = a.clone().union(b.clone());
    let soft = a.smooth_union(b, 0.0);
    for p in [Point::ORIGIN, Point::new(0.3, 1.7), Point::new(-4.0, 2.0)] {
        assert_eq!(hard.distance(p), soft.distance(p));
    }
}

#[test]
fn smooth_union_fills_the_seam() {
    let a = Shape::circle(Point::new(-1.5, 0.0), 1.0);
    let b = Shape::circle(Point::new(1.5, 0.0), 1.0);
    let seam = Point::new(0.0, 0.0);
    let hard = a.clone().union(b.clone()).distance(seam);
    let soft = a.smooth_union(b, 4.0).distance(seam);
    assert!(hard > 0.0);
    assert!(soft < hard);
}

#[test]
fn fixed_shape_ignores_aperture() {
    let s = Shape::circle(Point::ORIGIN, 2.0);
    let p = Point::new(1.0, 1.0);
    assert_eq!(s.evaluate(p, 0.0), s.evaluate(p, 0.4));
}
