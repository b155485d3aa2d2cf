//! Signed-distance primitives and combinators.
//!
//! Distances are negative inside, zero on the boundary and positive outside, in the same units as
//! the query point. Every function here is total.

use crate::foundation::core::{Point, Vec2};

/// Distance to a circle.
pub fn circle(p: Point, center: Point, radius: f64) -> f64 {
    (p - center).hypot() - radius
}

/// Distance to an axis-aligned box with the given half extents.
pub fn rect(p: Point, center: Point, half_extents: Vec2) -> f64 {
    let d = p - center;
    let dx = d.x.abs() - half_extents.x;
    let dy = d.y.abs() - half_extents.y;
    let outside = Vec2::new(dx.max(0.0), dy.max(0.0)).hypot();
    outside + dx.max(dy).min(0.0)
}

/// Approximate distance to an axis-aligned ellipse: `|(p - c) / r| - 1`.
///
/// Exact only on the zero crossing. Away from it the value is in radius units, so an ellipse field
/// grows more slowly than a circle field of the same size.
pub fn ellipse(p: Point, center: Point, radii: Vec2) -> f64 {
    let d = p - center;
    Vec2::new(d.x / radii.x, d.y / radii.y).hypot() - 1.0
}

/// Rotate `p` about the origin by `angle` radians.
pub fn rotate(p: Point, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    Point::new(p.x * c - p.y * s, p.x * s + p.y * c)
}

/// Hard union of two fields.
pub fn union(a: f64, b: f64) -> f64 {
    a.min(b)
}

/// Polynomial smooth union with blend radius `k`.
///
/// `k <= 0` degenerates to [`union`].
pub fn smooth_union(a: f64, b: f64, k: f64) -> f64 {
    if k <= 0.0 {
        return union(a, b);
    }
    let h = ((k - (a - b).abs()) / k).clamp(0.0, 1.0);
    a.min(b) - h * h * k * 0.25
}

#[cfg(test)]
#[path = "../../tests/unit/shape/sdf.rs"]
mod tests;
