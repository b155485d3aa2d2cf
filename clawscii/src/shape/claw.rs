//! The articulated claw.
//!
//! Shape units are character rows. The hinge sits at the origin; pincers reach toward `-x` and
//! the arm extends toward `+x`. Screen `y` grows downward.

use crate::foundation::core::{Point, Vec2};
use crate::shape::node::{DistanceField, Shape};
use crate::shape::sdf;

/// Blend radius between the palm and each pincer arm.
const PINCER_BLEND: f64 = 4.0;
/// Blend radius for the knuckle.
const KNUCKLE_BLEND: f64 = 3.0;
/// Blend radius for the forearm.
const ARM_BLEND: f64 = 4.0;

/// Geometry of one pincer in its closed pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PincerGeometry {
    /// Center of the tapered finger ellipse.
    pub finger_center: Point,
    /// Radii of the finger ellipse.
    pub finger_radii: Vec2,
    /// Center of the tip circle.
    pub tip_center: Point,
    /// Radius of the tip circle.
    pub tip_radius: f64,
}

impl PincerGeometry {
    fn shape(&self, angle: f64) -> (Shape, Shape) {
        let finger = Shape::ellipse(self.finger_center, self.finger_radii).rotated(angle);
        let tip = Shape::circle(self.tip_center, self.tip_radius).rotated(angle);
        (finger, tip)
    }
}

/// Static and articulated parts of the claw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClawGeometry {
    /// Palm ellipse center.
    pub palm_center: Point,
    /// Palm ellipse radii.
    pub palm_radii: Vec2,
    /// Knuckle circle center.
    pub knuckle_center: Point,
    /// Knuckle radius.
    pub knuckle_radius: f64,
    /// Forearm ellipse center.
    pub arm_center: Point,
    /// Forearm ellipse radii.
    pub arm_radii: Vec2,
    /// Fixed finger (moves by a fraction of the aperture).
    pub upper: PincerGeometry,
    /// Dactyl (moves by the full aperture, opposite direction).
    pub lower: PincerGeometry,
    /// Fraction of the aperture applied to the upper pincer.
    pub upper_ratio: f64,
}

impl Default for ClawGeometry {
    fn default() -> Self {
        Self {
            palm_center: Point::new(3.0, 0.0),
            palm_radii: Vec2::new(6.0, 4.5),
            knuckle_center: Point::new(-3.0, 0.0),
            knuckle_radius: 2.5,
            arm_center: Point::new(16.0, 1.0),
            arm_radii: Vec2::new(9.0, 3.0),
            upper: PincerGeometry {
                finger_center: Point::new(-13.0, -2.6),
                finger_radii: Vec2::new(11.0, 1.8),
                tip_center: Point::new(-23.0, -0.4),
                tip_radius: 1.3,
            },
            lower: PincerGeometry {
                finger_center: Point::new(-13.0, 2.6),
                finger_radii: Vec2::new(11.0, 1.8),
                tip_center: Point::new(-23.0, 0.4),
                tip_radius: 1.3,
            },
            upper_ratio: 0.3,
        }
    }
}

/// Two-pincer claw whose pose is driven by one aperture in radians.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClawModel {
    geometry: ClawGeometry,
}

impl ClawModel {
    /// Build a claw with custom geometry.
    pub fn new(geometry: ClawGeometry) -> Self {
        Self { geometry }
    }

    /// Geometry in the closed pose.
    pub fn geometry(&self) -> &ClawGeometry {
        &self.geometry
    }

    /// Rotation of the upper and lower pincers for `aperture`.
    pub fn pincer_angles(&self, aperture: f64) -> (f64, f64) {
        (aperture * self.geometry.upper_ratio, -aperture)
    }

    /// World-space centers of the upper and lower tips for `aperture`.
    pub fn tips(&self, aperture: f64) -> (Point, Point) {
        let (upper, lower) = self.pincer_angles(aperture);
        (
            sdf::rotate(self.geometry.upper.tip_center, upper),
            sdf::rotate(self.geometry.lower.tip_center, lower),
        )
    }

    /// Distance between the two tips for `aperture`.
    pub fn tip_gap(&self, aperture: f64) -> f64 {
        let (a, b) = self.tips(aperture);
        a.distance(b)
    }
}

impl DistanceField for ClawModel {
    fn pose(&self, aperture: f64) -> Shape {
        let g = &self.geometry;
        let (upper_angle, lower_angle) = self.pincer_angles(aperture);
        let (upper_finger, upper_tip) = g.upper.shape(upper_angle);
        let (lower_finger, lower_tip) = g.lower.shape(lower_angle);

        Shape::ellipse(g.palm_center, g.palm_radii)
            .smooth_union(upper_finger, PINCER_BLEND)
            .smooth_union(lower_finger, PINCER_BLEND)
            .smooth_union(
                Shape::circle(g.knuckle_center, g.knuckle_radius),
                KNUCKLE_BLEND,
            )
            .smooth_union(Shape::ellipse(g.arm_center, g.arm_radii), ARM_BLEND)
            .smooth_union(upper_tip, 0.0)
            .smooth_union(lower_tip, 0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/claw.rs"]
mod tests;
