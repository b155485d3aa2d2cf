use crate::foundation::core::{Point, Vec2};
use crate::shape::sdf;

/// Immutable signed-distance shape tree.
///
/// Trees are built fresh for each pose and evaluated on demand; nothing is cached.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Circle primitive.
    Circle {
        /// Center point.
        center: Point,
        /// Radius.
        radius: f64,
    },
    /// Axis-aligned box primitive.
    Rect {
        /// Center point.
        center: Point,
        /// Half width and half height.
        half_extents: Vec2,
    },
    /// Axis-aligned ellipse primitive (approximate distance).
    Ellipse {
        /// Center point.
        center: Point,
        /// Horizontal and vertical radii.
        radii: Vec2,
    },
    /// Child shape rotated about the origin.
    Rotated {
        /// Rotation in radians.
        angle: f64,
        /// Rotated child.
        shape: Box<Shape>,
    },
    /// Hard union of two children.
    Union(Box<Shape>, Box<Shape>),
    /// Smooth union of two children with blend radius `k`.
    SmoothUnion {
        /// Left child.
        a: Box<Shape>,
        /// Right child.
        b: Box<Shape>,
        /// Blend radius; `0` behaves as a hard union.
        k: f64,
    },
}

impl Shape {
    /// Circle centered at `center`.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    /// Box centered at `center` with the given half extents.
    pub fn rect(center: Point, half_extents: Vec2) -> Self {
        Self::Rect {
            center,
            half_extents,
        }
    }

    /// Ellipse centered at `center`.
    pub fn ellipse(center: Point, radii: Vec2) -> Self {
        Self::Ellipse { center, radii }
    }

    /// Rotate this shape about the origin.
    pub fn rotated(self, angle: f64) -> Self {
        Self::Rotated {
            angle,
            shape: Box::new(self),
        }
    }

    /// Hard union with `other`.
    pub fn union(self, other: Shape) -> Self {
        Self::Union(Box::new(self), Box::new(other))
    }

    /// Smooth union with `other` using blend radius `k`.
    pub fn smooth_union(self, other: Shape, k: f64) -> Self {
        Self::SmoothUnion {
            a: Box::new(self),
            b: Box::new(other),
            k,
        }
    }

    /// Signed distance from `p` to this shape.
    pub fn distance(&self, p: Point) -> f64 {
        match self {
            Self::Circle { center, radius } => sdf::circle(p, *center, *radius),
            Self::Rect {
                center,
                half_extents,
            } => sdf::rect(p, *center, *half_extents),
            Self::Ellipse { center, radii } => sdf::ellipse(p, *center, *radii),
            // Rotating the shape by `angle` is evaluating the child at the inverse-rotated point.
            Self::Rotated { angle, shape } => shape.distance(sdf::rotate(p, -angle)),
            Self::Union(a, b) => sdf::union(a.distance(p), b.distance(p)),
            Self::SmoothUnion { a, b, k } => sdf::smooth_union(a.distance(p), b.distance(p), *k),
        }
    }
}

/// A family of shapes parameterized by aperture.
pub trait DistanceField: Send + Sync {
    /// Build the shape tree for one aperture.
    fn pose(&self, aperture: f64) -> Shape;

    /// Evaluate the field at `p` for `aperture`.
    fn evaluate(&self, p: Point, aperture: f64) -> f64 {
        self.pose(aperture).distance(p)
    }
}

/// A fixed shape ignores aperture.
impl DistanceField for Shape {
    fn pose(&self, _aperture: f64) -> Shape {
        self.clone()
    }

    fn evaluate(&self, p: Point, _aperture: f64) -> f64 {
        self.distance(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/node.rs"]
mod tests;
