use crate::foundation::core::Point;

/// Default vertical displacement at the tips, as a fraction of image height.
pub const DEFAULT_WARP_STRENGTH: f64 = 0.22;

/// Simulates the hinge rotation of the moving pincer by remapping sample coordinates.
///
/// The destination grid is never moved; only the gather position shifts. Rows above the vertical
/// center are displaced downward in source space by `ease(x / width) * max_displacement`, with
/// `ease(h) = h^1.5`. Rows at or below the center (the fixed finger) are sampled unmodified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArticulationWarp {
    strength: f64,
}

impl Default for ArticulationWarp {
    fn default() -> Self {
        Self {
            strength: DEFAULT_WARP_STRENGTH,
        }
    }
}

impl ArticulationWarp {
    /// Warp with a custom strength (fraction of image height at full openness).
    pub fn new(strength: f64) -> Self {
        Self { strength }
    }

    /// Configured strength.
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Largest displacement in pixels for `openness` in `[0, 1]`.
    pub fn max_displacement(&self, openness: f64, height: u32) -> f64 {
        openness * f64::from(height) * self.strength
    }

    /// Map a destination coordinate to the coordinate to sample.
    pub fn source_point(&self, p: Point, width: u32, height: u32, openness: f64) -> Point {
        if p.y >= f64::from(height) * 0.5 {
            return p;
        }
        let h = (p.x / f64::from(width)).clamp(0.0, 1.0);
        let ease = h.powf(1.5);
        Point::new(p.x, p.y + ease * self.max_displacement(openness, height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/warp.rs"]
mod tests;
