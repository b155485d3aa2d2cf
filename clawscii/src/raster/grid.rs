//! Character-cell to source-space mapping.
//!
//! Glyphs are roughly twice as tall as they are wide. The shape path compresses `x` by a fixed
//! aspect factor before any geometric evaluation; the image path instead takes two sub-row
//! samples per character row.

use crate::foundation::core::{Grid, Point};
use crate::foundation::error::{ClawError, ClawResult};

/// Vertical samples taken per character row on the image path.
pub const IMAGE_SUBSAMPLES: usize = 2;

/// Default horizontal correction for glyph aspect ratio.
pub const DEFAULT_ASPECT: f64 = 0.48;

/// Maps grid cells to shape-space points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeMapping {
    /// Factor applied to every `x` offset (character width over height).
    pub aspect: f64,
    /// Horizontal position of the shape origin as a fraction of the grid width.
    pub center_x: f64,
    /// Vertical position of the shape origin as a fraction of the grid height.
    pub center_y: f64,
    /// Shape units per character row.
    pub scale: f64,
}

impl Default for ShapeMapping {
    fn default() -> Self {
        Self {
            aspect: DEFAULT_ASPECT,
            center_x: 0.38,
            center_y: 0.5,
            scale: 1.7,
        }
    }
}

impl ShapeMapping {
    /// Reject non-finite or non-positive factors.
    pub fn validate(&self) -> ClawResult<()> {
        for (name, v) in [
            ("aspect", self.aspect),
            ("scale", self.scale),
            ("center_x", self.center_x),
            ("center_y", self.center_y),
        ] {
            if !v.is_finite() {
                return Err(ClawError::validation(format!("sdf {name} must be finite")));
            }
        }
        if self.aspect <= 0.0 || self.scale <= 0.0 {
            return Err(ClawError::validation("sdf aspect and scale must be > 0"));
        }
        Ok(())
    }

    /// Shape-space point for cell `(col, row)`.
    pub fn point(&self, grid: Grid, col: u32, row: u32) -> Point {
        let x = (f64::from(col) - f64::from(grid.cols) * self.center_x) * self.aspect;
        let y = f64::from(row) - f64::from(grid.rows) * self.center_y;
        Point::new(x * self.scale, y * self.scale)
    }
}

/// Image-space sample points for cell `(col, row)`, top sub-row first.
///
/// The image is stretched over the grid; each cell samples its horizontal center and the centers
/// of its two sub-rows.
pub fn image_points(
    grid: Grid,
    width: u32,
    height: u32,
    col: u32,
    row: u32,
) -> [Point; IMAGE_SUBSAMPLES] {
    let step_x = f64::from(width) / f64::from(grid.cols);
    let sub_rows = f64::from(grid.rows) * IMAGE_SUBSAMPLES as f64;
    let step_y = f64::from(height) / sub_rows;
    let x = (f64::from(col) + 0.5) * step_x;

    std::array::from_fn(|k| {
        let sub = f64::from(row) * IMAGE_SUBSAMPLES as f64 + k as f64;
        Point::new(x, (sub + 0.5) * step_y)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/grid.rs"]
mod tests;
