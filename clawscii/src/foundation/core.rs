use crate::foundation::error::{ClawError, ClawResult};

pub use kurbo::{Point, Vec2};

/// Absolute 0-based frame index within an animation set.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

impl FrameIndex {
    /// 1-based frame number used in output file names.
    pub fn number(self) -> u32 {
        self.0.saturating_add(1)
    }
}

/// Character grid dimensions, constant across one animation set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    /// Columns (maximum characters per row).
    pub cols: u32,
    /// Rows before trailing-blank trimming.
    pub rows: u32,
}

impl Grid {
    /// Create a validated grid with non-zero dimensions.
    pub fn new(cols: u32, rows: u32) -> ClawResult<Self> {
        let grid = Self { cols, rows };
        grid.validate()?;
        Ok(grid)
    }

    /// Reject zero-sized grids.
    pub fn validate(self) -> ClawResult<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ClawError::validation(format!(
                "grid dimensions must be > 0 (got {}x{})",
                self.cols, self.rows
            )));
        }
        Ok(())
    }

    /// Number of cells in the grid.
    pub fn cells(self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self { cols: 80, rows: 36 }
    }
}

/// Check that `name` can be used as a single path component (stream and tier names).
pub fn validate_name(what: &str, name: &str) -> ClawResult<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(ClawError::validation(format!(
            "{what} name must be non-empty and not '.' or '..' (got '{name}')"
        )));
    }
    if name.contains(['/', '\\']) || name.chars().any(char::is_control) {
        return Err(ClawError::validation(format!(
            "{what} name must not contain path separators or control characters (got '{name}')"
        )));
    }
    Ok(())
}

/// Straight-alpha RGBA sample with channels as reals in `[0, 255]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black, returned for out-of-bounds samples.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Build a sample from channel values.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Rec. 601 luma normalized to `[0, 1]`.
    pub fn luma(self) -> f64 {
        (0.299 * self.r + 0.587 * self.g + 0.114 * self.b) / 255.0
    }

    /// HSV-style saturation `(max - min) / max`, zero when `max` is zero.
    pub fn saturation(self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        crate::foundation::math::ratio_or_zero(max - min, max)
    }

    /// Alpha normalized to `[0, 1]`.
    pub fn alpha_unit(self) -> f64 {
        self.a / 255.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
