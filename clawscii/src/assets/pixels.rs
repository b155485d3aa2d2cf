use std::sync::Arc;

use crate::foundation::core::Rgba;
use crate::foundation::error::{ClawError, ClawResult};

/// Decoded raster image in straight-alpha RGBA8, immutable for the duration of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgba8: Arc<Vec<u8>>,
}

impl PixelBuffer {
    /// Wrap tightly packed row-major RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> ClawResult<Self> {
        if width == 0 || height == 0 {
            return Err(ClawError::validation("image dimensions must be > 0"));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| ClawError::validation("image dimensions overflow"))?;
        if rgba8.len() != expected {
            return Err(ClawError::validation(format!(
                "image buffer has {} bytes, expected {expected}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Exact pixel at integer coordinates. Callers keep `x < width` and `y < height`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.rgba8[i..i + 4];
        Rgba::new(
            f64::from(px[0]),
            f64::from(px[1]),
            f64::from(px[2]),
            f64::from(px[3]),
        )
    }

    /// Bilinear sample at continuous coordinates.
    ///
    /// Pixel `(i, j)` sits at coordinate `(i, j)`. Neighbors past the last row or column clamp to
    /// the border; coordinates outside `[0, width) x [0, height)` return transparent black.
    pub fn sample(&self, x: f64, y: f64) -> Rgba {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        if !(x >= 0.0 && x < w && y >= 0.0 && y < h) {
            return Rgba::TRANSPARENT;
        }

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let fx = x - f64::from(x0);
        let fy = y - f64::from(y0);

        let top = mix(self.pixel(x0, y0), self.pixel(x1, y0), fx);
        let bottom = mix(self.pixel(x0, y1), self.pixel(x1, y1), fx);
        mix(top, bottom, fy)
    }
}

fn mix(a: Rgba, b: Rgba, t: f64) -> Rgba {
    use crate::foundation::math::lerp;
    Rgba::new(
        lerp(a.r, b.r, t),
        lerp(a.g, b.g, t),
        lerp(a.b, b.b, t),
        lerp(a.a, b.a, t),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assets/pixels.rs"]
mod tests;
