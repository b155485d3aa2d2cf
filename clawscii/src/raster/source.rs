use crate::assets::pixels::PixelBuffer;
use crate::assets::warp::ArticulationWarp;
use crate::foundation::core::{Grid, Rgba};
use crate::raster::grid::{IMAGE_SUBSAMPLES, ShapeMapping, image_points};
use crate::shape::node::{DistanceField, Shape};

/// Raw signal probed for one character cell, before quantization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellSignal {
    /// Signed distance in shape units.
    Distance(f64),
    /// Image samples for the cell's sub-rows, top first.
    Pixels([Rgba; IMAGE_SUBSAMPLES]),
}

/// A source posed for one aperture, queried cell by cell.
pub trait CellProbe {
    /// Probe the cell at `(col, row)`.
    fn probe(&self, col: u32, row: u32) -> CellSignal;
}

/// Anything that can be rasterized onto the character grid.
///
/// Posing is done once per frame so per-frame structures (such as a shape tree) are built once
/// and dropped after the frame is rasterized.
pub trait CellSource: Send + Sync {
    /// Pose the source for `aperture` on `grid`.
    fn pose(&self, grid: Grid, aperture: f64) -> Box<dyn CellProbe + '_>;

    /// Short label used in logs.
    fn label(&self) -> &'static str;
}

/// Procedural source backed by a [`DistanceField`].
#[derive(Clone, Debug)]
pub struct SdfSource<F> {
    field: F,
    mapping: ShapeMapping,
}

impl<F: DistanceField> SdfSource<F> {
    /// Rasterize `field` through `mapping`.
    pub fn new(field: F, mapping: ShapeMapping) -> Self {
        Self { field, mapping }
    }

    /// Underlying field.
    pub fn field(&self) -> &F {
        &self.field
    }
}

struct SdfProbe {
    shape: Shape,
    mapping: ShapeMapping,
    grid: Grid,
}

impl CellProbe for SdfProbe {
    fn probe(&self, col: u32, row: u32) -> CellSignal {
        CellSignal::Distance(self.shape.distance(self.mapping.point(self.grid, col, row)))
    }
}

impl<F: DistanceField> CellSource for SdfSource<F> {
    fn pose(&self, grid: Grid, aperture: f64) -> Box<dyn CellProbe + '_> {
        Box::new(SdfProbe {
            shape: self.field.pose(aperture),
            mapping: self.mapping,
            grid,
        })
    }

    fn label(&self) -> &'static str {
        "sdf"
    }
}

/// Bitmap source articulated through an [`ArticulationWarp`].
///
/// The aperture is read as the normalized openness in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct ImageSource {
    pixels: PixelBuffer,
    warp: ArticulationWarp,
}

impl ImageSource {
    /// Sample `pixels` through `warp`.
    pub fn new(pixels: PixelBuffer, warp: ArticulationWarp) -> Self {
        Self { pixels, warp }
    }

    /// Source image.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

struct ImageProbe<'a> {
    source: &'a ImageSource,
    grid: Grid,
    openness: f64,
}

impl CellProbe for ImageProbe<'_> {
    fn probe(&self, col: u32, row: u32) -> CellSignal {
        let px = &self.source.pixels;
        let (w, h) = (px.width(), px.height());
        let points = image_points(self.grid, w, h, col, row);
        CellSignal::Pixels(points.map(|p| {
            let src = self.source.warp.source_point(p, w, h, self.openness);
            px.sample(src.x, src.y)
        }))
    }
}

impl CellSource for ImageSource {
    fn pose(&self, grid: Grid, aperture: f64) -> Box<dyn CellProbe + '_> {
        Box::new(ImageProbe {
            source: self,
            grid,
            openness: aperture.clamp(0.0, 1.0),
        })
    }

    fn label(&self) -> &'static str {
        "image"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/source.rs"]
mod tests;
