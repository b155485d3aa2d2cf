//! Continuous signal to glyph.
//!
//! The two source kinds keep their own density conventions. On the shape path depth drives
//! density: the deepest interior takes the densest glyphs and the silhouette gets its own band.
//! On the image path the mapping from brightness to density is set by [`Polarity`].

use crate::foundation::core::Rgba;
use crate::foundation::error::{ClawError, ClawResult};
use crate::foundation::math::clamp_index;
use crate::glyph::ramp::GlyphRamp;
use crate::raster::source::CellSignal;

/// Interior depth (in shape units) at which the densest interior glyph is reached.
const INTERIOR_DEPTH: f64 = 6.0;
/// Share of the ramp used for interior shading.
const INTERIOR_SHARE: f64 = 0.6;
/// Width of the outside edge band in shape units.
const EDGE_BAND: f64 = 1.5;
/// Ramp position where the edge band starts, and its width, as shares of the ramp.
const EDGE_START: f64 = 0.4;
const EDGE_SHARE: f64 = 0.4;
/// Minimum summed alpha of contributing samples.
const MIN_WEIGHT: f64 = 0.1;

/// Direction of the brightness to density mapping on the image path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Brightness 0 maps to the densest glyph, brightness 1 to the sparsest.
    #[default]
    BrightIsSparse,
    /// Brightness 1 maps to the densest glyph, brightness 0 to the sparsest.
    BrightIsDense,
}

/// Background rejection and polarity for image samples.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PixelPolicy {
    /// Samples less saturated than this are background.
    pub saturation_cutoff: f64,
    /// Cells whose mean alpha over all sub-samples is below this are background.
    pub alpha_cutoff: f64,
    /// Minimum fraction of sub-samples that must survive background rejection.
    pub min_coverage: f64,
    /// Brightness to density direction.
    pub polarity: Polarity,
}

impl Default for PixelPolicy {
    fn default() -> Self {
        Self {
            saturation_cutoff: 0.12,
            alpha_cutoff: 0.1,
            min_coverage: 0.5,
            polarity: Polarity::BrightIsSparse,
        }
    }
}

impl PixelPolicy {
    /// Reject thresholds outside `[0, 1]`.
    pub fn validate(&self) -> ClawResult<()> {
        for (name, v) in [
            ("saturation_cutoff", self.saturation_cutoff),
            ("alpha_cutoff", self.alpha_cutoff),
            ("min_coverage", self.min_coverage),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ClawError::validation(format!(
                    "image {name} must be within [0, 1] (got {v})"
                )));
            }
        }
        Ok(())
    }
}

/// Maps cell signals to glyphs from a [`GlyphRamp`].
#[derive(Clone, Debug, PartialEq)]
pub struct Quantizer {
    ramp: GlyphRamp,
    pixels: PixelPolicy,
}

impl Quantizer {
    /// Quantize against `ramp` with the given image policy.
    pub fn new(ramp: GlyphRamp, pixels: PixelPolicy) -> Self {
        Self { ramp, pixels }
    }

    /// Ramp in use.
    pub fn ramp(&self) -> &GlyphRamp {
        &self.ramp
    }

    /// Glyph for one probed cell. Background and far-field cells are spaces.
    pub fn glyph(&self, signal: &CellSignal) -> char {
        let index = match signal {
            CellSignal::Distance(d) => self.distance_index(*d),
            CellSignal::Pixels(samples) => self
                .pixel_brightness(samples)
                .map(|b| self.brightness_index(b)),
        };
        index.map_or(' ', |i| self.ramp.glyph(i))
    }

    /// Ramp index for a signed distance, or `None` outside the edge band.
    pub fn distance_index(&self, d: f64) -> Option<usize> {
        let len = self.ramp.len();
        let n = len as f64;
        if d < 0.0 {
            let depth = (-d / INTERIOR_DEPTH).min(1.0);
            Some(clamp_index((1.0 - depth) * n * INTERIOR_SHARE, len))
        } else if d < EDGE_BAND {
            let edge_fade = d / EDGE_BAND;
            Some(clamp_index(n * EDGE_START + edge_fade * n * EDGE_SHARE, len))
        } else {
            None
        }
    }

    /// Ramp index for a brightness in `[0, 1]`, honoring polarity.
    pub fn brightness_index(&self, brightness: f64) -> usize {
        let len = self.ramp.len();
        let last = len.saturating_sub(1) as f64;
        let t = match self.pixels.polarity {
            Polarity::BrightIsSparse => brightness,
            Polarity::BrightIsDense => 1.0 - brightness,
        };
        clamp_index(t * last, len)
    }

    /// Alpha-weighted mean luma of the foreground samples, or `None` for background.
    pub fn pixel_brightness(&self, samples: &[Rgba]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        let expected = samples.len() as f64;
        let mut alpha_total = 0.0;
        let mut contributing = 0usize;
        let mut weight = 0.0;
        let mut luma = 0.0;
        for s in samples {
            let a = s.alpha_unit();
            alpha_total += a;
            if s.saturation() < self.pixels.saturation_cutoff {
                continue;
            }
            contributing += 1;
            weight += a;
            luma += s.luma() * a;
        }

        if alpha_total / expected < self.pixels.alpha_cutoff {
            return None;
        }
        if (contributing as f64) < self.pixels.min_coverage * expected || weight < MIN_WEIGHT {
            return None;
        }
        let brightness = luma / weight;
        if brightness.is_nan() {
            return None;
        }
        Some(brightness.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/quantize.rs"]
mod tests;
