use std::f64::consts::{FRAC_PI_2, TAU};

use crate::animation::ease::Ease;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ClawError, ClawResult};

/// Default phase: frame 0 starts at `min`.
pub const DEFAULT_PHASE: f64 = -FRAC_PI_2;

/// Periodic aperture schedule over one closed loop.
///
/// `aperture(t) = min + (max - min) * ease(0.5 + 0.5 * sin(2*pi*t + phase))` for `t = i / N`, so
/// `t = 0` and `t = 1` give the same aperture.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApertureSchedule {
    /// Aperture at the closed end of the cycle.
    pub min: f64,
    /// Aperture at the open end of the cycle.
    pub max: f64,
    /// Phase offset in radians.
    #[serde(default = "default_phase")]
    pub phase: f64,
    /// Shaping of the normalized wave.
    #[serde(default)]
    pub ease: Ease,
}

fn default_phase() -> f64 {
    DEFAULT_PHASE
}

impl ApertureSchedule {
    /// Claw hinge angles in radians.
    pub fn sdf_default() -> Self {
        Self {
            min: 0.0,
            max: 0.43,
            phase: DEFAULT_PHASE,
            ease: Ease::Linear,
        }
    }

    /// Normalized warp openness.
    pub fn image_default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            phase: DEFAULT_PHASE,
            ease: Ease::Linear,
        }
    }

    /// Reject non-finite values and reversed ranges.
    pub fn validate(&self) -> ClawResult<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.phase.is_finite()) {
            return Err(ClawError::validation("aperture schedule must be finite"));
        }
        if self.min > self.max {
            return Err(ClawError::validation(format!(
                "aperture range must be non-decreasing (min {} > max {})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Aperture at loop time `t` (one cycle per unit).
    pub fn at(&self, t: f64) -> f64 {
        let wave = 0.5 + 0.5 * (TAU * t + self.phase).sin();
        self.min + (self.max - self.min) * self.ease.apply(wave)
    }

    /// Aperture for frame `idx` of `total`.
    pub fn for_frame(&self, idx: FrameIndex, total: u32) -> f64 {
        if total == 0 {
            return self.at(0.0);
        }
        self.at(f64::from(idx.0) / f64::from(total))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
