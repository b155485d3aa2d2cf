use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::animation::schedule::ApertureSchedule;
use crate::assets::decode::load_image;
use crate::assets::warp::{ArticulationWarp, DEFAULT_WARP_STRENGTH};
use crate::foundation::core::Grid;
use crate::foundation::error::{ClawError, ClawResult};
use crate::glyph::quantize::{PixelPolicy, Quantizer};
use crate::glyph::ramp::GlyphRamp;
use crate::raster::grid::ShapeMapping;
use crate::raster::source::{CellSource, ImageSource, SdfSource};
use crate::render::sequencer::{SequenceSettings, Sequencer};
use crate::shape::claw::ClawModel;

/// Where frames come from.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Procedural claw rasterized from its signed distance field.
    Sdf(ShapeMapping),
    /// Bitmap claw articulated by the sampling warp.
    Image(ImageSourceConfig),
}

/// Bitmap source settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageSourceConfig {
    /// Image path; relative paths resolve against the config file's directory.
    pub path: PathBuf,
    /// Tip displacement at full openness, as a fraction of image height.
    #[serde(default = "default_warp_strength")]
    pub warp_strength: f64,
    /// Background rejection and polarity.
    #[serde(default, flatten)]
    pub policy: PixelPolicy,
}

fn default_warp_strength() -> f64 {
    DEFAULT_WARP_STRENGTH
}

/// One animation run, as written in a JSON config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// Stream name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Grid maxima.
    #[serde(default)]
    pub grid: Grid,
    /// Frames per loop.
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// Quality tiers.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<String>,
    /// Preset name or literal glyphs, densest first.
    #[serde(default)]
    pub ramp: GlyphRamp,
    /// Aperture schedule; defaults depend on the source kind.
    #[serde(default)]
    pub schedule: Option<ApertureSchedule>,
    /// Frame source.
    pub source: SourceConfig,
}

fn default_name() -> String {
    "claw".to_owned()
}

fn default_frames() -> u32 {
    48
}

fn default_tiers() -> Vec<String> {
    ["low", "medium", "high"].map(str::to_owned).to_vec()
}

impl AnimationConfig {
    /// Procedural claw with every default.
    pub fn sdf_default() -> Self {
        Self {
            name: default_name(),
            grid: Grid::default(),
            frames: default_frames(),
            tiers: default_tiers(),
            ramp: GlyphRamp::default(),
            schedule: None,
            source: SourceConfig::Sdf(ShapeMapping::default()),
        }
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ClawResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ClawError::validation(format!("parse animation config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ClawResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ClawError::validation(format!("open animation config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Effective schedule after applying the per-source default.
    pub fn schedule(&self) -> ApertureSchedule {
        self.schedule.unwrap_or_else(|| match self.source {
            SourceConfig::Sdf(_) => ApertureSchedule::sdf_default(),
            SourceConfig::Image(_) => ApertureSchedule::image_default(),
        })
    }

    /// Sequence settings derived from this config.
    pub fn settings(&self) -> SequenceSettings {
        SequenceSettings {
            stream: self.name.clone(),
            grid: self.grid,
            frames: self.frames,
            tiers: self.tiers.clone(),
            schedule: self.schedule(),
        }
    }

    /// Check everything that does not require touching the filesystem.
    pub fn validate(&self) -> ClawResult<()> {
        self.settings().validate()?;
        match &self.source {
            SourceConfig::Sdf(mapping) => mapping.validate(),
            SourceConfig::Image(img) => {
                if !img.warp_strength.is_finite() || img.warp_strength < 0.0 {
                    return Err(ClawError::validation("image warp_strength must be >= 0"));
                }
                img.policy.validate()
            }
        }
    }

    /// Validate, load the source, and build a ready-to-run [`Sequencer`].
    ///
    /// Relative image paths resolve against `base_dir`.
    #[tracing::instrument(skip(self), fields(name = %self.name))]
    pub fn build(&self, base_dir: &Path) -> ClawResult<Sequencer> {
        self.validate()?;
        let (source, policy): (Box<dyn CellSource>, PixelPolicy) = match &self.source {
            SourceConfig::Sdf(mapping) => (
                Box::new(SdfSource::new(ClawModel::default(), *mapping)),
                PixelPolicy::default(),
            ),
            SourceConfig::Image(img) => {
                let pixels = load_image(&base_dir.join(&img.path))?;
                (
                    Box::new(ImageSource::new(
                        pixels,
                        ArticulationWarp::new(img.warp_strength),
                    )),
                    img.policy,
                )
            }
        };
        Sequencer::new(
            self.settings(),
            source,
            Quantizer::new(self.ramp.clone(), policy),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
