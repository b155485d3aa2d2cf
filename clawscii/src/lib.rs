//! clawscii renders an articulating claw as fixed-width character animation frames.
//!
//! Frames come from one of two sources sharing a single rasterizer and quantizer:
//!
//! - a procedural claw built from signed-distance primitives ([`ClawModel`]), posed by a hinge
//!   angle, or
//! - a bitmap ([`PixelBuffer`]) sampled bilinearly through an [`ArticulationWarp`] that opens the
//!   pincer by remapping sample coordinates.
//!
//! # Pipeline overview
//!
//! 1. **Pose**: [`ApertureSchedule`] turns a frame index into an aperture, and the
//!    [`CellSource`] is posed for it.
//! 2. **Rasterize**: every grid cell is mapped to source space and probed for a [`CellSignal`].
//! 3. **Quantize**: [`Quantizer`] picks a glyph from the [`GlyphRamp`].
//! 4. **Emit**: the [`Frame`] is handed to a [`FrameSink`] once per quality tier.
//!
//! Each frame is a pure function of its index and the configuration, so frames may render in
//! parallel; sinks still see them in index order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
/// Frame sinks and output layout.
pub mod encode;
mod foundation;
mod glyph;
mod raster;
mod render;
mod scene;
mod shape;

pub use crate::animation::ease::Ease;
pub use crate::animation::schedule::{ApertureSchedule, DEFAULT_PHASE};
pub use crate::assets::decode::{decode_image, load_image};
pub use crate::assets::pixels::PixelBuffer;
pub use crate::assets::warp::{ArticulationWarp, DEFAULT_WARP_STRENGTH};
pub use crate::encode::dir::{DirectorySink, frame_file_name, missing_frames};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::core::{FrameIndex, Grid, Point, Rgba, Vec2, validate_name};
pub use crate::foundation::error::{ClawError, ClawResult};
pub use crate::glyph::quantize::{PixelPolicy, Polarity, Quantizer};
pub use crate::glyph::ramp::GlyphRamp;
pub use crate::raster::grid::{DEFAULT_ASPECT, IMAGE_SUBSAMPLES, ShapeMapping, image_points};
pub use crate::raster::source::{CellProbe, CellSignal, CellSource, ImageSource, SdfSource};
pub use crate::render::frame::Frame;
pub use crate::render::sequencer::{
    FrameFailure, RenderReport, RenderThreading, SequenceSettings, Sequencer,
};
pub use crate::scene::config::{AnimationConfig, ImageSourceConfig, SourceConfig};
pub use crate::shape::claw::{ClawGeometry, ClawModel, PincerGeometry};
pub use crate::shape::node::{DistanceField, Shape};
/// Signed-distance primitives and combinators.
pub use crate::shape::sdf;
