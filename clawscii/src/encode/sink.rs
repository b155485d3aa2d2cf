use crate::foundation::core::{FrameIndex, Grid};
use crate::foundation::error::ClawResult;
use crate::render::frame::Frame;

/// Configuration provided to a [`FrameSink`] at the start of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Animation stream name.
    pub stream: String,
    /// Grid maxima shared by every frame.
    pub grid: Grid,
    /// Total frames in the set.
    pub frames: u32,
    /// Quality tiers, each receiving every frame.
    pub tiers: Vec<String>,
}

/// Sink contract for consuming rendered frames.
///
/// Ordering contract: `push_frame` is called in non-decreasing `FrameIndex` order, once per tier
/// for each index. An error from `push_frame` affects only that frame and tier.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: &SinkConfig) -> ClawResult<()>;
    /// Store one frame for one tier.
    fn push_frame(&mut self, idx: FrameIndex, tier: &str, frame: &Frame) -> ClawResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ClawResult<()>;
}

/// In-memory sink for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, String, Frame)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured `(index, tier, frame)` entries in push order.
    pub fn frames(&self) -> &[(FrameIndex, String, Frame)] {
        &self.frames
    }

    /// Frames captured for one tier, in push order.
    pub fn tier(&self, tier: &str) -> Vec<&Frame> {
        self.frames
            .iter()
            .filter(|(_, t, _)| t == tier)
            .map(|(_, _, f)| f)
            .collect()
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: &SinkConfig) -> ClawResult<()> {
        self.cfg = Some(cfg.clone());
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, tier: &str, frame: &Frame) -> ClawResult<()> {
        self.frames.push((idx, tier.to_owned(), frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ClawResult<()> {
        Ok(())
    }
}
