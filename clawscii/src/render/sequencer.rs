use rayon::prelude::*;

use crate::animation::schedule::ApertureSchedule;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Grid, validate_name};
use crate::foundation::error::{ClawError, ClawResult};
use crate::glyph::quantize::Quantizer;
use crate::raster::source::CellSource;
use crate::render::frame::Frame;

/// Shape of one animation set.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceSettings {
    /// Stream name, used as the output directory.
    pub stream: String,
    /// Grid maxima for every frame.
    pub grid: Grid,
    /// Frames per loop.
    pub frames: u32,
    /// Quality tiers; all receive identical content.
    pub tiers: Vec<String>,
    /// Aperture over time.
    pub schedule: ApertureSchedule,
}

impl SequenceSettings {
    /// Reject empty or malformed settings before any frame is computed.
    pub fn validate(&self) -> ClawResult<()> {
        self.grid.validate()?;
        if self.frames == 0 {
            return Err(ClawError::validation("frame count must be > 0"));
        }
        validate_name("stream", &self.stream)?;
        if self.tiers.is_empty() {
            return Err(ClawError::validation("at least one quality tier is required"));
        }
        for (i, tier) in self.tiers.iter().enumerate() {
            validate_name("tier", tier)?;
            if self.tiers[..i].contains(tier) {
                return Err(ClawError::validation(format!("duplicate tier '{tier}'")));
            }
        }
        self.schedule.validate()
    }
}

/// Threading and chunking controls for multi-frame rendering.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Render the frames of each chunk in parallel when `true`.
    pub parallel: bool,
    /// Chunk size in frames; frames are handed to the sink chunk by chunk.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// One frame/tier combination that could not be written.
#[derive(Debug)]
pub struct FrameFailure {
    /// Frame that failed.
    pub frame: FrameIndex,
    /// Tier that failed.
    pub tier: String,
    /// Cause reported by the sink.
    pub error: ClawError,
}

/// Outcome of a full run.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Frames in the set.
    pub frames_total: u32,
    /// Frame/tier files successfully written.
    pub writes_ok: u32,
    /// Frame/tier combinations that failed, in frame order.
    pub failures: Vec<FrameFailure>,
}

impl RenderReport {
    /// `true` when every frame reached every tier.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives aperture over time and turns each pose into a [`Frame`].
///
/// Each frame is a pure function of its index and the sequencer's configuration.
pub struct Sequencer {
    settings: SequenceSettings,
    source: Box<dyn CellSource>,
    quantizer: Quantizer,
}

impl std::fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("settings", &self.settings)
            .field("source", &self.source.label())
            .field("quantizer", &self.quantizer)
            .finish()
    }
}

impl Sequencer {
    /// Validate `settings` and build a sequencer.
    pub fn new(
        settings: SequenceSettings,
        source: Box<dyn CellSource>,
        quantizer: Quantizer,
    ) -> ClawResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            source,
            quantizer,
        })
    }

    /// Settings in use.
    pub fn settings(&self) -> &SequenceSettings {
        &self.settings
    }

    /// Aperture for frame `idx`.
    pub fn aperture(&self, idx: FrameIndex) -> f64 {
        self.settings.schedule.for_frame(idx, self.settings.frames)
    }

    /// Rasterize and quantize one frame.
    pub fn render_frame(&self, idx: FrameIndex) -> Frame {
        let grid = self.settings.grid;
        let aperture = self.aperture(idx);
        let probe = self.source.pose(grid, aperture);

        let mut rows = Vec::with_capacity(grid.rows as usize);
        for row in 0..grid.rows {
            let mut line = String::with_capacity(grid.cols as usize);
            for col in 0..grid.cols {
                line.push(self.quantizer.glyph(&probe.probe(col, row)));
            }
            rows.push(line);
        }
        tracing::debug!(frame = idx.number(), aperture, "rendered frame");
        Frame::from_rows(rows)
    }

    /// Render every frame and hand each one to `sink` once per tier.
    ///
    /// Frames reach the sink in index order even when chunks render in parallel. Failed writes are
    /// collected in the report and never stop the remaining frames or tiers; only `begin`/`end`
    /// failures and thread pool setup abort the run.
    #[tracing::instrument(skip_all, fields(stream = %self.settings.stream, source = self.source.label()))]
    pub fn render_to_sink(
        &self,
        sink: &mut dyn FrameSink,
        threading: &RenderThreading,
    ) -> ClawResult<RenderReport> {
        let total = self.settings.frames;
        let pool = if threading.parallel {
            Some(build_thread_pool(threading.threads)?)
        } else {
            None
        };

        sink.begin(&SinkConfig {
            stream: self.settings.stream.clone(),
            grid: self.settings.grid,
            frames: total,
            tiers: self.settings.tiers.clone(),
        })?;
        tracing::info!(
            frames = total,
            tiers = self.settings.tiers.len(),
            parallel = threading.parallel,
            "rendering animation set"
        );

        let mut report = RenderReport {
            frames_total: total,
            ..RenderReport::default()
        };
        let chunk_size = normalized_chunk_size(threading.chunk_size);
        let mut chunk_start = 0u32;
        while chunk_start < total {
            let chunk_end = chunk_start.saturating_add(chunk_size).min(total);
            let frames: Vec<Frame> = match &pool {
                Some(pool) => pool.install(|| {
                    (chunk_start..chunk_end)
                        .into_par_iter()
                        .map(|i| self.render_frame(FrameIndex(i)))
                        .collect()
                }),
                None => (chunk_start..chunk_end)
                    .map(|i| self.render_frame(FrameIndex(i)))
                    .collect(),
            };

            for (offset, frame) in frames.iter().enumerate() {
                let idx = FrameIndex(chunk_start + offset as u32);
                self.push_all_tiers(sink, idx, frame, &mut report);
            }
            chunk_start = chunk_end;
        }

        sink.end()?;
        tracing::info!(
            written = report.writes_ok,
            failed = report.failures.len(),
            "animation set finished"
        );
        Ok(report)
    }

    fn push_all_tiers(
        &self,
        sink: &mut dyn FrameSink,
        idx: FrameIndex,
        frame: &Frame,
        report: &mut RenderReport,
    ) {
        for tier in &self.settings.tiers {
            match sink.push_frame(idx, tier, frame) {
                Ok(()) => report.writes_ok += 1,
                Err(error) => {
                    tracing::warn!(frame = idx.number(), tier = %tier, %error, "frame write failed");
                    report.failures.push(FrameFailure {
                        frame: idx,
                        tier: tier.clone(),
                        error,
                    });
                }
            }
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> ClawResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ClawError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}

fn normalized_chunk_size(chunk_size: usize) -> u32 {
    u32::try_from(chunk_size.max(1)).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequencer.rs"]
mod tests;
