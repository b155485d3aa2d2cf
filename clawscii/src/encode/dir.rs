use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ClawError, ClawResult};
use crate::render::frame::Frame;

/// File name for a 1-based frame number: `frame_00001.txt`.
pub fn frame_file_name(number: u32) -> String {
    format!("frame_{number:05}.txt")
}

/// Parse a frame number back out of a file name produced by [`frame_file_name`].
pub fn parse_frame_file_name(name: &str) -> Option<u32> {
    let digits = name.strip_prefix("frame_")?.strip_suffix(".txt")?;
    if digits.len() < 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Writes `<root>/<stream>/<tier>/frame_<nnnnn>.txt`.
///
/// Tier directories are created on first use. File names depend only on frame index and tier,
/// so no two pushes ever target the same file.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    stream: Option<String>,
    created: HashSet<String>,
}

impl DirectorySink {
    /// Write streams under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            stream: None,
            created: HashSet::new(),
        }
    }

    /// Output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for `tier` in the current stream.
    pub fn tier_dir(&self, tier: &str) -> PathBuf {
        let mut dir = self.root.clone();
        if let Some(stream) = &self.stream {
            dir.push(stream);
        }
        dir.push(tier);
        dir
    }

    /// Full path of one frame file.
    pub fn frame_path(&self, idx: FrameIndex, tier: &str) -> PathBuf {
        self.tier_dir(tier).join(frame_file_name(idx.number()))
    }
}

impl FrameSink for DirectorySink {
    fn begin(&mut self, cfg: &SinkConfig) -> ClawResult<()> {
        self.stream = Some(cfg.stream.clone());
        self.created.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, tier: &str, frame: &Frame) -> ClawResult<()> {
        let number = idx.number();
        if !self.created.contains(tier) {
            let dir = self.tier_dir(tier);
            std::fs::create_dir_all(&dir).map_err(|e| ClawError::output(number, tier, e))?;
            self.created.insert(tier.to_owned());
        }
        let path = self.frame_path(idx, tier);
        write_frame_file(&path, &frame.to_text()).map_err(|e| ClawError::output(number, tier, e))
    }

    fn end(&mut self) -> ClawResult<()> {
        Ok(())
    }
}

/// Write `text` to a sibling `.tmp` file and rename it into place.
///
/// A frame file only ever appears complete, so a failed write shows up as a gap.
fn write_frame_file(path: &Path, text: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("txt.tmp");
    let result = std::fs::write(&tmp, text).and_then(|()| std::fs::rename(&tmp, path));
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

/// Frame numbers in `1..=expected` that have no file in `tier_dir`.
///
/// A missing directory reports every number as missing.
pub fn missing_frames(tier_dir: &Path, expected: u32) -> ClawResult<Vec<u32>> {
    let mut present = HashSet::new();
    match std::fs::read_dir(tier_dir) {
        Ok(entries) => {
            for entry in entries {
                let entry = entry.map_err(anyhow::Error::from)?;
                if let Some(n) = entry.file_name().to_str().and_then(parse_frame_file_name) {
                    present.insert(n);
                }
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(anyhow::Error::from(e)
                .context(format!("read tier dir '{}'", tier_dir.display()))
                .into());
        }
    }
    Ok((1..=expected).filter(|n| !present.contains(n)).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/dir.rs"]
mod tests;
