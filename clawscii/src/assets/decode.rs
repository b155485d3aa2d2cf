use std::path::Path;

use anyhow::Context;

use crate::assets::pixels::PixelBuffer;
use crate::foundation::error::{ClawError, ClawResult};

/// Decode encoded image bytes into straight-alpha RGBA8.
///
/// Alpha is kept unpremultiplied: background rejection needs the source saturation.
pub fn decode_image(bytes: &[u8]) -> ClawResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_rgba8(width, height, rgba.into_raw())
}

/// Read and decode an image file.
///
/// Missing or corrupt files are reported as [`ClawError::Decode`] with the offending path.
#[tracing::instrument]
pub fn load_image(path: &Path) -> ClawResult<PixelBuffer> {
    let bytes = std::fs::read(path).map_err(|e| ClawError::decode(path, e))?;
    let pixels = decode_image(&bytes).map_err(|e| match e {
        ClawError::Other(source) => ClawError::decode(path, source),
        other => other,
    })?;
    tracing::debug!(
        width = pixels.width(),
        height = pixels.height(),
        "decoded source image"
    );
    Ok(pixels)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
