use std::path::PathBuf;

/// Convenience result type used across clawscii.
pub type ClawResult<T> = Result<T, ClawError>;

/// Top-level error taxonomy used by the rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum ClawError {
    /// Invalid configuration, rejected before any frame is computed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The source image is missing or could not be decoded.
    #[error("decode error: '{}': {source}", .path.display())]
    Decode {
        /// Image path as given by the configuration.
        path: PathBuf,
        /// Underlying IO or decoder failure.
        #[source]
        source: anyhow::Error,
    },

    /// Writing one frame of one tier failed. Other frames and tiers are unaffected.
    #[error("output error: frame {frame} tier '{tier}': {source}")]
    Output {
        /// 1-based frame number.
        frame: u32,
        /// Quality tier name.
        tier: String,
        /// Underlying filesystem failure.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClawError {
    /// Build a [`ClawError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ClawError::Decode`] value.
    pub fn decode(path: impl Into<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        Self::Decode {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Build a [`ClawError::Output`] value.
    pub fn output(frame: u32, tier: impl Into<String>, source: std::io::Error) -> Self {
        Self::Output {
            frame,
            tier: tier.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
