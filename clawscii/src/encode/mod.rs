//! Frame sinks.
//!
//! Sinks receive frames in ascending frame index order, once per configured quality tier.

/// Directory layout sink and gap detection.
pub mod dir;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
