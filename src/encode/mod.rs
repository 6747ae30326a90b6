//! Destinations for rendered frames.

/// Frame sink trait, PNG file sink and in-memory sink.
pub mod sink;
