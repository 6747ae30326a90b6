//! Shared value types and the crate error.

/// Canvas, color and point types.
pub mod core;
/// Error taxonomy.
pub mod error;
