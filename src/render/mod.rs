//! Rasterization of point records.

/// `vello_cpu` canvas.
pub mod cpu;
/// Pixel readback buffer.
pub mod frame;
