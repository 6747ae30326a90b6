//! cellview renders simulated cell locations as colored dots.
//!
//! Each cycle re-reads a CSV snapshot (`x`, `y`, type code in columns 3-5), clears a fixed-size
//! canvas, draws one dot per row in file order and writes the result through a [`FrameSink`]:
//!
//! - Build a [`RendererConfig`] (defaults match the reference setup)
//! - Create a [`Renderer`] and a sink such as [`PngSink`]
//! - Call [`Renderer::render_cycle`] once, or drive it with a [`Scheduler`]
#![forbid(unsafe_code)]

mod foundation;

/// Startup configuration.
pub mod config;
/// Clear-read-draw-save pass.
pub mod cycle;
/// Frame sinks.
pub mod encode;
/// Type code to color mapping.
pub mod palette;
/// CSV point records.
pub mod records;
/// Raster canvas.
pub mod render;
/// Fixed-rate loop.
pub mod scheduler;

pub use crate::config::RendererConfig;
pub use crate::cycle::{BACKGROUND, BORDER, CycleStats, Renderer};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSink};
pub use crate::foundation::core::{Canvas, Point, Rgb8};
pub use crate::foundation::error::{CellviewError, CellviewResult};
pub use crate::palette::{ColorPalette, TypeCode};
pub use crate::records::{MalformedLinePolicy, PointRecord, RecordBatch, parse_line};
pub use crate::render::cpu::CpuCanvas;
pub use crate::render::frame::FrameRGBA;
pub use crate::scheduler::{Scheduler, SchedulerReport, StopHandle};
