//! One clear-read-draw-save pass.

use crate::config::RendererConfig;
use crate::encode::sink::FrameSink;
use crate::foundation::core::Rgb8;
use crate::foundation::error::CellviewResult;
use crate::palette::TypeCode;
use crate::records::{RecordBatch, load_records};
use crate::render::cpu::CpuCanvas;
use crate::render::frame::FrameRGBA;

/// Canvas fill painted before any dot.
pub const BACKGROUND: Rgb8 = Rgb8::new(255, 255, 255);
/// Near-black border around the full canvas extent.
pub const BORDER: Rgb8 = Rgb8::new(16, 16, 16);

/// Counters for one completed cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Dots drawn, one per well-formed record.
    pub drawn: u64,
    /// Malformed rows dropped under the skip policy.
    pub skipped: u64,
    /// Records per defined type code, indexed by [`TypeCode::index`].
    pub type_counts: [u64; 5],
    /// Records whose code has no palette entry.
    pub unknown: u64,
}

impl CycleStats {
    pub fn count(&self, ty: TypeCode) -> u64 {
        self.type_counts[ty.index()]
    }
}

/// Owns the configuration and the reusable canvas for the lifetime of the process.
pub struct Renderer {
    config: RendererConfig,
    canvas: CpuCanvas,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> CellviewResult<Self> {
        config.validate()?;
        let canvas = CpuCanvas::new(config.canvas()?)?;
        Ok(Self { config, canvas })
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Read the input file, draw it, and hand the frame to `sink`.
    ///
    /// Any error leaves the sink untouched for this cycle.
    #[tracing::instrument(skip(self, sink), fields(input = %self.config.input_path.display()))]
    pub fn render_cycle(
        &mut self,
        cycle: u64,
        sink: &mut dyn FrameSink,
    ) -> CellviewResult<CycleStats> {
        let batch = load_records(&self.config.input_path, self.config.on_malformed)?;
        let (frame, stats) = self.draw(&batch);
        sink.write_frame(cycle, &frame)?;

        tracing::info!(
            cycle,
            drawn = stats.drawn,
            skipped = stats.skipped,
            unknown = stats.unknown,
            "{}",
            summarize_types(&stats)
        );
        Ok(stats)
    }

    /// Clear the canvas and draw `batch` in row order.
    pub fn draw(&mut self, batch: &RecordBatch) -> (FrameRGBA, CycleStats) {
        let canvas = self.canvas.canvas();
        let mut stats = CycleStats {
            skipped: batch.skipped,
            ..CycleStats::default()
        };

        self.canvas.clear(BACKGROUND, BORDER);
        for rec in &batch.records {
            let ty = TypeCode::from_code(rec.type_code);
            match ty {
                Some(t) => stats.type_counts[t.index()] += 1,
                None => stats.unknown += 1,
            }
            let color = self.config.palette.color_for(ty);
            self.canvas
                .draw_dot(canvas.to_canvas_space(rec.x, rec.y), self.config.radius, color);
            stats.drawn += 1;
        }

        (self.canvas.finish(), stats)
    }
}

fn summarize_types(stats: &CycleStats) -> String {
    TypeCode::ALL
        .iter()
        .map(|t| format!("{}={}", t.name(), stats.count(*t)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../tests/unit/cycle.rs"]
mod tests;
