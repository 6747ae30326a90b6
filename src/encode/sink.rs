use crate::foundation::error::{CellviewError, CellviewResult};
use crate::render::frame::FrameRGBA;
use std::path::{Path, PathBuf};

/// Consumer of one finished frame per successful cycle.
pub trait FrameSink {
    /// Store the frame produced by cycle `cycle` (0-based).
    fn write_frame(&mut self, cycle: u64, frame: &FrameRGBA) -> CellviewResult<()>;
}

/// Writes every frame as a PNG to one fixed path, replacing the previous image.
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSink for PngSink {
    fn write_frame(&mut self, cycle: u64, frame: &FrameRGBA) -> CellviewResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CellviewError::output(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }

        image::save_buffer_with_format(
            &self.path,
            &frame.straight_rgba8(),
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| CellviewError::output(format!("write png '{}': {e}", self.path.display())))?;

        tracing::debug!(cycle, path = %self.path.display(), "wrote frame");
        Ok(())
    }
}

/// In-memory sink for tests and embedding; keeps only the latest frame.
#[derive(Debug, Default)]
pub struct InMemorySink {
    last: Option<(u64, FrameRGBA)>,
    written: u64,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent frame and the cycle that produced it.
    pub fn last(&self) -> Option<&(u64, FrameRGBA)> {
        self.last.as_ref()
    }

    /// Number of frames received so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl FrameSink for InMemorySink {
    fn write_frame(&mut self, cycle: u64, frame: &FrameRGBA) -> CellviewResult<()> {
        self.last = Some((cycle, frame.clone()));
        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
