//! Startup configuration for the renderer.
//!
//! Every field has a default matching the reference setup (1000x1000 canvas, 5px dots, 1 Hz,
//! `locs.csv` → `cells.png`), so an empty JSON object is a valid config.

use crate::foundation::core::Canvas;
use crate::foundation::error::{CellviewError, CellviewResult};
use crate::palette::ColorPalette;
use crate::records::MalformedLinePolicy;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Dot diameter in pixels.
    pub radius: f64,
    /// Cycles per second.
    pub rate: f64,
    /// Source CSV path, re-read every cycle.
    pub input_path: PathBuf,
    /// Destination image path, overwritten every cycle.
    pub output_path: PathBuf,
    /// Stop after this many cycles. `None` runs until stopped.
    pub max_cycles: Option<u64>,
    pub on_malformed: MalformedLinePolicy,
    pub palette: ColorPalette,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            radius: 5.0,
            rate: 1.0,
            input_path: PathBuf::from("locs.csv"),
            output_path: PathBuf::from("cells.png"),
            max_cycles: None,
            on_malformed: MalformedLinePolicy::default(),
            palette: ColorPalette::default(),
        }
    }
}

impl RendererConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> CellviewResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CellviewError::config(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_reader(r: impl Read) -> CellviewResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| CellviewError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CellviewResult<()> {
        Canvas::new(self.width, self.height)?;
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(CellviewError::config(format!(
                "canvas {}x{} exceeds the {} pixel raster limit",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(CellviewError::config(format!(
                "radius must be a positive number, got {}",
                self.radius
            )));
        }
        // A dot wider than the canvas diagonal already covers every pixel.
        let diagonal = f64::from(self.width).hypot(f64::from(self.height));
        if self.radius > diagonal {
            return Err(CellviewError::config(format!(
                "radius {} exceeds the canvas diagonal ({diagonal:.1}px)",
                self.radius
            )));
        }
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(CellviewError::config(format!(
                "rate must be a positive number of cycles per second, got {}",
                self.rate
            )));
        }
        if Duration::try_from_secs_f64(1.0 / self.rate).is_err() {
            return Err(CellviewError::config(format!(
                "rate {} gives a cycle period too long to schedule",
                self.rate
            )));
        }
        if self.max_cycles == Some(0) {
            return Err(CellviewError::config("max_cycles must be > 0 when set"));
        }
        Ok(())
    }

    pub fn canvas(&self) -> CellviewResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Time between cycle starts.
    ///
    /// Saturates for rates that [`RendererConfig::validate`] rejects.
    pub fn period(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.rate).unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
