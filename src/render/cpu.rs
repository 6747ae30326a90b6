use crate::foundation::core::{Canvas, Point, Rgb8};
use crate::foundation::error::{CellviewError, CellviewResult};
use crate::render::frame::FrameRGBA;
use vello_cpu::kurbo::Shape;

/// Flattening tolerance for dot outlines, in pixels.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Width of the canvas border stroke, in pixels.
const BORDER_WIDTH: f64 = 1.0;

/// CPU raster canvas powered by `vello_cpu`.
///
/// Draw calls are recorded in call order and rasterized in [`CpuCanvas::finish`], so later dots
/// paint over earlier ones.
pub struct CpuCanvas {
    canvas: Canvas,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    dots: usize,
}

impl CpuCanvas {
    pub fn new(canvas: Canvas) -> CellviewResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(CellviewError::render("canvas must be non-empty"));
        }
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| CellviewError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| CellviewError::render("canvas height exceeds u16"))?;

        Ok(Self {
            canvas,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
            dots: 0,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Number of dots recorded since the last clear.
    pub fn dot_count(&self) -> usize {
        self.dots
    }

    /// Discard everything drawn so far and paint a bordered background over the full extent.
    pub fn clear(&mut self, background: Rgb8, border: Rgb8) {
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        clear_pixmap(&mut self.pixmap, [0, 0, 0, 0]);
        self.dots = 0;

        let (w, h) = (f64::from(self.width), f64::from(self.height));
        self.ctx.set_paint(to_cpu_color(background));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));

        // Stroke is centered on the path; inset by half its width so it stays on-canvas.
        let inset = BORDER_WIDTH / 2.0;
        self.ctx.set_paint(to_cpu_color(border));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(BORDER_WIDTH));
        self.ctx.stroke_rect(&vello_cpu::kurbo::Rect::new(
            inset,
            inset,
            w - inset,
            h - inset,
        ));
    }

    /// Fill an unstroked circle of `diameter` pixels centered at `center`.
    pub fn draw_dot(&mut self, center: Point, diameter: f64, color: Rgb8) {
        let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(center), diameter / 2.0);
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.fill_path(&circle.to_path(CIRCLE_TOLERANCE));
        self.dots += 1;
    }

    /// Rasterize all recorded commands and read the pixels back.
    pub fn finish(&mut self) -> FrameRGBA {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn to_cpu_color(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
