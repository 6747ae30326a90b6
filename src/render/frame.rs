use std::borrow::Cow;

/// A rendered canvas as RGBA8 pixels.
///
/// The raster backend produces premultiplied alpha. Every color the renderer paints is opaque, so
/// for a fully painted canvas premultiplied and straight bytes coincide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Pixel bytes with straight (non-premultiplied) alpha, as image encoders expect.
    pub fn straight_rgba8(&self) -> Cow<'_, [u8]> {
        if !self.premultiplied || self.data.chunks_exact(4).all(|px| px[3] == 255) {
            return Cow::Borrowed(&self.data);
        }

        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        Cow::Owned(out)
    }
}
