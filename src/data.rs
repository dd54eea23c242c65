use crate::color::RGB8;
use crate::konst::NUM_PIXELS;
use crate::konst::NUM_PIXELS_X;
use crate::konst::NUM_PIXELS_Y;

/// Pixel storage in strip order. Every entry is always a defined color,
/// "off" is black.
pub struct Buffer {
    pixels: [RGB8; NUM_PIXELS],
}

impl Default for Buffer {
    fn default() -> Self {
        Self {
            pixels: [RGB8::default(); NUM_PIXELS],
        }
    }
}

impl Buffer {
    /// Maps a logical coordinate onto its strip position. Bijective over
    /// the full grid, index 0 is the top left pixel.
    #[inline]
    pub fn index(x: usize, y: usize) -> usize {
        x + (NUM_PIXELS_Y - 1 - y) * NUM_PIXELS_X
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> RGB8 {
        self.pixels[Self::index(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, color: RGB8) {
        self.set_inner(x, y, color, false);
    }

    /// Same write as [`Buffer::set`], but out-of-range coordinates are
    /// dropped without a diagnostic.
    pub fn set_silent(&mut self, x: i32, y: i32, color: RGB8) {
        self.set_inner(x, y, color, true);
    }

    fn set_inner(&mut self, x: i32, y: i32, color: RGB8, silent: bool) {
        if x < 0 || x >= NUM_PIXELS_X as i32 || y < 0 || y >= NUM_PIXELS_Y as i32 {
            if !silent {
                tracing::warn!(x, y, "Pixel out of range");
            }
            return;
        }

        self.pixels[Self::index(x as usize, y as usize)] = color;
    }

    /// Raw write to a strip position, bypassing the coordinate mapping.
    pub fn set_raw(&mut self, n: usize, color: RGB8) {
        if n >= NUM_PIXELS {
            tracing::warn!(n, "Strip position out of range");
            return;
        }

        self.pixels[n] = color;
    }

    pub fn fill(&mut self, color: RGB8) {
        self.pixels = [color; NUM_PIXELS];
    }

    pub fn clear(&mut self) {
        self.fill(RGB8::default());
    }

    pub fn pixels(&self) -> &[RGB8; NUM_PIXELS] {
        &self.pixels
    }

    pub fn to_packed(&self) -> [u32; NUM_PIXELS] {
        let mut packed = [0u32; NUM_PIXELS];
        for (slot, pixel) in packed.iter_mut().zip(self.pixels.iter()) {
            *slot = crate::color::to_packed(*pixel);
        }
        packed
    }
}
