use crate::blocks::circle::Circle;
use crate::blocks::digit::Digit;
use crate::blocks::digit::Number;
use crate::blocks::line::Line;
use crate::blocks::rect::Rect;
use crate::blocks::Block;
use crate::color::RGB8;
use crate::data::Buffer;
use crate::konst::NUM_PIXELS;

const MAX_TPS: f32 = 200.0;

/// Drawing surface handed to apps and animations. Translates shapes into
/// pixel writes on the shared buffer and carries the advisory tick-rate
/// hint.
pub struct MatrixManager {
    buffer: Buffer,
    current_tps: f32,
}

impl Default for MatrixManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixManager {
    pub fn new() -> Self {
        Self {
            buffer: Buffer::default(),
            current_tps: 0.0,
        }
    }

    pub fn set(&mut self, x: i32, y: i32, color: RGB8) {
        self.buffer.set(x, y, color);
    }

    pub fn set_silent(&mut self, x: i32, y: i32, color: RGB8) {
        self.buffer.set_silent(x, y, color);
    }

    pub fn off(&mut self, x: i32, y: i32) {
        self.buffer.set(x, y, crate::color::OFF);
    }

    pub fn set_raw(&mut self, n: usize, color: RGB8) {
        self.buffer.set_raw(n, color);
    }

    pub fn fill(&mut self, color: RGB8) {
        self.buffer.fill(color);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn get(&self, x: usize, y: usize) -> RGB8 {
        self.buffer.get(x, y)
    }

    pub fn pixels(&self) -> &[RGB8; NUM_PIXELS] {
        self.buffer.pixels()
    }

    pub fn to_packed(&self) -> [u32; NUM_PIXELS] {
        self.buffer.to_packed()
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: RGB8) {
        Line::new((x1, y1), (x2, y2), color).render(&mut self.buffer);
    }

    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: RGB8, filled: bool) {
        Rect::new((x, y), width, height, color, filled).render(&mut self.buffer);
    }

    pub fn circle(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        color: RGB8,
        filled: bool,
        angle_step: u16,
    ) {
        Circle::new((x, y), radius, color, filled, angle_step).render(&mut self.buffer);
    }

    pub fn digit(&mut self, x: i32, y: i32, value: u32, color: RGB8) {
        Digit::new((x, y), value, color).render(&mut self.buffer);
    }

    pub fn number(&mut self, x: i32, y: i32, value: u32, color: RGB8, gap: i32) {
        Number::new((x, y), value, color, gap).render(&mut self.buffer);
    }

    /// Advisory ticks-per-second hint for the driver's game loop cadence.
    /// The rasterizer itself does not enforce it.
    pub fn set_tps(&mut self, tps: f32) {
        self.current_tps = tps.clamp(0.0, MAX_TPS);
    }

    pub fn current_tps(&self) -> f32 {
        self.current_tps
    }
}
