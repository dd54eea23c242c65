use crate::color::RGB8;
use crate::data::Buffer;

use super::line::Line;
use super::Block;

pub struct Rect {
    origin: (i32, i32),
    width: i32,
    height: i32,
    color: RGB8,
    filled: bool,
}

impl Rect {
    pub fn new(origin: (i32, i32), width: i32, height: i32, color: RGB8, filled: bool) -> Self {
        Self {
            origin,
            width,
            height,
            color,
            filled,
        }
    }
}

impl Block for Rect {
    fn render(&self, buffer: &mut Buffer) {
        let (x, y) = self.origin;
        let w = self.width - 1;
        let h = self.height - 1;

        if self.filled {
            for i in 0..w {
                Line::new((x + i, y), (x + i, y + h), self.color).render(buffer);
            }
            for i in 0..h {
                Line::new((x, y + i), (x + w, y + i), self.color).render(buffer);
            }
        }

        // The border is drawn unconditionally, filled only adds the interior runs.
        Line::new((x, y), (x + w, y), self.color).render(buffer);
        Line::new((x, y + h), (x + w, y + h), self.color).render(buffer);
        Line::new((x, y), (x, y + h), self.color).render(buffer);
        Line::new((x + w, y), (x + w, y + h), self.color).render(buffer);
    }
}
