use crate::color::RGB8;
use crate::data::Buffer;

use super::Block;

pub struct Line {
    start: (i32, i32),
    end: (i32, i32),
    color: RGB8,
}

impl Line {
    pub fn new(start: (i32, i32), end: (i32, i32), color: RGB8) -> Self {
        Self { start, end, color }
    }
}

impl Block for Line {
    fn render(&self, buffer: &mut Buffer) {
        let (mut x, mut y) = self.start;
        let (end_x, end_y) = self.end;

        let dx = (end_x - x).abs();
        let sx = if x < end_x { 1 } else { -1 };
        let dy = -(end_y - y).abs();
        let sy = if y < end_y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            buffer.set(x, y, self.color);

            if x == end_x && y == end_y {
                break;
            }

            // A diagonal step takes both branches in the same iteration.
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
