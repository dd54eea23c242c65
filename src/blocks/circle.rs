use crate::color::RGB8;
use crate::data::Buffer;

use super::Block;

pub struct Circle {
    center: (i32, i32),
    radius: i32,
    color: RGB8,
    filled: bool,
    angle_step: u16,
}

impl Circle {
    pub fn new(center: (i32, i32), radius: i32, color: RGB8, filled: bool, angle_step: u16) -> Self {
        Self {
            center,
            radius,
            color,
            filled,
            angle_step,
        }
    }
}

impl Block for Circle {
    fn render(&self, buffer: &mut Buffer) {
        let (cx, cy) = self.center;
        let radius = self.radius;

        if self.filled {
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx * dx + dy * dy <= radius * radius {
                        buffer.set_silent(cx + dx, cy + dy, self.color);
                    }
                }
            }
            return;
        }

        // Outline samples run off the grid for large radii, those writes
        // are dropped without a diagnostic.
        let step = u32::from(self.angle_step.max(1));
        let mut angle = 0u32;
        while angle < 360 {
            let theta = (angle as f32).to_radians();
            let x = (theta.cos() * radius as f32 + cx as f32).floor() as i32;
            let y = (theta.sin() * radius as f32 + cy as f32).floor() as i32;
            buffer.set_silent(x, y, self.color);
            angle += step;
        }
    }
}
