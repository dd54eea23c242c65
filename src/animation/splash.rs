use crate::color::RGB8;
use crate::konst::NUM_PIXELS_X;
use crate::konst::NUM_PIXELS_Y;
use crate::matrix::MatrixManager;

use super::Animation;

/// A circle expanding from its center until the whole grid is covered.
pub struct Splash {
    center: (i32, i32),
    color: RGB8,
    filled: bool,
    max_radius: i32,
}

impl Splash {
    pub fn new(x: i32, y: i32, color: RGB8, filled: bool) -> Self {
        Self {
            center: (x, y),
            color,
            filled,
            max_radius: Self::longest_distance_to_border(x, y) + 2,
        }
    }

    fn longest_distance_to_border(x: i32, y: i32) -> i32 {
        let to_top = y;
        let to_bottom = NUM_PIXELS_Y as i32 - 1 - y;
        let to_left = x;
        let to_right = NUM_PIXELS_X as i32 - 1 - x;

        to_top.max(to_bottom).max(to_left).max(to_right)
    }
}

impl Animation for Splash {
    fn run(&mut self, progress: f32, matrix: &mut MatrixManager) -> bool {
        let radius = (self.max_radius as f32 * progress) as i32;

        // Without the filled flag only the current ring stays visible.
        if !self.filled {
            matrix.clear();
        }
        matrix.circle(self.center.0, self.center.1, radius, self.color, false, 1);

        progress > 1.0
    }
}
