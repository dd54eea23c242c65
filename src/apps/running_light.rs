use crate::color;
use crate::color::RGB8;
use crate::driver::Context;
use crate::konst::NUM_PIXELS_X;
use crate::konst::NUM_PIXELS_Y;

use super::App;
use super::HookError;

const PALETTE: [RGB8; 4] = [color::WHITE, color::RED, color::GREEN, color::BLUE];

/// A single pixel wandering over the grid row by row.
pub struct RunningLight {
    x_offset: i32,
    y_offset: i32,
    previous: (i32, i32),
    palette_index: usize,
}

impl Default for RunningLight {
    fn default() -> Self {
        Self {
            x_offset: 0,
            y_offset: 0,
            previous: (0, 0),
            palette_index: 0,
        }
    }
}

impl App for RunningLight {
    fn name(&self) -> &'static str {
        "running_light"
    }

    fn init(&mut self, ctx: &mut Context) -> Result<(), HookError> {
        ctx.matrix.set_tps(10.0);
        ctx.control.set_status("running light");
        Ok(())
    }

    fn game_loop(&mut self, ctx: &mut Context) -> Result<(), HookError> {
        let buttons = ctx.control.controls();
        self.palette_index = if buttons & crate::control::BUTTON_LEFT != 0 {
            1
        } else if buttons & crate::control::BUTTON_MIDDLE != 0 {
            2
        } else if buttons & crate::control::BUTTON_RIGHT != 0 {
            3
        } else {
            self.palette_index
        };

        self.previous = (self.x_offset, self.y_offset);
        self.x_offset += 1;

        if self.x_offset == NUM_PIXELS_X as i32 {
            self.x_offset = 0;
            self.y_offset += 1;
        }

        if self.y_offset == NUM_PIXELS_Y as i32 {
            self.y_offset = 0;
        }

        tracing::debug!("Setting (x, y) = ({}, {})", self.x_offset, self.y_offset);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result<(), HookError> {
        ctx.matrix.off(self.previous.0, self.previous.1);
        ctx.matrix
            .set(self.x_offset, self.y_offset, PALETTE[self.palette_index]);
        Ok(())
    }

    fn on_event(&mut self, id: u32, _ctx: &mut Context) -> Result<(), HookError> {
        self.palette_index = id as usize % PALETTE.len();
        Ok(())
    }
}
