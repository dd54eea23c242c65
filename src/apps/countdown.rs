use crate::animation::splash::Splash;
use crate::blocks::digit::DIGIT_WIDTH;
use crate::color;
use crate::driver::Context;
use crate::konst::NUM_PIXELS_X;

use super::App;
use super::HookError;

const START: u32 = 10;

/// Counts down once per second and splashes when it reaches zero.
pub struct Countdown {
    remaining: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self { remaining: START }
    }
}

impl App for Countdown {
    fn name(&self) -> &'static str {
        "countdown"
    }

    fn init(&mut self, ctx: &mut Context) -> Result<(), HookError> {
        ctx.matrix.set_tps(1.0);
        ctx.control.set_status("counting down");
        Ok(())
    }

    fn game_loop(&mut self, ctx: &mut Context) -> Result<(), HookError> {
        // Freeze the counter while the splash plays out or while the user
        // holds the counter down.
        if ctx.control.is_animation_running() {
            return Ok(());
        }

        let buttons = ctx.control.controls();
        if buttons & crate::control::BUTTON_DOWN != 0 {
            return Ok(());
        }
        if buttons & crate::control::BUTTON_UP != 0 {
            self.remaining = START;
            return Ok(());
        }
        if buttons & crate::control::BUTTON_A != 0 {
            self.remaining = 0;
        }

        if self.remaining == 0 {
            ctx.control.run_animation(
                Box::new(Splash::new(5, 5, color::RED, false)),
                1200.0,
                300.0,
            );
            ctx.control.set_status("liftoff");
            self.remaining = START;
        } else {
            self.remaining -= 1;
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result<(), HookError> {
        ctx.matrix.clear();

        let digits = self.remaining.checked_ilog10().map_or(1, |log| log + 1) as i32;
        let needed = digits * DIGIT_WIDTH + (digits - 1);
        let x = (NUM_PIXELS_X as i32 - needed) / 2;
        ctx.matrix.number(x, 3, self.remaining, color::GREEN, 1);

        Ok(())
    }

    fn on_event(&mut self, _id: u32, ctx: &mut Context) -> Result<(), HookError> {
        self.remaining = START;
        ctx.control.set_status("counting down");
        Ok(())
    }
}
