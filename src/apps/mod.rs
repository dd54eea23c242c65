pub mod countdown;
pub mod running_light;

pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Capability set an app supplies to the frame driver. `draw` runs once
/// per tick before the animation overlay; `game_loop` runs at the cadence
/// of the tick-rate hint; `on_event` runs on demand for host events.
pub trait App {
    fn name(&self) -> &'static str;

    fn init(&mut self, ctx: &mut crate::driver::Context) -> Result<(), HookError> {
        let _ = ctx;
        Ok(())
    }

    fn draw(&mut self, ctx: &mut crate::driver::Context) -> Result<(), HookError>;

    fn game_loop(&mut self, ctx: &mut crate::driver::Context) -> Result<(), HookError> {
        let _ = ctx;
        Ok(())
    }

    fn on_event(&mut self, id: u32, ctx: &mut crate::driver::Context) -> Result<(), HookError> {
        let _ = (id, ctx);
        Ok(())
    }
}

pub fn build(kind: crate::config::AppKind) -> Box<dyn App> {
    match kind {
        crate::config::AppKind::Countdown => Box::new(countdown::Countdown::default()),
        crate::config::AppKind::RunningLight => Box::new(running_light::RunningLight::default()),
    }
}
