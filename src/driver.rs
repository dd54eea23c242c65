use std::time::Duration;
use std::time::Instant;

use crate::animation::splash::Splash;
use crate::apps::App;
use crate::control::ChangeHook;
use crate::control::ControlManager;
use crate::error::Error;
use crate::event::Event;
use crate::event::EventInner;
use crate::matrix::MatrixManager;

/// All engine state, constructed once at startup and handed to the driver.
pub struct Context {
    pub matrix: MatrixManager,
    pub control: ControlManager,
}

impl Context {
    pub fn new(change: ChangeHook) -> Self {
        Self {
            matrix: MatrixManager::new(),
            control: ControlManager::new(change),
        }
    }
}

/// Per-tick orchestration: game loop cadence, the app's draw hook, then
/// the animation overlay with its completion policy.
pub struct FrameDriver {
    app: Box<dyn App>,
    ctx: Context,
    last_game_loop: Option<Instant>,
}

impl FrameDriver {
    pub fn new(mut app: Box<dyn App>, mut ctx: Context) -> Result<Self, Error> {
        app.init(&mut ctx).map_err(Error::InitHook)?;

        Ok(Self {
            app,
            ctx,
            last_game_loop: None,
        })
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn tick(&mut self, now: Instant) -> Result<(), Error> {
        self.maybe_game_loop(now)?;

        self.app.draw(&mut self.ctx).map_err(Error::DrawHook)?;

        // The animation draws after the app, last write wins per cell.
        let Context { matrix, control } = &mut self.ctx;
        control.advance_animation(now, matrix);

        Ok(())
    }

    fn maybe_game_loop(&mut self, now: Instant) -> Result<(), Error> {
        let tps = self.ctx.matrix.current_tps();
        if tps <= 0.0 {
            return Ok(());
        }

        let interval = Duration::from_secs_f64(1.0 / f64::from(tps));
        let due = self
            .last_game_loop
            .is_none_or(|last| now.saturating_duration_since(last) >= interval);

        if due {
            self.app.game_loop(&mut self.ctx).map_err(Error::GameLoopHook)?;
            self.last_game_loop = Some(now);
        }

        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<(), Error> {
        tracing::debug!(?event, "Handling event");

        match event.event {
            EventInner::SetStatus { status } => self.ctx.control.set_status(status),
            EventInner::SetControls { controls } => self.ctx.control.set_controls(controls),
            EventInner::Reset => self.ctx.control.reset(),
            EventInner::SetTps { tps } => self.ctx.matrix.set_tps(tps),
            EventInner::Splash {
                x,
                y,
                color,
                filled,
                duration_ms,
                keep_time_ms,
            } => {
                let splash = Splash::new(x, y, crate::color::from_packed(color), filled);
                self.ctx
                    .control
                    .run_animation(Box::new(splash), duration_ms, keep_time_ms);
            }
            EventInner::StopAnimation => self.ctx.control.stop_animation(),
            EventInner::Fire { id } => {
                self.app
                    .on_event(id, &mut self.ctx)
                    .map_err(Error::EventHook)?
            }
        }

        Ok(())
    }
}
