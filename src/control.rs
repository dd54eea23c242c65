use std::time::Instant;

use crate::animation::Animation;
use crate::matrix::MatrixManager;

pub const BUTTON_UP: u8 = 0b0000_0001;
pub const BUTTON_LEFT: u8 = 0b0000_0010;
pub const BUTTON_MIDDLE: u8 = 0b0000_0100;
pub const BUTTON_RIGHT: u8 = 0b0000_1000;
pub const BUTTON_DOWN: u8 = 0b0001_0000;
pub const BUTTON_A: u8 = 0b0010_0000;
pub const BUTTON_B: u8 = 0b0100_0000;
pub const BUTTON_C: u8 = 0b1000_0000;
pub const ALL_BUTTONS: u8 = 0b1111_1111;

/// Which externally visible field changed, with its new value.
pub enum Change<'a> {
    Status(&'a str),
    Controls(u8),
}

/// Fires synchronously on every mutation. Must be cheap, must not block,
/// and must not call back into the manager.
pub type ChangeHook = Box<dyn FnMut(Change<'_>)>;

enum Slot {
    Idle,
    Running {
        animation: Box<dyn Animation>,
        duration_ms: f32,
        keep_time_ms: f32,
        started: Instant,
    },
}

/// Holds the externally visible application state (status text and button
/// mask) and the single animation slot. The boxed animation is owned by
/// the slot and dropped on the transition back to [`Slot::Idle`], whether
/// that happens through natural completion, an explicit stop, or
/// replacement by a newer animation.
pub struct ControlManager {
    status: String,
    controls: u8,
    change: ChangeHook,
    slot: Slot,
}

impl ControlManager {
    pub fn new(change: ChangeHook) -> Self {
        Self {
            status: String::new(),
            controls: 0,
            change,
            slot: Slot::Idle,
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        (self.change)(Change::Status(&self.status));
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_controls(&mut self, controls: u8) {
        self.controls = controls;
        (self.change)(Change::Controls(controls));
    }

    pub fn controls(&self) -> u8 {
        self.controls
    }

    /// Clears status and controls, leaving the animation slot alone.
    pub fn reset(&mut self) {
        if !self.status.is_empty() {
            self.status.clear();
            (self.change)(Change::Status(&self.status));
        }

        if self.controls != 0 {
            self.controls = 0;
            (self.change)(Change::Controls(0));
        }
    }

    /// Replaces the active animation unconditionally. There is no queue,
    /// a previously running animation is dropped.
    pub fn run_animation(
        &mut self,
        animation: Box<dyn Animation>,
        duration_ms: f32,
        keep_time_ms: f32,
    ) {
        self.run_animation_at(animation, duration_ms, keep_time_ms, Instant::now());
    }

    pub(crate) fn run_animation_at(
        &mut self,
        animation: Box<dyn Animation>,
        duration_ms: f32,
        keep_time_ms: f32,
        started: Instant,
    ) {
        self.slot = Slot::Running {
            animation,
            duration_ms,
            keep_time_ms,
            started,
        };
    }

    pub fn stop_animation(&mut self) {
        self.slot = Slot::Idle;
    }

    pub fn is_animation_running(&self) -> bool {
        matches!(self.slot, Slot::Running { .. })
    }

    /// Advances the active animation by one tick. The slot retires only
    /// when the animation reports completion *and* the duration plus keep
    /// time window has fully elapsed; until then the last frame stays on
    /// screen.
    pub fn advance_animation(&mut self, now: Instant, matrix: &mut MatrixManager) {
        let Slot::Running {
            animation,
            duration_ms,
            keep_time_ms,
            started,
        } = &mut self.slot
        else {
            return;
        };

        let elapsed_ms = now.saturating_duration_since(*started).as_secs_f32() * 1000.0;
        let progress = elapsed_ms / *duration_ms;
        let finished = animation.run(progress, matrix);

        if finished && elapsed_ms / (*duration_ms + *keep_time_ms) > 1.0 {
            self.slot = Slot::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;

    fn recording_manager() -> (ControlManager, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let hook = {
            let seen = seen.clone();
            Box::new(move |change: Change<'_>| {
                let entry = match change {
                    Change::Status(status) => format!("status:{status}"),
                    Change::Controls(controls) => format!("controls:{controls}"),
                };
                seen.borrow_mut().push(entry);
            })
        };
        (ControlManager::new(hook), seen)
    }

    struct DoneAfterOne;

    impl Animation for DoneAfterOne {
        fn run(&mut self, progress: f32, _matrix: &mut MatrixManager) -> bool {
            progress > 1.0
        }
    }

    struct DropProbe(Rc<Cell<bool>>);

    impl Animation for DropProbe {
        fn run(&mut self, _progress: f32, _matrix: &mut MatrixManager) -> bool {
            false
        }
    }

    impl Drop for DropProbe {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_change_hook_fires_on_every_mutation() {
        let (mut control, seen) = recording_manager();

        control.set_status("running");
        control.set_controls(BUTTON_A | BUTTON_UP);
        control.set_status("running");

        assert_eq!(
            *seen.borrow(),
            vec!["status:running", "controls:33", "status:running"]
        );
    }

    #[test]
    fn test_reset_clears_and_notifies() {
        let (mut control, seen) = recording_manager();
        control.set_status("x");
        control.set_controls(ALL_BUTTONS);
        seen.borrow_mut().clear();

        control.reset();
        assert_eq!(control.status(), "");
        assert_eq!(control.controls(), 0);
        assert_eq!(*seen.borrow(), vec!["status:", "controls:0"]);

        // Already empty, nothing to notify about.
        control.reset();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_slot_holds_through_keep_time_window() {
        let (mut control, _) = recording_manager();
        let mut matrix = MatrixManager::new();
        let started = Instant::now();

        control.run_animation_at(Box::new(DoneAfterOne), 100.0, 50.0, started);
        assert!(control.is_animation_running());

        for elapsed in [0u64, 60, 99, 120, 149] {
            control.advance_animation(started + Duration::from_millis(elapsed), &mut matrix);
            assert!(control.is_animation_running(), "elapsed {elapsed}ms");
        }

        control.advance_animation(started + Duration::from_millis(151), &mut matrix);
        assert!(!control.is_animation_running());
    }

    #[test]
    fn test_slot_without_keep_time_retires_at_duration() {
        let (mut control, _) = recording_manager();
        let mut matrix = MatrixManager::new();
        let started = Instant::now();

        control.run_animation_at(Box::new(DoneAfterOne), 100.0, 0.0, started);

        control.advance_animation(started + Duration::from_millis(99), &mut matrix);
        assert!(control.is_animation_running());

        control.advance_animation(started + Duration::from_millis(101), &mut matrix);
        assert!(!control.is_animation_running());
    }

    #[test]
    fn test_stop_drops_the_animation() {
        let (mut control, _) = recording_manager();
        let dropped = Rc::new(Cell::new(false));

        control.run_animation(Box::new(DropProbe(dropped.clone())), 1000.0, 0.0);
        assert!(control.is_animation_running());

        control.stop_animation();
        assert!(!control.is_animation_running());
        assert!(dropped.get());
    }

    #[test]
    fn test_replacement_drops_the_previous_animation() {
        let (mut control, _) = recording_manager();
        let dropped = Rc::new(Cell::new(false));

        control.run_animation(Box::new(DropProbe(dropped.clone())), 1000.0, 0.0);
        control.run_animation(Box::new(DoneAfterOne), 10.0, 0.0);

        assert!(dropped.get());
        assert!(control.is_animation_running());
    }

    #[test]
    fn test_advance_when_idle_is_noop() {
        let (mut control, _) = recording_manager();
        let mut matrix = MatrixManager::new();
        control.advance_animation(Instant::now(), &mut matrix);
        assert!(!control.is_animation_running());
    }
}
