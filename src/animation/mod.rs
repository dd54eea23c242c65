pub mod splash;

/// One-shot playback contract. `run` is invoked once per tick while the
/// animation is active; `progress` is elapsed time over the configured
/// duration. It may repeat a value between ticks and exceeds 1 during the
/// hold window, so implementations must render purely from `progress` and
/// never read a clock themselves.
///
/// Returning `true` reports logical completion; the driver decides when
/// the slot actually retires.
pub trait Animation {
    fn run(&mut self, progress: f32, matrix: &mut crate::matrix::MatrixManager) -> bool;
}
