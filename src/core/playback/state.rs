use crate::core::playback::speed::SpeedRange;

/// Opaque id of a scheduled animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    #[default]
    Idle,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Forward,
    Back,
}

/// Navigation and animation state of one viewing session.
///
/// `current_iteration` is 1-based and always within `[1, max_iterations]`.
/// `pending_timer` is only ever `Some` while animating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    current_iteration: usize,
    max_iterations: usize,
    mode: PlaybackMode,
    speed: u32,
    speed_range: SpeedRange,
    pending_timer: Option<TimerHandle>,
}

impl PlaybackState {
    /// `max_iterations` below 1 is raised to 1; `speed` is clamped to `speed_range`.
    #[must_use]
    pub fn new(max_iterations: usize, speed: u32, speed_range: SpeedRange) -> Self {
        Self {
            current_iteration: 1,
            max_iterations: max_iterations.max(1),
            mode: PlaybackMode::Idle,
            speed: speed_range.clamp(speed),
            speed_range,
            pending_timer: None,
        }
    }

    #[must_use]
    pub fn current_iteration(&self) -> usize {
        self.current_iteration
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    #[must_use]
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.mode == PlaybackMode::Animating
    }

    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[must_use]
    pub fn speed_range(&self) -> SpeedRange {
        self.speed_range
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending_timer
    }

    /// Direct iteration selection is only honoured while idle.
    #[must_use]
    pub fn selection_enabled(&self) -> bool {
        self.mode == PlaybackMode::Idle
    }

    pub fn set_speed(&mut self, speed: u32) -> u32 {
        self.speed = self.speed_range.clamp(speed);
        self.speed
    }

    /// Enters `Animating` and hands back any timer that must be cancelled first.
    pub fn begin_animation(&mut self) -> Option<TimerHandle> {
        self.mode = PlaybackMode::Animating;
        self.pending_timer.take()
    }

    /// Enters `Idle` and hands back the timer that was in flight, if any.
    pub fn end_animation(&mut self) -> Option<TimerHandle> {
        self.mode = PlaybackMode::Idle;
        self.pending_timer.take()
    }

    /// Records the newly scheduled tick. Ignored unless animating.
    pub fn set_pending_timer(&mut self, handle: TimerHandle) -> bool {
        if self.mode != PlaybackMode::Animating {
            return false;
        }

        self.pending_timer = Some(handle);
        true
    }

    /// Claims the pending tick if `handle` is the one in flight.
    ///
    /// Stale handles and ticks arriving while idle are rejected.
    pub fn claim_tick(&mut self, handle: TimerHandle) -> bool {
        if self.mode != PlaybackMode::Animating || self.pending_timer != Some(handle) {
            return false;
        }

        self.pending_timer = None;
        true
    }

    /// Animation advance: past the last iteration wraps back to 1.
    pub fn advance_wrapping(&mut self) -> usize {
        self.current_iteration += 1;
        if self.current_iteration > self.max_iterations {
            self.current_iteration = 1;
        }

        self.current_iteration
    }

    /// Manual step, idle only, clamped without wrapping. Returns whether the
    /// iteration changed.
    pub fn step(&mut self, direction: StepDirection) -> bool {
        if self.mode != PlaybackMode::Idle {
            return false;
        }

        match direction {
            StepDirection::Forward if self.current_iteration < self.max_iterations => {
                self.current_iteration += 1;
                true
            }
            StepDirection::Back if self.current_iteration > 1 => {
                self.current_iteration -= 1;
                true
            }
            _ => false,
        }
    }

    /// Slider selection, idle only, clamped to `[1, max_iterations]`.
    pub fn select(&mut self, iteration: usize) -> bool {
        if self.mode != PlaybackMode::Idle {
            return false;
        }

        let iteration = iteration.clamp(1, self.max_iterations);
        let changed = iteration != self.current_iteration;
        self.current_iteration = iteration;
        changed
    }

    /// Back to iteration 1 in `Idle`, returning the timer to cancel.
    pub fn reset(&mut self) -> Option<TimerHandle> {
        let pending = self.end_animation();
        self.current_iteration = 1;
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(max_iterations: usize) -> PlaybackState {
        PlaybackState::new(max_iterations, 3, SpeedRange::default())
    }

    #[test]
    fn test_new_starts_idle_at_first_iteration() {
        let state = state(8);

        assert_eq!(state.current_iteration(), 1);
        assert_eq!(state.mode(), PlaybackMode::Idle);
        assert_eq!(state.pending_timer(), None);
        assert!(state.selection_enabled());
    }

    #[test]
    fn test_new_clamps_speed_and_depth() {
        let state = PlaybackState::new(0, 99, SpeedRange::default());

        assert_eq!(state.max_iterations(), 1);
        assert_eq!(state.speed(), 10);
    }

    #[test]
    fn test_advance_wraps_after_last_iteration() {
        let mut state = state(8);
        for _ in 1..8 {
            state.advance_wrapping();
        }
        assert_eq!(state.current_iteration(), 8);

        assert_eq!(state.advance_wrapping(), 1);
    }

    #[test]
    fn test_step_back_at_first_iteration_is_noop() {
        let mut state = state(8);

        assert!(!state.step(StepDirection::Back));
        assert_eq!(state.current_iteration(), 1);
    }

    #[test]
    fn test_step_forward_at_last_iteration_is_noop() {
        let mut state = state(3);
        assert!(state.step(StepDirection::Forward));
        assert!(state.step(StepDirection::Forward));

        assert!(!state.step(StepDirection::Forward));
        assert_eq!(state.current_iteration(), 3);
    }

    #[test]
    fn test_step_ignored_while_animating() {
        let mut state = state(8);
        state.begin_animation();

        assert!(!state.step(StepDirection::Forward));
        assert_eq!(state.current_iteration(), 1);
    }

    #[test]
    fn test_select_clamps_and_reports_change() {
        let mut state = state(8);

        assert!(state.select(20));
        assert_eq!(state.current_iteration(), 8);
        assert!(!state.select(8));
        assert!(state.select(0));
        assert_eq!(state.current_iteration(), 1);
    }

    #[test]
    fn test_select_ignored_while_animating() {
        let mut state = state(8);
        state.begin_animation();

        assert!(!state.select(5));
        assert!(!state.selection_enabled());
    }

    #[test]
    fn test_claim_tick_rejects_stale_handles() {
        let mut state = state(8);
        state.begin_animation();
        state.set_pending_timer(TimerHandle(2));

        assert!(!state.claim_tick(TimerHandle(1)));
        assert!(state.claim_tick(TimerHandle(2)));
        assert!(!state.claim_tick(TimerHandle(2)));
    }

    #[test]
    fn test_pending_timer_not_recorded_while_idle() {
        let mut state = state(8);

        assert!(!state.set_pending_timer(TimerHandle(1)));
        assert_eq!(state.pending_timer(), None);
    }

    #[test]
    fn test_end_animation_hands_back_pending_timer() {
        let mut state = state(8);
        state.begin_animation();
        state.set_pending_timer(TimerHandle(4));

        assert_eq!(state.end_animation(), Some(TimerHandle(4)));
        assert_eq!(state.pending_timer(), None);
        assert_eq!(state.mode(), PlaybackMode::Idle);
    }

    #[test]
    fn test_reset_returns_to_first_iteration_idle() {
        let mut state = state(8);
        state.begin_animation();
        state.advance_wrapping();
        state.set_pending_timer(TimerHandle(9));

        assert_eq!(state.reset(), Some(TimerHandle(9)));
        assert_eq!(state.current_iteration(), 1);
        assert_eq!(state.mode(), PlaybackMode::Idle);
        assert_eq!(state.pending_timer(), None);
    }

    #[test]
    fn test_set_speed_clamps_to_range() {
        let mut state = state(8);

        assert_eq!(state.set_speed(0), 1);
        assert_eq!(state.set_speed(6), 6);
        assert_eq!(state.set_speed(11), 10);
    }
}
