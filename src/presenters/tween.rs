use std::time::Duration;

pub const TWEEN_STEPS: u32 = 20;
pub const TWEEN_STEP_INTERVAL: Duration = Duration::from_millis(50);

/// Eases a displayed number towards its latest value in fixed increments.
///
/// The last step always lands exactly on the target, so accumulated float
/// error never shows up in the formatted text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberTween {
    shown: f64,
    target: f64,
    increment: f64,
    steps_left: u32,
    since_step: Duration,
}

impl NumberTween {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            shown: value,
            target: value,
            increment: 0.0,
            steps_left: 0,
            since_step: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn shown(&self) -> f64 {
        self.shown
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.steps_left == 0
    }

    /// Starts easing from the currently shown value.
    pub fn retarget(&mut self, target: f64) {
        if target == self.target && self.is_settled() {
            return;
        }

        self.target = target;
        self.increment = (target - self.shown) / f64::from(TWEEN_STEPS);
        self.steps_left = TWEEN_STEPS;
        self.since_step = Duration::ZERO;
    }

    /// Applies every increment that falls inside `elapsed`. Returns whether
    /// the shown value changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.is_settled() {
            return false;
        }

        self.since_step += elapsed;
        let mut changed = false;

        while self.steps_left > 0 && self.since_step >= TWEEN_STEP_INTERVAL {
            self.since_step -= TWEEN_STEP_INTERVAL;
            self.steps_left -= 1;
            self.shown = if self.steps_left == 0 {
                self.target
            } else {
                self.shown + self.increment
            };
            changed = true;
        }

        changed
    }
}
