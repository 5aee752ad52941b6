use std::time::Duration;

const BASE_DELAY_MS: i64 = 1500;
const DELAY_STEP_MS: i64 = 150;
const MIN_DELAY_MS: i64 = 100;

/// Delay between animation ticks: `max(100, 1500 - speed * 150)` milliseconds.
#[must_use]
pub fn animation_delay(speed: u32) -> Duration {
    let millis = (BASE_DELAY_MS - i64::from(speed) * DELAY_STEP_MS).max(MIN_DELAY_MS);

    Duration::from_millis(millis as u64)
}

/// Inclusive bounds of the speed slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRange {
    min: u32,
    max: u32,
}

impl SpeedRange {
    /// Returns `None` when `min` is zero or above `max`.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Option<Self> {
        if min == 0 || min > max {
            return None;
        }

        Some(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn clamp(&self, speed: u32) -> u32 {
        speed.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, speed: u32) -> bool {
        (self.min..=self.max).contains(&speed)
    }
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}
