use std::time::Duration;

use crate::core::playback::TimerHandle;

/// One-shot timer owned by the host loop.
///
/// When a scheduled delay elapses the host calls
/// `PlaybackController::on_timer_fired` with the returned handle. A cancelled
/// handle must never be delivered.
pub trait TimerPort {
    fn schedule(&mut self, delay: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}
