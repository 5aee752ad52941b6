use std::time::{Duration, Instant};

use crate::controllers::playback::ports::timer::TimerPort;
use crate::core::playback::TimerHandle;

/// Timer for hosts that poll: an event loop waiting until the next deadline,
/// or a terminal loop sleeping until it.
#[derive(Debug, Default)]
pub struct DeadlineTimer {
    next_id: u64,
    pending: Vec<(TimerHandle, Instant)>,
}

impl DeadlineTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest outstanding deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(_, deadline)| deadline).min()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns the earliest timer whose deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<TimerHandle> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (_, deadline))| *deadline <= now)
            .min_by_key(|(_, (_, deadline))| *deadline)
            .map(|(position, _)| position)?;

        Some(self.pending.remove(position).0)
    }

    fn schedule_at(&mut self, deadline: Instant) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push((handle, deadline));
        handle
    }
}

impl TimerPort for DeadlineTimer {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.schedule_at(Instant::now() + delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(pending, _)| pending != handle);
    }
}
