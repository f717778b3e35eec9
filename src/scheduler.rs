use std::time::{Duration, Instant};

/// Fixed-cadence tick clock polled by the front-end loop.
///
/// A stopped scheduler never reports a due tick, so nothing can advance the
/// simulation after the session ended.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    period: Duration,
    last_tick: Option<Instant>,
}

impl TickScheduler {
    /// Creates a stopped scheduler.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_tick: None,
        }
    }

    /// Starts ticking; the first tick is due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }

    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Returns true when running and a full period passed since the last tick.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.last_tick
            .is_some_and(|last| now.saturating_duration_since(last) >= self.period)
    }

    /// Records that a tick ran at `now`. Ignored while stopped.
    pub fn mark_ticked(&mut self, now: Instant) {
        if self.last_tick.is_some() {
            self.last_tick = Some(now);
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}
