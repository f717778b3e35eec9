use std::time::{Duration, Instant};

/// Timing of the screen shown after a session ends.
///
/// The last play frame stays up for `message_delay`, then the message is
/// shown until `reset_delay` elapsed and a fresh setup session replaces it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EndScreen {
    ended_at: Instant,
    message: &'static str,
    message_delay: Duration,
    reset_delay: Duration,
}

impl EndScreen {
    #[must_use]
    pub fn new(
        ended_at: Instant,
        message: &'static str,
        message_delay: Duration,
        reset_delay: Duration,
    ) -> Self {
        Self {
            ended_at,
            message,
            message_delay,
            reset_delay,
        }
    }

    /// Returns the message once the final-frame delay has passed.
    #[must_use]
    pub fn visible_message(&self, now: Instant) -> Option<&'static str> {
        (self.elapsed(now) >= self.message_delay).then_some(self.message)
    }

    /// Returns true once the session should be replaced.
    #[must_use]
    pub fn should_reset(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.reset_delay
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.ended_at)
    }
}
