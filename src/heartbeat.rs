use crate::design_parameters::HEARTBEAT_PERIOD;
use crate::Instant;

/// Periodic liveness notices, independent of the acquisition cadence.
#[derive(Copy, Clone, Debug)]
pub struct Heartbeat {
    last: Instant,
}

impl Heartbeat {
    pub const MESSAGE: &'static str = "Alive and working.";

    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Check whether a liveness notice is due.
    ///
    /// # Returns
    /// True at most once per heartbeat period.
    pub fn poll(&mut self, now: Instant) -> bool {
        match now.checked_duration_since(self.last) {
            Some(elapsed) if elapsed >= HEARTBEAT_PERIOD => {
                self.last = now;
                true
            }
            _ => false,
        }
    }
}
