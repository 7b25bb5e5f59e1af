//! Restartable one-shot timers

use std::time::Duration;

use tracing::trace;

/// A one-shot timer where every new schedule replaces the pending one.
///
/// Owned per instance; advance it from the owner's frame tick.
#[derive(Clone, Debug)]
pub struct DebounceTimer {
    delay: Duration,
    remaining: Option<Duration>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            remaining: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay used by future schedules; a pending fire keeps its deadline
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Cancel any pending fire and start counting the full delay again
    pub fn schedule(&mut self) {
        if self.remaining.is_some() {
            trace!("debounce rescheduled");
        }
        self.remaining = Some(self.delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt`; returns `true` exactly once, when the deadline passes
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        if dt >= remaining {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining - dt);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut timer = DebounceTimer::new(Duration::from_secs(1));
        assert!(!timer.advance(Duration::from_secs(5)));

        timer.schedule();
        assert!(!timer.advance(Duration::from_millis(999)));
        assert!(timer.advance(Duration::from_millis(1)));
        assert!(!timer.advance(Duration::from_secs(1)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_restarts_delay() {
        let mut timer = DebounceTimer::new(Duration::from_secs(1));
        timer.schedule();
        assert!(!timer.advance(Duration::from_millis(600)));
        timer.schedule();
        assert!(!timer.advance(Duration::from_millis(600)));
        assert!(timer.advance(Duration::from_millis(400)));
    }

    #[test]
    fn test_cancel() {
        let mut timer = DebounceTimer::new(Duration::from_millis(10));
        timer.schedule();
        timer.cancel();
        assert!(!timer.advance(Duration::from_secs(1)));
    }
}
