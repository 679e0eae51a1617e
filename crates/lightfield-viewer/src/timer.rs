//! Fixed-interval redraw ticks for the event loop.

use std::time::{Duration, Instant};

/// Redraw period of the viewer.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(10);

/// A repeating deadline. Carries no state beyond the next tick.
#[derive(Debug, Clone, Copy)]
pub struct RefreshTimer {
    interval: Duration,
    next: Instant,
}

impl RefreshTimer {
    /// First tick fires one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Returns true when a tick is due and schedules the next one.
    ///
    /// Missed ticks are not replayed; the next deadline is measured from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(REFRESH_INTERVAL, start);

        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(9)));
        assert!(timer.poll(start + Duration::from_millis(10)));
        assert!(!timer.poll(start + Duration::from_millis(15)));
        assert_eq!(timer.deadline(), start + Duration::from_millis(20));
    }

    #[test]
    fn late_poll_does_not_burst() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(REFRESH_INTERVAL, start);

        let late = start + Duration::from_millis(95);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.deadline(), late + REFRESH_INTERVAL);
    }
}
