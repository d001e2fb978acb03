// ABOUTME: Cancellable deferred values driven by an injected clock.
// ABOUTME: Backs both the layout debounce and the change-notification throttle.

use std::time::{Duration, Instant};

/// A single-slot scheduled value.
///
/// Scheduling replaces whatever was pending and restarts the delay, so only
/// the last value of a burst is ever delivered. Nothing runs on its own: the
/// owner polls with the current time from its event loop.
#[derive(Debug)]
pub struct Deferred<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Deferred<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value` for `now + delay`, dropping any earlier pending value.
    /// Returns true if a pending value was replaced.
    pub fn schedule(&mut self, value: T, now: Instant) -> bool {
        let replaced = self.pending.is_some();
        self.pending = Some((now + self.delay, value));
        replaced
    }

    /// Take the pending value if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((due, _)) if *due <= now => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// Drop the pending value. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(due, _)| *due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut deferred = Deferred::new(DELAY);
        deferred.schedule(1, start);

        assert_eq!(deferred.poll(start + Duration::from_millis(99)), None);
        assert_eq!(deferred.poll(start + DELAY), Some(1));
        assert_eq!(deferred.poll(start + DELAY * 2), None);
    }

    #[test]
    fn reschedule_keeps_only_latest() {
        let start = Instant::now();
        let mut deferred = Deferred::new(DELAY);
        assert!(!deferred.schedule("a", start));
        assert!(deferred.schedule("b", start + Duration::from_millis(60)));

        // The first deadline has passed, but it was replaced
        assert_eq!(deferred.poll(start + DELAY), None);
        assert_eq!(deferred.deadline(), Some(start + Duration::from_millis(160)));
        assert_eq!(deferred.poll(start + Duration::from_millis(160)), Some("b"));
    }

    #[test]
    fn cancel_discards_pending() {
        let start = Instant::now();
        let mut deferred = Deferred::new(DELAY);
        deferred.schedule(7, start);
        assert!(deferred.cancel());
        assert!(!deferred.is_pending());
        assert_eq!(deferred.poll(start + DELAY * 10), None);
        assert!(!deferred.cancel());
    }

    #[test]
    fn zero_delay_is_due_immediately() {
        let start = Instant::now();
        let mut deferred = Deferred::new(Duration::ZERO);
        deferred.schedule(3, start);
        assert_eq!(deferred.poll(start), Some(3));
    }
}
