// ABOUTME: Tracks the container's last known on-screen bounds.
// ABOUTME: Measurements are debounced so only the last event of a burst applies.

use std::time::{Duration, Instant};

use crate::geometry::Rect;
use crate::timer::Deferred;

#[derive(Debug)]
pub struct LayoutTracker {
    current: Option<Rect>,
    pending: Deferred<Rect>,
}

impl LayoutTracker {
    pub fn new(debounce: Duration) -> Self {
        Self {
            current: None,
            pending: Deferred::new(debounce),
        }
    }

    /// Last applied bounds, if the container has been measured
    pub fn current(&self) -> Option<Rect> {
        self.current
    }

    /// Record a layout event. The bounds are applied by a later `poll`.
    pub fn on_layout(&mut self, bounds: Rect, now: Instant) {
        if self.pending.schedule(bounds, now) {
            tracing::trace!("Layout event superseded a pending measurement");
        }
    }

    /// Apply the pending measurement if its debounce has elapsed.
    /// Returns the new bounds only when they differ from the stored ones.
    pub fn poll(&mut self, now: Instant) -> Option<Rect> {
        let bounds = self.pending.poll(now)?;
        if self.current == Some(bounds) {
            return None;
        }
        tracing::debug!(
            "Container bounds changed: {:?} -> {:?}",
            self.current,
            bounds
        );
        self.current = Some(bounds);
        Some(bounds)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.deadline()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(100);

    #[test]
    fn burst_applies_only_last_bounds() {
        let start = Instant::now();
        let mut tracker = LayoutTracker::new(DEBOUNCE);

        for i in 0..5 {
            let bounds = Rect::new(0.0, 0.0, 400.0 + i as f32, 500.0);
            tracker.on_layout(bounds, start + Duration::from_millis(10 * i));
        }

        assert_eq!(tracker.poll(start + Duration::from_millis(100)), None);
        let applied = tracker.poll(start + Duration::from_millis(140));
        assert_eq!(applied, Some(Rect::new(0.0, 0.0, 404.0, 500.0)));
        assert_eq!(tracker.current(), applied);
        assert!(!tracker.is_pending());
    }

    #[test]
    fn unchanged_bounds_are_not_reported() {
        let start = Instant::now();
        let mut tracker = LayoutTracker::new(DEBOUNCE);
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);

        tracker.on_layout(bounds, start);
        assert_eq!(tracker.poll(start + DEBOUNCE), Some(bounds));

        tracker.on_layout(bounds, start + DEBOUNCE);
        assert_eq!(tracker.poll(start + DEBOUNCE * 2), None);
        assert_eq!(tracker.current(), Some(bounds));
    }

    #[test]
    fn cancel_drops_pending_measurement() {
        let start = Instant::now();
        let mut tracker = LayoutTracker::new(DEBOUNCE);
        tracker.on_layout(Rect::new(0.0, 0.0, 10.0, 10.0), start);
        assert!(tracker.cancel());
        assert_eq!(tracker.poll(start + DEBOUNCE), None);
        assert_eq!(tracker.current(), None);
    }
}
