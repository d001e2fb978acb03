// ABOUTME: The split pane widget instance: owns state, layout and timers.
// ABOUTME: Hosts forward layout and gesture events and tick it from their event loop.

use std::fmt;
use std::time::Instant;

use split_core::SplitConfig;

use crate::geometry::{Point, Rect};
use crate::gesture::resolve_drag;
use crate::sizing::{fill_unset, rescale};
use crate::state::{DragPhase, SplitState};
use crate::style::{compose, PaneRects, SplitStyles};
use crate::timer::Deferred;
use crate::tracker::LayoutTracker;

/// Listener for committed resizes
pub type ChangeCallback = Box<dyn FnMut(&SplitState)>;

/// What a call to [`SplitPane::tick`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// A new container measurement was applied
    pub layout_changed: bool,
    /// The change listener was invoked
    pub notified: bool,
}

impl Tick {
    pub fn needs_redraw(&self) -> bool {
        self.layout_changed
    }
}

pub struct SplitPane {
    config: SplitConfig,
    state: SplitState,
    tracker: LayoutTracker,
    notify: Deferred<SplitState>,
    on_change: Option<ChangeCallback>,
    /// Split-axis extent the current sizes were fitted to
    fitted_extent: Option<f32>,
}

impl SplitPane {
    /// Create an idle instance. Sizes come from the configuration or stay unset.
    pub fn mount(config: SplitConfig) -> Self {
        let config = config.normalized();
        let state = SplitState::from_config(&config);
        tracing::debug!(
            "Mounted {} split pane (min {}, divider {})",
            config.orientation.label(),
            config.min_pane_size,
            config.divider.thickness
        );
        Self {
            tracker: LayoutTracker::new(config.layout_debounce()),
            notify: Deferred::new(config.change_throttle()),
            state,
            config,
            on_change: None,
            fitted_extent: None,
        }
    }

    /// Register the throttled change listener
    #[must_use]
    pub fn with_on_change(mut self, callback: impl FnMut(&SplitState) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn state(&self) -> SplitState {
        self.state
    }

    pub fn phase(&self) -> DragPhase {
        self.state.phase()
    }

    /// Last applied container bounds
    pub fn layout(&self) -> Option<Rect> {
        self.tracker.current()
    }

    /// Container layout event; applied after the debounce elapses
    pub fn on_layout(&mut self, bounds: Rect, now: Instant) {
        self.tracker.on_layout(bounds, now);
    }

    /// Gesture granted: IDLE -> DRAGGING
    pub fn on_grant(&mut self) {
        if !self.state.dragging {
            tracing::debug!("Divider drag started");
        }
        self.state.dragging = true;
    }

    /// Pointer moved to `pointer` (absolute coordinates).
    ///
    /// Returns false when nothing was committed because the container has
    /// not been measured yet.
    pub fn on_move(&mut self, pointer: Point, now: Instant) -> bool {
        let Some((pane1, pane2)) = resolve_drag(&self.config, self.tracker.current(), pointer)
        else {
            tracing::trace!("Ignoring divider move before layout is known");
            return false;
        };

        self.state.set_sizes(pane1, pane2);
        if self.on_change.is_some() {
            self.notify.schedule(self.state, now);
        }
        true
    }

    /// Gesture released: DRAGGING -> IDLE
    pub fn on_release(&mut self) {
        if self.state.dragging {
            tracing::debug!(
                "Divider drag ended at {:?} / {:?}",
                self.state.pane1_size,
                self.state.pane2_size
            );
        }
        self.state.dragging = false;
    }

    /// Run any deferred work that is due at `now`
    pub fn tick(&mut self, now: Instant) -> Tick {
        let mut tick = Tick::default();

        if let Some(bounds) = self.tracker.poll(now) {
            self.apply_layout(bounds, now);
            tick.layout_changed = true;
        }

        if let Some(state) = self.notify.poll(now) {
            if let Some(callback) = self.on_change.as_mut() {
                callback(&state);
                tick.notified = true;
            }
        }

        tick
    }

    /// Earliest pending timer, for hosts that sleep between events
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.tracker.deadline(), self.notify.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn styles(&self) -> SplitStyles {
        compose(&self.state, &self.config)
    }

    /// Rectangles for the current state inside the measured container
    pub fn arrange(&self) -> Option<PaneRects> {
        let bounds = self.tracker.current()?;
        Some(self.styles().arrange(bounds))
    }

    /// True if `point` is on the divider, widened by `slop` on each side
    pub fn hits_divider(&self, point: Point, slop: f32) -> bool {
        self.arrange()
            .is_some_and(|rects| rects.divider.inflate(slop.max(0.0)).contains(point))
    }

    /// Tear the instance down, dropping any pending measurement or notification
    pub fn unmount(mut self) {
        self.cancel_timers();
    }

    fn cancel_timers(&mut self) {
        let layout = self.tracker.cancel();
        let change = self.notify.cancel();
        if layout || change {
            tracing::debug!(
                "Cancelled pending timers on unmount (layout: {}, change: {})",
                layout,
                change
            );
        }
    }

    fn apply_layout(&mut self, bounds: Rect, now: Instant) {
        if !bounds.is_measurable() {
            return;
        }
        let extent = bounds.extent_along(self.config.orientation);
        let previous = self.state.sizes();
        let (pane1, pane2) = match (previous, self.fitted_extent) {
            (None, _) => fill_unset(&self.config, &self.state, bounds),
            // An explicit initial pair is used as given
            (Some(sizes), None) => sizes,
            (Some(sizes), Some(fitted)) if fitted == extent => sizes,
            (Some(sizes), Some(_)) => rescale(&self.config, sizes, bounds),
        };
        self.fitted_extent = Some(extent);
        self.state.set_sizes(pane1, pane2);
        tracing::debug!(
            "Applied layout {}x{} -> pane sizes {} / {}",
            bounds.width,
            bounds.height,
            pane1,
            pane2
        );

        // A rescale changes committed sizes without a gesture
        let rescaled = previous.is_some_and(|sizes| sizes != (pane1, pane2));
        if rescaled && self.on_change.is_some() {
            self.notify.schedule(self.state, now);
        }
    }
}

impl Drop for SplitPane {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

impl fmt::Debug for SplitPane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitPane")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("layout", &self.tracker.current())
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}
