// ABOUTME: Two-pane split layout with a draggable divider.
// ABOUTME: Gesture math, debounced layout tracking, and style composition.

mod geometry;
mod gesture;
mod pane;
mod sizing;
mod state;
mod style;
mod timer;
mod tracker;

pub use geometry::{Point, Rect};
pub use gesture::{clamp_to_min, resolve_drag, sizes_at_pointer};
pub use pane::{ChangeCallback, SplitPane, Tick};
pub use sizing::{distributable, fill_unset, rescale};
pub use state::{DragPhase, SplitState};
pub use style::{
    compose, DividerStyle, Extent, FlexDirection, GripIcon, PaneRects, PaneStyle, ResizeCursor,
    SplitStyles,
};
pub use timer::Deferred;
pub use tracker::LayoutTracker;
