// ABOUTME: Pure style composition for the two panes and the divider.
// ABOUTME: Also resolves the styles into concrete rectangles for a container.

use split_core::{Color, Orientation, SplitConfig};

use crate::geometry::Rect;
use crate::state::SplitState;

/// Size of a pane along the split axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Exact size in layout units
    Fixed(f32),
    /// Share of whatever space the fixed items leave
    Flex(f32),
}

/// Stacking direction of the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Column,
    Row,
}

/// Pointer cursor a host should show over the divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeCursor {
    RowResize,
    ColResize,
}

/// Split-arrows icon drawn on the divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GripIcon {
    /// Arrows pointing up and down
    SplitHorizontal,
    /// Arrows pointing left and right
    SplitVertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneStyle {
    pub extent: Extent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerStyle {
    /// Fixed extent along the split axis; the cross axis is always full
    pub thickness: f32,
    pub color: Color,
    pub cursor: ResizeCursor,
    pub grip: Option<(GripIcon, f32)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitStyles {
    pub orientation: Orientation,
    pub direction: FlexDirection,
    pub pane1: PaneStyle,
    pub divider: DividerStyle,
    pub pane2: PaneStyle,
    /// Pane 2 comes first in visual order
    pub flipped: bool,
}

/// Concrete rectangles for one arrangement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneRects {
    pub pane1: Rect,
    pub divider: Rect,
    pub pane2: Rect,
    pub grip: Option<(GripIcon, Rect)>,
}

/// Compose the three style descriptors from state and configuration
pub fn compose(state: &SplitState, config: &SplitConfig) -> SplitStyles {
    let (pane1, pane2) = match state.sizes() {
        Some((a, b)) => (Extent::Fixed(a), Extent::Fixed(b)),
        None => (Extent::Flex(1.0), Extent::Flex(1.0)),
    };

    let (direction, cursor, icon) = match config.orientation {
        Orientation::Horizontal => (
            FlexDirection::Column,
            ResizeCursor::RowResize,
            GripIcon::SplitHorizontal,
        ),
        Orientation::Vertical => (
            FlexDirection::Row,
            ResizeCursor::ColResize,
            GripIcon::SplitVertical,
        ),
    };

    SplitStyles {
        orientation: config.orientation,
        direction,
        pane1: PaneStyle { extent: pane1 },
        divider: DividerStyle {
            thickness: config.divider.thickness,
            color: config.divider.color(state.dragging),
            cursor,
            grip: config
                .divider
                .show_grip
                .then_some((icon, config.divider.grip_size)),
        },
        pane2: PaneStyle { extent: pane2 },
        flipped: config.flipped,
    }
}

impl SplitStyles {
    /// Lay the panes and divider out inside `container`
    pub fn arrange(&self, container: Rect) -> PaneRects {
        let orientation = self.orientation;
        let extent = container.extent_along(orientation);
        let across_start = container.origin_along(orientation.toggled());
        let across_len = container.extent_across(orientation);

        let (first, second) = if self.flipped {
            (self.pane2.extent, self.pane1.extent)
        } else {
            (self.pane1.extent, self.pane2.extent)
        };

        let fixed = fixed_len(first) + fixed_len(second) + self.divider.thickness;
        let weights = flex_weight(first) + flex_weight(second);
        let free = (extent - fixed).max(0.0);
        let resolve = |e: Extent| match e {
            Extent::Fixed(len) => len,
            Extent::Flex(w) if weights > 0.0 => free * w / weights,
            Extent::Flex(_) => 0.0,
        };

        let first_len = resolve(first);
        let second_len = resolve(second);
        let mut cursor = container.origin_along(orientation);
        let mut place = |len: f32| {
            let rect = Rect::from_spans(orientation, cursor, len, across_start, across_len);
            cursor += len;
            rect
        };

        let first_rect = place(first_len);
        let divider = place(self.divider.thickness);
        let second_rect = place(second_len);

        let (pane1, pane2) = if self.flipped {
            (second_rect, first_rect)
        } else {
            (first_rect, second_rect)
        };

        let grip = self.divider.grip.map(|(icon, size)| {
            let center_x = divider.x + divider.width / 2.0;
            let center_y = divider.y + divider.height / 2.0;
            (
                icon,
                Rect::new(center_x - size / 2.0, center_y - size / 2.0, size, size),
            )
        });

        PaneRects {
            pane1,
            divider,
            pane2,
            grip,
        }
    }
}

fn fixed_len(extent: Extent) -> f32 {
    match extent {
        Extent::Fixed(len) => len,
        Extent::Flex(_) => 0.0,
    }
}

fn flex_weight(extent: Extent) -> f32 {
    match extent {
        Extent::Fixed(_) => 0.0,
        Extent::Flex(w) => w,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 500.0)
    }

    #[test]
    fn unset_sizes_compose_equal_flex() {
        let styles = compose(&SplitState::default(), &SplitConfig::default());
        assert_eq!(styles.direction, FlexDirection::Column);
        assert_eq!(styles.pane1.extent, Extent::Flex(1.0));
        assert_eq!(styles.pane2.extent, Extent::Flex(1.0));
        assert_eq!(styles.divider.thickness, 6.0);
        assert_eq!(styles.divider.cursor, ResizeCursor::RowResize);
    }

    #[test]
    fn set_sizes_compose_fixed_extents() {
        let state = SplitState {
            pane1_size: Some(47.0),
            pane2_size: Some(447.0),
            dragging: true,
        };
        let styles = compose(&state, &SplitConfig::default());
        assert_eq!(styles.pane1.extent, Extent::Fixed(47.0));
        assert_eq!(styles.pane2.extent, Extent::Fixed(447.0));
        assert_eq!(styles.divider.color, Color::GRAY);
    }

    #[test]
    fn divider_color_follows_drag_flag() {
        let mut state = SplitState::default();
        let config = SplitConfig::default();
        assert_eq!(compose(&state, &config).divider.color, Color::LIGHT_GRAY);
        state.dragging = true;
        assert_eq!(compose(&state, &config).divider.color, Color::GRAY);
    }

    #[test]
    fn vertical_orientation_stacks_in_a_row() {
        let config = SplitConfig::default().with_orientation(Orientation::Vertical);
        let styles = compose(&SplitState::default(), &config);
        assert_eq!(styles.direction, FlexDirection::Row);
        assert_eq!(styles.divider.cursor, ResizeCursor::ColResize);
        assert_eq!(
            styles.divider.grip.map(|(icon, _)| icon),
            Some(GripIcon::SplitVertical)
        );

        let rects = styles.arrange(Rect::new(0.0, 0.0, 406.0, 100.0));
        assert_eq!(rects.pane1, Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(rects.divider, Rect::new(200.0, 0.0, 6.0, 100.0));
        assert_eq!(rects.pane2, Rect::new(206.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn flex_arrangement_splits_evenly() {
        let styles = compose(&SplitState::default(), &SplitConfig::default());
        let rects = styles.arrange(container());
        assert_eq!(rects.pane1, Rect::new(0.0, 0.0, 300.0, 247.0));
        assert_eq!(rects.divider, Rect::new(0.0, 247.0, 300.0, 6.0));
        assert_eq!(rects.pane2, Rect::new(0.0, 253.0, 300.0, 247.0));
        let (_, grip) = rects.grip.unwrap();
        assert_eq!(grip, Rect::new(138.0, 238.0, 24.0, 24.0));
    }

    #[test]
    fn flipped_arrangement_puts_pane2_first() {
        let state = SplitState {
            pane1_size: Some(100.0),
            pane2_size: Some(394.0),
            dragging: false,
        };
        let config = SplitConfig::default().with_flipped(true);
        let rects = compose(&state, &config).arrange(container());
        assert_eq!(rects.pane2, Rect::new(0.0, 0.0, 300.0, 394.0));
        assert_eq!(rects.divider.y, 394.0);
        assert_eq!(rects.pane1, Rect::new(0.0, 400.0, 300.0, 100.0));
    }

    #[test]
    fn hidden_grip_is_omitted() {
        let mut config = SplitConfig::default();
        config.divider.show_grip = false;
        let rects = compose(&SplitState::default(), &config).arrange(container());
        assert!(rects.grip.is_none());
    }
}
