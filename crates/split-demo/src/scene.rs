// ABOUTME: Turns split pane arrangements into rectangles to fill.
// ABOUTME: Pane contents are flat colors; the grip is drawn as split arrows.

use split_core::Color;
use split_layout::{GripIcon, PaneRects, Rect, SplitPane};
use split_renderer::FillRect;

const OUTER_PANE1: Color = Color::BLUE;
const INNER_PANE1: Color = Color::GREEN;
const INNER_PANE2: Color = Color::rgb(0.9, 0.55, 0.1);
const GRIP_COLOR: Color = Color::rgb(0.3, 0.3, 0.3);

/// Which divider a pointer event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Outer,
    Inner,
}

/// Resolved rectangles for the outer split and, if present, the inner one
/// laid out inside the outer pane 2.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub outer: PaneRects,
    pub inner: Option<PaneRects>,
}

impl Scene {
    /// Arrange both splits against the outer pane's measured bounds.
    ///
    /// The inner split is arranged against the live outer pane 2 rather than
    /// its own (debounced) measurement so it tracks the outer divider.
    pub fn arrange(outer: &SplitPane, inner: Option<&SplitPane>) -> Option<Scene> {
        let outer_rects = outer.arrange()?;
        let inner_rects = inner.map(|pane| pane.styles().arrange(outer_rects.pane2));
        Some(Scene {
            outer: outer_rects,
            inner: inner_rects,
        })
    }

    /// Divider under `point` (layout units), innermost first
    pub fn divider_at(&self, x: f32, y: f32, slop: f32) -> Option<Target> {
        let point = split_layout::Point::new(x, y);
        if let Some(inner) = &self.inner {
            if inner.divider.inflate(slop).contains(point) {
                return Some(Target::Inner);
            }
        }
        self.outer
            .divider
            .inflate(slop)
            .contains(point)
            .then_some(Target::Outer)
    }

    /// Rectangles in draw order, in layout units
    pub fn fill_rects(&self, outer: &SplitPane, inner: Option<&SplitPane>) -> Vec<FillRect> {
        let mut out = Vec::new();
        out.push(fill(self.outer.pane1, OUTER_PANE1));

        match (&self.inner, inner) {
            (Some(rects), Some(pane)) => {
                out.push(fill(rects.pane1, INNER_PANE1));
                out.push(fill(rects.pane2, INNER_PANE2));
                push_divider(&mut out, rects, pane.styles().divider.color);
            }
            _ => out.push(fill(self.outer.pane2, INNER_PANE1)),
        }

        push_divider(&mut out, &self.outer, outer.styles().divider.color);
        out
    }
}

fn fill(rect: Rect, color: Color) -> FillRect {
    FillRect::new(rect.x, rect.y, rect.width, rect.height, color.to_array())
}

fn push_divider(out: &mut Vec<FillRect>, rects: &PaneRects, color: Color) {
    out.push(fill(rects.divider, color));
    if let Some((icon, area)) = rects.grip {
        out.extend(grip_marks(icon, area, GRIP_COLOR));
    }
}

/// Two arrows pointing away from a bar, built from stacked bars
pub fn grip_marks(icon: GripIcon, area: Rect, color: Color) -> Vec<FillRect> {
    let unit = area.width.min(area.height) / 12.0;
    let cx = area.x + area.width / 2.0;
    let cy = area.y + area.height / 2.0;
    let mut marks = Vec::new();

    match icon {
        GripIcon::SplitHorizontal => {
            marks.push(Rect::new(area.x, cy - unit / 2.0, area.width, unit));
            for dir in [-1.0_f32, 1.0] {
                // Stem, then a widening head toward the tip
                let stem_start = cy + dir * unit * 1.5;
                let stem_end = cy + dir * unit * 6.0;
                marks.push(Rect::new(
                    cx - unit / 2.0,
                    stem_start.min(stem_end),
                    unit,
                    (stem_end - stem_start).abs(),
                ));
                for step in 0..3 {
                    let half = unit * (3 - step) as f32;
                    let y = cy + dir * unit * (3.0 + step as f32);
                    marks.push(Rect::new(cx - half, y.min(y + dir * unit), half * 2.0, unit));
                }
            }
        }
        GripIcon::SplitVertical => {
            marks.push(Rect::new(cx - unit / 2.0, area.y, unit, area.height));
            for dir in [-1.0_f32, 1.0] {
                let stem_start = cx + dir * unit * 1.5;
                let stem_end = cx + dir * unit * 6.0;
                marks.push(Rect::new(
                    stem_start.min(stem_end),
                    cy - unit / 2.0,
                    (stem_end - stem_start).abs(),
                    unit,
                ));
                for step in 0..3 {
                    let half = unit * (3 - step) as f32;
                    let x = cx + dir * unit * (3.0 + step as f32);
                    marks.push(Rect::new(x.min(x + dir * unit), cy - half, unit, half * 2.0));
                }
            }
        }
    }

    marks.into_iter().map(|r| fill(r, color)).collect()
}
