// ABOUTME: Rectangles and points in container coordinates.
// ABOUTME: Provides split-axis accessors shared by gesture math and arrangement.

use split_core::Orientation;

/// Rectangle in layout units (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Start coordinate along the split axis (top for horizontal, left for vertical)
    pub fn origin_along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.y,
            Orientation::Vertical => self.x,
        }
    }

    /// Length along the split axis (height for horizontal, width for vertical)
    pub fn extent_along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }

    /// Length across the split axis
    pub fn extent_across(&self, orientation: Orientation) -> f32 {
        self.extent_along(orientation.toggled())
    }

    /// True when every field is finite and both dimensions are positive
    pub fn is_measurable(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Grow the rectangle by `amount` on every side
    pub fn inflate(&self, amount: f32) -> Rect {
        Rect {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    /// Build a rectangle from split-axis and cross-axis spans
    pub(crate) fn from_spans(
        orientation: Orientation,
        along_start: f32,
        along_len: f32,
        across_start: f32,
        across_len: f32,
    ) -> Rect {
        match orientation {
            Orientation::Horizontal => Rect::new(across_start, along_start, across_len, along_len),
            Orientation::Vertical => Rect::new(along_start, across_start, along_len, across_len),
        }
    }
}

/// Absolute pointer position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along the split axis
    pub fn along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.y,
            Orientation::Vertical => self.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_accessors_follow_orientation() {
        let rect = Rect::new(10.0, 20.0, 300.0, 500.0);
        assert_eq!(rect.origin_along(Orientation::Horizontal), 20.0);
        assert_eq!(rect.extent_along(Orientation::Horizontal), 500.0);
        assert_eq!(rect.origin_along(Orientation::Vertical), 10.0);
        assert_eq!(rect.extent_along(Orientation::Vertical), 300.0);
        assert_eq!(rect.extent_across(Orientation::Vertical), 500.0);
    }

    #[test]
    fn zero_sized_rect_is_not_measurable() {
        assert!(!Rect::new(0.0, 0.0, 0.0, 100.0).is_measurable());
        assert!(!Rect::new(f32::NAN, 0.0, 10.0, 10.0).is_measurable());
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_measurable());
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(9.9, 9.9)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn spans_map_back_to_axes() {
        let h = Rect::from_spans(Orientation::Horizontal, 5.0, 50.0, 0.0, 200.0);
        assert_eq!(h, Rect::new(0.0, 5.0, 200.0, 50.0));
        let v = Rect::from_spans(Orientation::Vertical, 5.0, 50.0, 0.0, 200.0);
        assert_eq!(v, Rect::new(5.0, 0.0, 50.0, 200.0));
    }
}
