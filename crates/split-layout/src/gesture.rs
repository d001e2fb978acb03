// ABOUTME: Converts divider drag positions into pane sizes.
// ABOUTME: Applies a single-pass minimum clamp to each side.

use split_core::SplitConfig;

use crate::geometry::{Point, Rect};

/// Sizes of the leading and trailing panes (in visual order) for a divider
/// centered on the pointer.
pub fn sizes_at_pointer(config: &SplitConfig, bounds: Rect, pointer: Point) -> (f32, f32) {
    let orientation = config.orientation;
    let margin = config.divider.thickness / 2.0;
    let origin = bounds.origin_along(orientation);
    let extent = bounds.extent_along(orientation);
    let at = pointer.along(orientation);

    let leading = at - margin - origin;
    let trailing = extent + origin - (at + margin);
    (leading, trailing)
}

/// Raise each pane to `min`, taking the shortfall from the other one.
///
/// Pane 1 is checked first, then pane 2. There is no second pass, so when the
/// container cannot hold both minimums pane 1 ends up below it.
pub fn clamp_to_min(mut pane1: f32, mut pane2: f32, min: f32) -> (f32, f32) {
    if pane1 < min {
        pane2 -= min - pane1;
        pane1 = min;
    }
    if pane2 < min {
        pane1 -= min - pane2;
        pane2 = min;
    }
    (pane1, pane2)
}

/// Full drag computation: `None` while the container is unmeasured.
/// The result is `(pane1, pane2)` by identity, regardless of `flipped`.
pub fn resolve_drag(
    config: &SplitConfig,
    bounds: Option<Rect>,
    pointer: Point,
) -> Option<(f32, f32)> {
    let bounds = bounds.filter(Rect::is_measurable)?;
    if !pointer.x.is_finite() || !pointer.y.is_finite() {
        return None;
    }

    let (leading, trailing) = sizes_at_pointer(config, bounds, pointer);
    let (pane1, pane2) = if config.flipped {
        (trailing, leading)
    } else {
        (leading, trailing)
    };
    Some(clamp_to_min(pane1, pane2, config.min_pane_size))
}
