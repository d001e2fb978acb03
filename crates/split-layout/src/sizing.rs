// ABOUTME: Pane sizes derived from a container measurement.
// ABOUTME: Fills unset sizes on first layout and rescales on later extent changes.

use split_core::SplitConfig;

use crate::geometry::Rect;
use crate::gesture::clamp_to_min;
use crate::state::SplitState;

/// Space left for the two panes once the divider is placed
pub fn distributable(config: &SplitConfig, bounds: Rect) -> f32 {
    (bounds.extent_along(config.orientation) - config.divider.thickness).max(0.0)
}

/// Sizes for a freshly measured container.
///
/// Unset panes share the space equally; a single supplied size leaves the
/// remainder to the other pane. An explicit pair is returned untouched.
pub fn fill_unset(config: &SplitConfig, state: &SplitState, bounds: Rect) -> (f32, f32) {
    let available = distributable(config, bounds);
    match (state.pane1_size, state.pane2_size) {
        (Some(a), Some(b)) => (a, b),
        (Some(a), None) => (a, available - a),
        (None, Some(b)) => (available - b, b),
        (None, None) => {
            let half = available / 2.0;
            (half, half)
        }
    }
}

/// Keep each pane's share of the space when the container's extent changes,
/// then re-apply the minimum.
pub fn rescale(config: &SplitConfig, (pane1, pane2): (f32, f32), bounds: Rect) -> (f32, f32) {
    let available = distributable(config, bounds);
    let total = pane1 + pane2;
    let pane1 = if total > 0.0 && total.is_finite() {
        available * (pane1 / total)
    } else {
        available / 2.0
    };
    clamp_to_min(pane1, available - pane1, config.min_pane_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 500.0)
    }

    #[test]
    fn unset_sizes_split_evenly() {
        let config = SplitConfig::default();
        let sizes = fill_unset(&config, &SplitState::default(), container());
        assert_eq!(sizes, (247.0, 247.0));
    }

    #[test]
    fn single_initial_size_leaves_remainder() {
        let config = SplitConfig::default().with_initial_sizes(None, Some(94.0));
        let state = SplitState::from_config(&config);
        assert_eq!(fill_unset(&config, &state, container()), (400.0, 94.0));
    }

    #[test]
    fn explicit_pair_is_kept() {
        let config = SplitConfig::default().with_initial_sizes(Some(100.0), Some(100.0));
        let state = SplitState::from_config(&config);
        assert_eq!(fill_unset(&config, &state, container()), (100.0, 100.0));
    }

    #[test]
    fn rescale_keeps_proportions() {
        let config = SplitConfig::default();
        let bigger = Rect::new(0.0, 0.0, 300.0, 1006.0);
        assert_eq!(rescale(&config, (100.0, 300.0), bigger), (250.0, 750.0));
    }

    #[test]
    fn rescale_respects_minimum() {
        let config = SplitConfig::default();
        let smaller = Rect::new(0.0, 0.0, 300.0, 206.0);
        // 200 * 1/16 = 12.5, raised to 30
        assert_eq!(rescale(&config, (25.0, 375.0), smaller), (30.0, 170.0));
    }
}
