// ABOUTME: Split state shared between the gesture handler and the style composer.
// ABOUTME: Pane sizes stay unset until measured or supplied, which renders as 50/50.

use serde::Serialize;
use split_core::SplitConfig;

/// Current split, as reported to change listeners
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitState {
    pub pane1_size: Option<f32>,
    pub pane2_size: Option<f32>,
    pub dragging: bool,
}

/// Gesture lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

impl SplitState {
    /// Starting state: idle, with any supplied initial sizes
    pub fn from_config(config: &SplitConfig) -> Self {
        Self {
            pane1_size: config.pane1_initial_size,
            pane2_size: config.pane2_initial_size,
            dragging: false,
        }
    }

    /// Both sizes, if both are set and positive
    pub fn sizes(&self) -> Option<(f32, f32)> {
        match (self.pane1_size, self.pane2_size) {
            (Some(a), Some(b)) if a > 0.0 && b > 0.0 => Some((a, b)),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        self.pane1_size.is_none() && self.pane2_size.is_none()
    }

    pub fn phase(&self) -> DragPhase {
        if self.dragging {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub(crate) fn set_sizes(&mut self, pane1: f32, pane2: f32) {
        self.pane1_size = Some(pane1);
        self.pane2_size = Some(pane2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_initial_sizes() {
        let config = SplitConfig::default().with_initial_sizes(Some(120.0), None);
        let state = SplitState::from_config(&config);
        assert_eq!(state.phase(), DragPhase::Idle);
        assert_eq!(state.pane1_size, Some(120.0));
        assert_eq!(state.sizes(), None);
        assert!(!state.is_unset());
    }

    #[test]
    fn sizes_require_both_positive() {
        let mut state = SplitState::default();
        assert!(state.is_unset());
        state.set_sizes(0.0, 40.0);
        assert_eq!(state.sizes(), None);
        state.set_sizes(10.0, 40.0);
        assert_eq!(state.sizes(), Some((10.0, 40.0)));
    }
}
