// ABOUTME: Shared types and configuration for the split pane widget.
// ABOUTME: Defines colors, orientation, divider settings, and config file handling.

pub mod color;
pub mod config;

pub use color::Color;
pub use config::{
    BehaviorSettings, Config, ConfigError, DividerSettings, Orientation, SplitConfig,
    DEFAULT_CHANGE_THROTTLE_MS, DEFAULT_DIVIDER_THICKNESS, DEFAULT_LAYOUT_DEBOUNCE_MS,
    DEFAULT_MIN_PANE_SIZE,
};
