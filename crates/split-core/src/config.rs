// ABOUTME: Split pane and application configuration handling.
// ABOUTME: Loads and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::Color;

/// Smallest size either pane may be dragged to, in layout units
pub const DEFAULT_MIN_PANE_SIZE: f32 = 30.0;

/// Divider thickness along the split axis, in layout units
pub const DEFAULT_DIVIDER_THICKNESS: f32 = 6.0;

/// Quiet period before a container measurement is applied
pub const DEFAULT_LAYOUT_DEBOUNCE_MS: u64 = 100;

/// Quiet period before the change callback sees the latest drag state
pub const DEFAULT_CHANGE_THROTTLE_MS: u64 = 500;

/// Edge length of the square grip icon drawn on the divider
pub const DEFAULT_GRIP_SIZE: f32 = 24.0;

/// Which way the container stacks its panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Panes stacked top/bottom, the divider is a horizontal bar
    #[default]
    Horizontal,
    /// Panes side by side, the divider is a vertical bar
    Vertical,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn toggled(&self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Visual and geometric overrides for the divider bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerSettings {
    /// Extent of the divider along the split axis
    pub thickness: f32,

    /// Fixed background; when set it wins over both rest and drag colors
    pub background: Option<Color>,

    /// Fill while idle
    pub rest_color: Color,

    /// Fill while the divider is being dragged
    pub drag_color: Color,

    /// Draw the split-arrows grip centered on the divider
    pub show_grip: bool,

    /// Edge length of the grip icon
    pub grip_size: f32,
}

impl Default for DividerSettings {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_DIVIDER_THICKNESS,
            background: None,
            rest_color: Color::LIGHT_GRAY,
            drag_color: Color::GRAY,
            show_grip: true,
            grip_size: DEFAULT_GRIP_SIZE,
        }
    }
}

impl DividerSettings {
    /// Divider fill for the given drag flag
    pub fn color(&self, dragging: bool) -> Color {
        match self.background {
            Some(color) => color,
            None if dragging => self.drag_color,
            None => self.rest_color,
        }
    }
}

/// Per-instance configuration of a split pane. Immutable for a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub orientation: Orientation,

    /// Neither pane may be dragged below this size
    pub min_pane_size: f32,

    pub divider: DividerSettings,

    /// Starting size of pane 1 before any drag
    pub pane1_initial_size: Option<f32>,

    /// Starting size of pane 2 before any drag
    pub pane2_initial_size: Option<f32>,

    /// Lay pane 2 out before pane 1 without swapping their identities
    pub flipped: bool,

    pub layout_debounce_ms: u64,

    pub change_throttle_ms: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            min_pane_size: DEFAULT_MIN_PANE_SIZE,
            divider: DividerSettings::default(),
            pane1_initial_size: None,
            pane2_initial_size: None,
            flipped: false,
            layout_debounce_ms: DEFAULT_LAYOUT_DEBOUNCE_MS,
            change_throttle_ms: DEFAULT_CHANGE_THROTTLE_MS,
        }
    }
}

impl SplitConfig {
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_min_pane_size(mut self, min: f32) -> Self {
        self.min_pane_size = min;
        self
    }

    #[must_use]
    pub fn with_divider_thickness(mut self, thickness: f32) -> Self {
        self.divider.thickness = thickness;
        self
    }

    #[must_use]
    pub fn with_divider_background(mut self, color: Color) -> Self {
        self.divider.background = Some(color);
        self
    }

    #[must_use]
    pub fn with_initial_sizes(mut self, pane1: Option<f32>, pane2: Option<f32>) -> Self {
        self.pane1_initial_size = pane1;
        self.pane2_initial_size = pane2;
        self
    }

    #[must_use]
    pub fn with_flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    #[must_use]
    pub fn with_layout_debounce(mut self, delay: Duration) -> Self {
        self.layout_debounce_ms = delay.as_millis() as u64;
        self
    }

    #[must_use]
    pub fn with_change_throttle(mut self, delay: Duration) -> Self {
        self.change_throttle_ms = delay.as_millis() as u64;
        self
    }

    pub fn layout_debounce(&self) -> Duration {
        Duration::from_millis(self.layout_debounce_ms)
    }

    pub fn change_throttle(&self) -> Duration {
        Duration::from_millis(self.change_throttle_ms)
    }

    /// Replace unusable values with their documented defaults.
    ///
    /// A zero, negative or non-finite minimum or divider thickness counts as
    /// "not supplied". Initial sizes that are not positive finite numbers are
    /// dropped so the pane starts unset.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !is_positive(self.min_pane_size) {
            tracing::warn!(
                "Ignoring min_pane_size {}, using {}",
                self.min_pane_size,
                DEFAULT_MIN_PANE_SIZE
            );
            self.min_pane_size = DEFAULT_MIN_PANE_SIZE;
        }
        if !is_positive(self.divider.thickness) {
            tracing::warn!(
                "Ignoring divider thickness {}, using {}",
                self.divider.thickness,
                DEFAULT_DIVIDER_THICKNESS
            );
            self.divider.thickness = DEFAULT_DIVIDER_THICKNESS;
        }
        if !is_positive(self.divider.grip_size) {
            self.divider.grip_size = DEFAULT_GRIP_SIZE;
        }
        self.pane1_initial_size = self.pane1_initial_size.filter(|s| is_positive(*s));
        self.pane2_initial_size = self.pane2_initial_size.filter(|s| is_positive(*s));
        self
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Behavior settings for the demo host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Log each delivered change notification as a JSON object
    pub log_changes_as_json: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            log_changes_as_json: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Outer split filling the window
    pub split: SplitConfig,

    /// Optional split nested inside the outer pane 2
    pub nested: Option<SplitConfig>,

    /// Behavior settings
    pub behavior: BehaviorSettings,

    /// Window dimensions
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split: SplitConfig::default(),
            nested: Some(SplitConfig::default().with_orientation(Orientation::Vertical)),
            behavior: BehaviorSettings::default(),
            window_width: 1000,
            window_height: 700,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/split-pane/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("split-pane").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}
