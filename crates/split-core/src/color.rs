// ABOUTME: Color representation used for divider and pane fills.
// ABOUTME: Plain RGBA floats with a handful of named presets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build from 8-bit channels (e.g. `0xd3, 0xd3, 0xd3`)
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Divider fill while a drag is in progress (#808080)
    pub const GRAY: Self = Self::rgb(0.502, 0.502, 0.502);

    /// Divider fill at rest (#d3d3d3)
    pub const LIGHT_GRAY: Self = Self::rgb(0.827, 0.827, 0.827);

    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// CSS "green" (#008000)
    pub const GREEN: Self = Self::rgb(0.0, 0.502, 0.0);

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::LIGHT_GRAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_maps_to_unit_range() {
        let c = Color::from_rgb8(255, 0, 128);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.502).abs() < 0.001);
        assert_eq!(c.a, 1.0);
    }
}
