// ABOUTME: GPU rendering for split pane hosts.
// ABOUTME: Uses wgpu to fill pane, divider and grip rectangles.

mod rect_pipeline;
pub mod renderer;

pub use renderer::{FillRect, RenderError, Renderer};
