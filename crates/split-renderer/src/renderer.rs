// ABOUTME: Main GPU renderer using wgpu.
// ABOUTME: Owns the window surface and draws solid-color rectangles over a clear color.

use std::sync::Arc;
use winit::window::Window;

use crate::rect_pipeline::RectPipeline;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter found")]
    NoAdapter,

    #[error("Surface reports no supported texture formats")]
    NoSurfaceFormat,

    #[error("Failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

/// A rectangle to fill, in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 4],
}

impl FillRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    /// Scale from layout units to physical pixels
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
            color: self.color,
        }
    }
}

/// First sRGB format, else whatever the surface lists first
fn surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .or_else(|| formats.first().copied())
}

/// Panes are fully opaque, so skip compositing with whatever is behind the window
fn opaque_or_auto(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if modes.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        wgpu::CompositeAlphaMode::Auto
    }
}

pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    clear_color: wgpu::Color,
    rect_pipeline: RectPipeline,
}

impl Renderer {
    /// Set up a surface for `window` that is cleared to `clear` every frame.
    ///
    /// Frames are only drawn in response to input or layout changes, so the
    /// surface uses vsync with a single frame in flight and no transparency.
    pub async fn new(window: Arc<Window>, clear: [f32; 4]) -> Result<Self, RenderError> {
        let physical = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;
        tracing::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Split Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface_format(&caps.formats).ok_or(RenderError::NoSurfaceFormat)?;
        let alpha_mode = opaque_or_auto(&caps.alpha_modes);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: physical.width.max(1),
            height: physical.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 1,
        };
        surface.configure(&device, &surface_config);

        let rect_pipeline = RectPipeline::new(&device, format);
        rect_pipeline.update_screen_size(
            &queue,
            surface_config.width as f32,
            surface_config.height as f32,
        );

        let clear_color = wgpu::Color {
            r: clear[0] as f64,
            g: clear[1] as f64,
            b: clear[2] as f64,
            a: clear[3] as f64,
        };

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            clear_color,
            rect_pipeline,
        })
    }

    /// Reconfigure for a new physical size. A minimized window keeps the old surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        self.rect_pipeline
            .update_screen_size(&self.queue, width as f32, height as f32);
    }

    /// Render one frame. Rects are drawn in order, so later ones cover earlier ones.
    pub fn render(&mut self, rects: &[FillRect]) -> Result<(), RenderError> {
        self.rect_pipeline.prepare(&self.queue, rects);

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            // Surface went stale (e.g. after a display change); reconfigure and retry once
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.rect_pipeline.render(&mut render_pass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_keeps_color() {
        let rect = FillRect::new(1.0, 2.0, 3.0, 4.0, [0.1, 0.2, 0.3, 1.0]).scaled(2.0);
        assert_eq!(rect, FillRect::new(2.0, 4.0, 6.0, 8.0, [0.1, 0.2, 0.3, 1.0]));
    }

    #[test]
    fn prefers_srgb_surface_format() {
        use wgpu::TextureFormat::*;
        assert_eq!(surface_format(&[Bgra8Unorm, Bgra8UnormSrgb]), Some(Bgra8UnormSrgb));
        assert_eq!(surface_format(&[Rgba16Float]), Some(Rgba16Float));
        assert_eq!(surface_format(&[]), None);
    }

    #[test]
    fn prefers_opaque_alpha() {
        use wgpu::CompositeAlphaMode::*;
        assert_eq!(opaque_or_auto(&[PreMultiplied, Opaque]), Opaque);
        assert_eq!(opaque_or_auto(&[PreMultiplied]), Auto);
    }
}
