// ABOUTME: Example host application for the split pane widget.
// ABOUTME: Sets up the window and event loop and forwards layout and pointer events.

mod scene;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, ModifiersState};
use winit::window::{CursorIcon, Window, WindowAttributes, WindowId};

use scene::{Scene, Target};
use split_core::{Color, Config, SplitConfig};
use split_layout::{Point, Rect, ResizeCursor, SplitPane, SplitState};
use split_renderer::Renderer;

/// Extra grab margin around dividers, in layout units
const DIVIDER_SLOP: f32 = 4.0;

const BACKGROUND: Color = Color::WHITE;

fn change_logger(name: &'static str, as_json: bool) -> impl FnMut(&SplitState) + 'static {
    move |state: &SplitState| {
        if as_json {
            match serde_json::to_string(state) {
                Ok(json) => tracing::info!("{} split changed: {}", name, json),
                Err(e) => tracing::error!("Failed to serialize split state: {}", e),
            }
        } else {
            tracing::info!(
                "{} split changed: {:?} / {:?}",
                name,
                state.pane1_size,
                state.pane2_size
            );
        }
    }
}

fn mount(name: &'static str, config: &SplitConfig, as_json: bool) -> SplitPane {
    SplitPane::mount(config.clone()).with_on_change(change_logger(name, as_json))
}

fn cursor_for(cursor: ResizeCursor) -> CursorIcon {
    match cursor {
        ResizeCursor::RowResize => CursorIcon::RowResize,
        ResizeCursor::ColResize => CursorIcon::ColResize,
    }
}

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    config: Config,
    outer: SplitPane,
    inner: Option<SplitPane>,
    /// Outer pane 2 bounds last reported to the inner split
    inner_bounds: Option<Rect>,
    dragging: Option<Target>,
    hovering: Option<Target>,
    mouse_pos: Point,
    scale_factor: f64,
    modifiers: ModifiersState,
}

impl App {
    fn new() -> Self {
        Self::with_config(Config::load_or_default())
    }

    fn with_config(config: Config) -> Self {
        let as_json = config.behavior.log_changes_as_json;
        tracing::info!(
            "Loaded config: outer {} split, nested: {}",
            config.split.orientation.label(),
            config.nested.is_some()
        );

        Self {
            window: None,
            renderer: None,
            outer: mount("outer", &config.split, as_json),
            inner: config.nested.as_ref().map(|c| mount("inner", c, as_json)),
            config,
            inner_bounds: None,
            dragging: None,
            hovering: None,
            mouse_pos: Point::default(),
            scale_factor: 1.0,
            modifiers: ModifiersState::empty(),
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn pane(&mut self, target: Target) -> Option<&mut SplitPane> {
        match target {
            Target::Outer => Some(&mut self.outer),
            Target::Inner => self.inner.as_mut(),
        }
    }

    fn container_bounds(&self) -> Option<Rect> {
        let window = self.window.as_ref()?;
        let size: LogicalSize<f32> = window.inner_size().to_logical(self.scale_factor);
        Some(Rect::new(0.0, 0.0, size.width, size.height))
    }

    /// Report the window bounds to the outer split
    fn measure_outer(&mut self, now: Instant) {
        if let Some(bounds) = self.container_bounds() {
            self.outer.on_layout(bounds, now);
        }
    }

    /// Report the outer pane 2 bounds to the inner split when they moved
    fn measure_inner(&mut self, now: Instant) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        let Some(rects) = self.outer.arrange() else {
            return;
        };
        if self.inner_bounds != Some(rects.pane2) {
            self.inner_bounds = Some(rects.pane2);
            inner.on_layout(rects.pane2, now);
        }
    }

    /// Re-create the outer split from a new configuration
    fn remount_outer(&mut self, config: SplitConfig) {
        let as_json = self.config.behavior.log_changes_as_json;
        let now = Instant::now();
        // End any drag in progress first, so the inner pane does not stay in DRAGGING
        if let Some(target) = self.dragging.take() {
            if let Some(pane) = self.pane(target) {
                pane.on_release();
            }
        }
        let old = std::mem::replace(&mut self.outer, mount("outer", &config, as_json));
        old.unmount();
        self.config.split = config;
        self.measure_outer(now);
        tracing::info!(
            "Remounted outer split: {} (flipped: {})",
            self.config.split.orientation.label(),
            self.config.split.flipped
        );
    }

    fn update_hover(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let hovered = Scene::arrange(&self.outer, self.inner.as_ref())
            .and_then(|scene| scene.divider_at(self.mouse_pos.x, self.mouse_pos.y, DIVIDER_SLOP));
        if hovered == self.hovering {
            return;
        }
        self.hovering = hovered;

        let icon = match hovered {
            Some(Target::Outer) => cursor_for(self.outer.styles().divider.cursor),
            Some(Target::Inner) => match &self.inner {
                Some(inner) => cursor_for(inner.styles().divider.cursor),
                None => CursorIcon::Default,
            },
            None => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    fn render(&mut self) {
        let scale = self.scale_factor as f32;
        let Some(renderer) = &mut self.renderer else {
            return;
        };
        let rects: Vec<_> = Scene::arrange(&self.outer, self.inner.as_ref())
            .map(|scene| scene.fill_rects(&self.outer, self.inner.as_ref()))
            .unwrap_or_default()
            .into_iter()
            .map(|r| r.scaled(scale))
            .collect();

        if let Err(e) = renderer.render(&rects) {
            tracing::error!("Render error: {}", e);
        }
    }

    fn handle_key(&mut self, key: &Key) {
        let ctrl = self.modifiers.control_key();

        // Ctrl+S: persist the current configuration
        if ctrl && *key == Key::Character("s".into()) {
            match self.config.save_to_default() {
                Ok(path) => tracing::info!("Config saved to {}", path.display()),
                Err(e) => tracing::error!("Failed to save config: {}", e),
            }
            return;
        }

        // O: toggle outer orientation
        if *key == Key::Character("o".into()) {
            let orientation = self.config.split.orientation.toggled();
            let config = self.config.split.clone().with_orientation(orientation);
            self.remount_outer(config);
            return;
        }

        // F: flip the outer panes
        if *key == Key::Character("f".into()) {
            let flipped = !self.config.split.flipped;
            let config = self.config.split.clone().with_flipped(flipped);
            self.remount_outer(config);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("split-demo")
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(
            Arc::clone(&window),
            BACKGROUND.to_array(),
        )) {
            Ok(renderer) => renderer,
            Err(e) => {
                tracing::error!("Failed to create renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.scale_factor = window.scale_factor();
        let physical_size = window.inner_size();
        tracing::info!(
            "Window created: {}x{} physical pixels, scale factor: {}",
            physical_size.width,
            physical_size.height,
            self.scale_factor
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.measure_outer(Instant::now());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
                self.measure_outer(Instant::now());
                self.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
                self.measure_outer(Instant::now());
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor);
                self.mouse_pos = Point::new(logical.x, logical.y);

                if let Some(target) = self.dragging {
                    let now = Instant::now();
                    let pos = self.mouse_pos;
                    let moved = self.pane(target).is_some_and(|pane| pane.on_move(pos, now));
                    if moved {
                        if target == Target::Outer {
                            self.measure_inner(now);
                        }
                        self.request_redraw();
                    }
                } else {
                    self.update_hover();
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let target = Scene::arrange(&self.outer, self.inner.as_ref()).and_then(
                        |scene| scene.divider_at(self.mouse_pos.x, self.mouse_pos.y, DIVIDER_SLOP),
                    );
                    if let Some(target) = target {
                        if let Some(pane) = self.pane(target) {
                            pane.on_grant();
                            self.dragging = Some(target);
                            self.request_redraw();
                        }
                    }
                }
                ElementState::Released => {
                    if let Some(target) = self.dragging.take() {
                        if let Some(pane) = self.pane(target) {
                            pane.on_release();
                        }
                        self.request_redraw();
                    }
                }
            },
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    self.handle_key(&event.logical_key);
                    self.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        let outer = self.outer.tick(now);
        if outer.layout_changed {
            self.measure_inner(now);
        }
        let inner = self
            .inner
            .as_mut()
            .map(|pane| pane.tick(now))
            .unwrap_or_default();

        if outer.needs_redraw() || inner.needs_redraw() {
            self.request_redraw();
        }

        let deadline = [
            self.outer.next_deadline(),
            self.inner.as_ref().and_then(|pane| pane.next_deadline()),
        ]
        .into_iter()
        .flatten()
        .min();

        match deadline {
            Some(at) => event_loop.set_control_flow(ControlFlow::WaitUntil(at)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting split-demo");

    let event_loop = EventLoop::new()?;
    let mut app = App::new();

    event_loop.run_app(&mut app)?;

    Ok(())
}
