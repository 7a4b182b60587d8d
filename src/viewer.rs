//! Native viewer shell: window lifecycle, orbit input, the per-frame loop
//! and load completion handling.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use anyhow::{Context, Result};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::camera::OrbitCamera;
use crate::loader::{self, LoadOutcome, LoadedModel};
use crate::registry::ModelRegistry;
use crate::renderer::Renderer;
use crate::scene::{Scene, SceneModel, Transform};
use crate::settings::Settings;
use crate::ui;

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

struct Viewer {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Scene,
    camera: OrbitCamera,
    settings: Settings,
    registry: ModelRegistry,
    asset_root: PathBuf,
    load_tx: Sender<LoadOutcome>,
    load_rx: Receiver<LoadOutcome>,
    dragging: bool,
    cursor: Option<(f64, f64)>,
}

impl Viewer {
    fn new(asset_root: PathBuf, registry: ModelRegistry) -> Self {
        let settings = Settings::new(registry.default_entry().name.clone());
        let (load_tx, load_rx) = channel();
        Self {
            window: None,
            renderer: None,
            scene: Scene::new(),
            camera: OrbitCamera::new(),
            settings,
            registry,
            asset_root,
            load_tx,
            load_rx,
            dragging: false,
            cursor: None,
        }
    }

    fn request_load(&self, name: &str) {
        match self.registry.get(name) {
            Some(entry) => loader::spawn_load(
                self.asset_root.clone(),
                entry.clone(),
                self.load_tx.clone(),
            ),
            // The dropdown only offers registry names, so this is unreachable
            // through the UI.
            None => log::error!("unknown model '{}'", name),
        }
    }

    /// Drain completed loads. When overlapping loads race, the last one to
    /// arrive here wins the panel target; every model stays in the scene.
    fn poll_loads(&mut self) {
        while let Ok(outcome) = self.load_rx.try_recv() {
            match outcome {
                Ok(loaded) => self.attach_model(loaded),
                Err(e) => log::error!("model load failed: {e:#}"),
            }
        }
    }

    fn attach_model(&mut self, loaded: LoadedModel) {
        let preset = loaded.entry.alignment;
        let model = SceneModel {
            name: loaded.entry.name.clone(),
            mesh: loaded.mesh,
            transform: Transform::default(),
        };
        log::info!(
            "loaded model '{}': {} vertices, {} triangles",
            model.name,
            model.mesh.vertices.len(),
            model.mesh.indices.len() / 3
        );

        // The scene list and the renderer's GPU list pair by index, so a
        // model never enters one without the other.
        let Some(renderer) = self.renderer.as_mut() else {
            log::warn!("dropping loaded model '{}': renderer not ready", model.name);
            return;
        };
        renderer.upload_model(&model);
        self.scene.add_model(model);

        // Alignment runs only after the model is attached, then the sliders
        // resync with wherever it ended up.
        if let Some(target) = self.scene.last_loaded_mut() {
            preset.apply(&mut target.transform);
            let placed = target.transform;
            self.settings.sync_from(&placed);
        }
        if let Some(distance) = preset.camera_distance {
            self.camera.set_distance(distance);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_loads();
        self.camera.update();

        let (Some(renderer), Some(window)) = (self.renderer.as_mut(), self.window.clone()) else {
            return;
        };

        let raw_input = renderer.take_egui_input(&window);
        let ctx = renderer.egui_context();
        let mut ui_response = ui::UiResponse::default();
        let full_output = ctx.run(raw_input, |ctx| {
            ui_response = ui::draw(ctx, &mut self.settings, &mut self.scene, &self.registry);
        });

        match renderer.render(&window, &self.scene, &self.camera, full_output) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = window.inner_size();
                renderer.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("surface error: {e}"),
        }

        if ui_response.load_requested {
            let selected = self.settings.model.clone();
            self.request_load(&selected);
        }
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("OBJ Viewer")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);

        // Like the original page, load the default model right away.
        let default = self.registry.default_entry().name.clone();
        self.request_load(&default);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (self.renderer.as_mut(), self.window.as_ref()) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = state.is_pressed();
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some((last_x, last_y)) = self.cursor {
                    if self.dragging {
                        self.camera
                            .rotate((position.x - last_x) as f32, (position.y - last_y) as f32);
                    }
                }
                self.cursor = Some((position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                };
                self.camera.zoom(steps);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Continuous redraw, the native stand-in for requestAnimationFrame.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

pub fn run(asset_root: PathBuf) -> Result<()> {
    let registry =
        ModelRegistry::for_asset_root(&asset_root).context("failed to build model registry")?;
    log::info!(
        "serving models from {}: {:?}",
        asset_root.display(),
        registry.names()
    );

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut viewer = Viewer::new(asset_root, registry);
    event_loop.run_app(&mut viewer)?;
    Ok(())
}
