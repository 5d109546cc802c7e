use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use virtual_cam::camera::Camera;
use virtual_cam::cli::Cli;
use virtual_cam::config::ViewerConfig;
use virtual_cam::core::{Clock, FpsCounter, WinitController};
use virtual_cam::input::CameraInputMapper;
use virtual_cam::renderer::Renderer;
use virtual_cam::scenes::SceneKind;

const FPS_LOG_INTERVAL: f32 = 1.0;

struct App {
    config: ViewerConfig,
    initial_scene: SceneKind,
    show_panel: bool,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    mapper: CameraInputMapper,
    controller: WinitController,
    clock: Clock,
    fps: FpsCounter,
    fps_log_timer: f32,
}

impl App {
    fn new(config: ViewerConfig, cli: &Cli) -> Self {
        Self {
            camera: Camera::new(&config.camera),
            mapper: CameraInputMapper::new(&config.controls),
            initial_scene: cli.scene,
            show_panel: !cli.no_ui,
            config,
            window: None,
            renderer: None,
            controller: WinitController::new(),
            clock: Clock::new(),
            fps: FpsCounter::new(),
            fps_log_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.fps.record(delta);
        self.fps_log_timer += delta;

        if self.fps_log_timer >= FPS_LOG_INTERVAL {
            log::debug!("FPS: {:.1}", self.fps.fps());
            self.fps_log_timer = 0.0;
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_none() {
            return;
        }

        let delta = self.clock.tick();
        self.update_fps(delta);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let input = self.controller.snapshot();
        self.mapper
            .update(&mut self.camera, &input, delta, renderer.wants_keyboard());
        self.controller.reset_deltas();

        let size = renderer.size();
        if size.width == 0 || size.height == 0 {
            return;
        }

        match renderer.render(&mut self.camera, window, self.fps.fps()) {
            Ok(actions) => {
                if let Some(scene) = actions.scene {
                    renderer.set_scene(scene);
                }
                if actions.reset {
                    self.camera.reset();
                    log::info!("Camera reset to defaults");
                }
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_config = &self.config.window;
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(window_config.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    window_config.width,
                    window_config.height,
                ))
                .with_min_inner_size(winit::dpi::LogicalSize::new(
                    window_config.min_width,
                    window_config.min_height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(
            window.clone(),
            self.initial_scene,
            self.show_panel,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.clock.reset();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // egui sees every event first. Key state is still tracked here so
        // releases are never lost while the overlay has focus
        let consumed = match (&mut self.renderer, &self.window) {
            (Some(renderer), Some(window)) => renderer.handle_event(window, &event),
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } if !consumed => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::MouseWheel { .. } if consumed => {}
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => self.controller.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ViewerConfig::load_or_default(cli.config.as_deref())?;
    log::info!("Starting with scene '{}'", cli.scene.name());

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config, &cli);

    log::info!(
        "Controls: WASD/Space/Shift move, arrows yaw/pitch, Q/E roll, +/- or wheel zoom, Escape quits"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
