use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::{
    config::ViewerConfig,
    context::SceneContext,
    control::CameraControl,
    error::{CubeCamError, Result},
    frame::{CancelToken, FrameLoop, FrameStatus},
    gfx::RenderEngine,
    ui::{zoom_panel, UiManager},
};

/// The cube viewer: owns the event loop and everything the handlers touch.
pub struct CubeCamApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    context: SceneContext,
    control: CameraControl,
    frame_loop: FrameLoop,
    error: Option<CubeCamError>,
}

impl CubeCamApp {
    /// Validates `config` and builds the scene. The window and GPU resources
    /// are created once the event loop resumes.
    pub fn new(config: ViewerConfig) -> Result<Self> {
        config.validate()?;
        let event_loop = EventLoop::new()?;

        let context = SceneContext::from_config(&config);
        let control = CameraControl::new(config.control.clone(), config.viewport);

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                context,
                control,
                frame_loop: FrameLoop::new(),
                error: None,
            },
        })
    }

    /// Token that stops the frame loop and closes the window when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.app_state.frame_loop.cancel_token()
    }

    pub fn context(&self) -> &SceneContext {
        &self.app_state.context
    }

    /// Runs until the window closes or the frame loop is cancelled.
    pub fn run(mut self) -> Result<()> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop.run_app(&mut self.app_state)?;

        match self.app_state.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let viewport = self.config.viewport;
        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(LogicalSize::new(viewport.width, viewport.height))
            .with_resizable(self.config.window.resizable);

        let window = Arc::new(event_loop.create_window(attributes)?);
        let (width, height) = window.inner_size().into();

        let renderer = pollster::block_on(RenderEngine::new(window.clone(), width, height))?;

        self.context
            .scene
            .init_gpu_resources(renderer.device(), renderer.object_layout());
        self.context.resize(width, height);

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window,
        );

        log::info!("Window created: {width}x{height}");
        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: CubeCamError) {
        log::error!("{error}");
        self.error = Some(error);
        self.frame_loop.cancel_token().cancel();
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.is_cancelled() {
            event_loop.exit();
            return;
        }
        let (Some(window), Some(render_engine)) =
            (self.window.as_ref(), self.render_engine.as_mut())
        else {
            return;
        };

        let params = self.context.camera_params();
        let stats = self.frame_loop.stats();
        let scene_stats = self.context.scene.get_statistics();
        let clicked = self.ui_manager.as_mut().and_then(|ui_manager| {
            ui_manager.update_logic(window, |ui| zoom_panel(ui, &params, &stats, &scene_stats))
        });
        if let Some(direction) = clicked {
            self.control.on_button_click(&mut self.context, direction);
        }

        if self.frame_loop.tick(&mut self.context) == FrameStatus::Stopped {
            event_loop.exit();
            return;
        }
        self.context.scene.update_all_transforms(render_engine.queue());

        let overlay = self.ui_manager.as_mut().map(|ui_manager| {
            move |device: &wgpu::Device,
                  queue: &wgpu::Queue,
                  encoder: &mut wgpu::CommandEncoder,
                  view: &wgpu::TextureView| {
                ui_manager.render_display_only(device, queue, encoder, view);
            }
        });

        let camera = self.context.camera.uniform;
        if let Err(e) = render_engine.render(&self.context.scene, camera, overlay) {
            self.fail(event_loop, e);
        }
    }
}

/// Releases must reach the controls even when the UI holds the pointer,
/// otherwise a button released over the panel stays held.
fn is_release(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::MouseInput { state, .. } => *state == ElementState::Released,
        WindowEvent::KeyboardInput { event, .. } => event.state == ElementState::Released,
        _ => false,
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_graphics(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        if let Some(ui_manager) = self.ui_manager.as_mut() {
            if ui_manager.handle_input(&window, window_id, &event) && !is_release(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                log::info!("Close requested");
                self.frame_loop.cancel_token().cancel();
                event_loop.exit();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.set_size(width, height);
                }
                self.context.resize(width, height);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                self.control
                    .process_window_event(&mut self.context, &other, window.scale_factor());
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.is_cancelled() {
            event_loop.exit();
            return;
        }
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.context.scene.release_gpu_resources();
        self.ui_manager = None;
        self.render_engine = None;
        self.window = None;
        log::info!("Shut down after {} frames", self.frame_loop.stats().frame_count);
    }
}
