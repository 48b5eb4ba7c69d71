//! Platform layer: native window, input events and the frame loop
//!
//! winit owns the event loop. Each redraw converts elapsed wall time into
//! fixed simulation ticks (see `game`), draws the match and presents it
//! through WebGPU.

pub mod game;
pub mod keymap;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Fullscreen, Window, WindowId};

pub use game::{FrameRequests, Game};
pub use keymap::map_key;

use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::renderer::RenderState;
use crate::settings::Settings;
use crate::sim::GameRng;

pub const WINDOW_TITLE: &str = "Pong!";

struct App {
    settings: Settings,
    game: Game,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    last_frame: Option<Instant>,
    /// Fatal error that ended the event loop
    error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        log::info!("Match seed: {}", rng.seed());

        Self {
            settings,
            game: Game::new(rng),
            window: None,
            render_state: None,
            last_frame: None,
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let (width, height) = self.settings.window_size();
        let mut attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height))
            .with_min_inner_size(LogicalSize::new(BOARD_WIDTH, BOARD_HEIGHT));
        if self.settings.start_fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("create window")?,
        );
        let render_state =
            pollster::block_on(init_renderer(window.clone(), self.settings.vsync))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(key) = map_key(code) else {
            return;
        };
        match event.state {
            ElementState::Pressed => self.game.keys.press(key),
            ElementState::Released => self.game.keys.release(key),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        let requests = self.game.update(dt);
        if requests.toggle_fullscreen {
            if let Some(window) = &self.window {
                toggle_fullscreen(window);
            }
        }

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        match render_state.render(self.game.draw()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = render_state.size;
                render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("GPU out of memory"));
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Closing after {} ticks", self.game.ticks());
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.game.keys.release_all(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

async fn init_renderer(window: Arc<Window>, vsync: bool) -> anyhow::Result<RenderState> {
    let instance = wgpu::Instance::default();
    let surface = instance
        .create_surface(window.clone())
        .context("create wgpu surface")?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .context("request adapter")?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let size = window.inner_size();
    RenderState::new(surface, &adapter, size.width, size.height, vsync).await
}

fn toggle_fullscreen(window: &Window) {
    if window.fullscreen().is_some() {
        window.set_fullscreen(None);
        log::info!("Fullscreen off");
    } else {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        log::info!("Fullscreen on");
    }
}

/// Open the window and run until it is closed or the driver fails
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app).context("event loop")?;

    match app.error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
