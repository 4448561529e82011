//! Slope Walker Demo
//!
//! Opens a window on the demo course and lets you walk the box around.
//!
//! Run with: `cargo run --bin walker_demo [config.json]`
//!
//! Controls:
//! - WASD: walk relative to the camera
//! - Space: jump
//! - Arrow keys: orbit the camera
//! - Page Up / Page Down: zoom (also moves the fog)
//! - ESC: exit
//!
//! Logging is controlled by `RUST_LOG` (default `slope_walker=info`).

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use slope_walker_engine::game::config::{ConfigError, WalkerConfig};
use slope_walker_engine::game::render::WalkerRenderer;
use slope_walker_engine::game::scenes::{WalkerSimulation, build_course};
use slope_walker_engine::input::{KeyCode, KeyboardState};
use slope_walker_engine::render::{GpuContext, GpuContextConfig, GpuError};

const WINDOW_TITLE: &str = "Slope Walker";

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "slope_walker=info,walker_demo=info";

/// Everything that can stop the demo.
#[derive(Debug)]
enum DemoError {
    Config(ConfigError),
    Gpu(GpuError),
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoError::Config(e) => write!(f, "config: {e}"),
            DemoError::Gpu(e) => write!(f, "gpu: {e}"),
            DemoError::EventLoop(e) => write!(f, "event loop: {e}"),
            DemoError::Window(e) => write!(f, "window: {e}"),
        }
    }
}

impl std::error::Error for DemoError {}

impl From<ConfigError> for DemoError {
    fn from(e: ConfigError) -> Self {
        DemoError::Config(e)
    }
}

impl From<GpuError> for DemoError {
    fn from(e: GpuError) -> Self {
        DemoError::Gpu(e)
    }
}

impl From<winit::error::EventLoopError> for DemoError {
    fn from(e: winit::error::EventLoopError) -> Self {
        DemoError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for DemoError {
    fn from(e: winit::error::OsError) -> Self {
        DemoError::Window(e)
    }
}

/// Translate a winit key into the engine's key code.
fn map_key(key: WinitKeyCode) -> KeyCode {
    match key {
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
        WinitKeyCode::PageUp => KeyCode::PageUp,
        WinitKeyCode::PageDown => KeyCode::PageDown,
        WinitKeyCode::Escape => KeyCode::Escape,
        WinitKeyCode::Enter => KeyCode::Enter,
        _ => KeyCode::Unknown,
    }
}

struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: WalkerRenderer,
    sim: WalkerSimulation,
    keyboard: KeyboardState,
    last_frame: Instant,
    fps_timer: Instant,
    frames_since_fps: u32,
}

impl AppState {
    fn new(window: Arc<Window>, config: &WalkerConfig) -> Result<Self, DemoError> {
        let gpu = GpuContext::new(
            Arc::clone(&window),
            GpuContextConfig {
                vsync: config.render.vsync,
                ..Default::default()
            },
        )?;

        let course = build_course(&config.scene, config.render.clear_color);
        let renderer = WalkerRenderer::new(&gpu, &course, &config.render);
        let sim = WalkerSimulation::new(config, course);

        let now = Instant::now();
        Ok(Self {
            window,
            gpu,
            renderer,
            sim,
            keyboard: KeyboardState::new(),
            last_frame: now,
            fps_timer: now,
            frames_since_fps: 0,
        })
    }

    fn update(&mut self) {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.sim.tick(delta_time, Some(&self.keyboard));

        self.frames_since_fps += 1;
        let elapsed = now.duration_since(self.fps_timer).as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frames_since_fps as f32 / elapsed;
            let p = self.sim.player().position;
            self.window.set_title(&format!(
                "{WINDOW_TITLE} | {fps:.0} FPS | ({:.1}, {:.1}, {:.1})",
                p.x, p.y, p.z
            ));
            self.frames_since_fps = 0;
            self.fps_timer = now;
        }
    }
}

struct App {
    config: WalkerConfig,
    state: Option<AppState>,
    error: Option<DemoError>,
}

impl App {
    fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            state: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: DemoError) {
        self.error = Some(e);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        match AppState::new(window, &self.config) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => return self.fail(event_loop, e),
        }

        info!("Controls: WASD walk, Space jump, arrows orbit, PageUp/PageDown zoom, ESC exit");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.gpu.resize(new_size.width, new_size.height);
            }
            WindowEvent::Focused(false) => {
                state.keyboard.reset();
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;

                if key == WinitKeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }

                state.keyboard.handle_key(map_key(key), pressed);
            }
            WindowEvent::RedrawRequested => {
                state.update();

                match state.renderer.render(&state.gpu, &state.sim) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.gpu.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("GPU out of memory, exiting");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => warn!(error = ?e, "render error"),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), DemoError> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => {
            let path = Path::new(&path);
            let config = WalkerConfig::load(path)?;
            info!(path = %path.display(), "config loaded");
            config
        }
        None => WalkerConfig::default(),
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "walker demo failed");
            ExitCode::FAILURE
        }
    }
}
