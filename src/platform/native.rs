//! Native backend: winit window, wgpu surface
//!
//! winit 0.30 is callback driven, so the window events are pumped with a zero
//! timeout and buffered. That turns the callback API into the poll API the
//! main loop wants.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowId},
};

use super::{Event, Key, MouseButton, PlatformError, WindowService};
use crate::consts::{INITIAL_HEIGHT, INITIAL_WIDTH, WINDOW_TITLE};
use crate::renderer::{Frame, RenderState};

/// How many pumps to wait for the window to appear at startup
const STARTUP_PUMPS: u32 = 200;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// winit-side handler: creates the window and buffers its events
#[derive(Default)]
struct Shell {
    window: Option<Arc<Window>>,
    window_id: Option<WindowId>,
    create_error: Option<String>,
    pending: VecDeque<Event>,
}

impl ApplicationHandler for Shell {
    fn resumed(&mut self, el: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT))
            .with_resizable(true);

        match el.create_window(attrs) {
            Ok(window) => {
                self.window_id = Some(window.id());
                self.window = Some(Arc::new(window));
            }
            Err(e) => self.create_error = Some(e.to_string()),
        }
    }

    fn window_event(&mut self, _el: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if Some(id) != self.window_id {
            return;
        }
        if let Some(event) = translate(event) {
            self.pending.push_back(event);
        }
    }
}

fn translate_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::Digit1) => Key::Digit1,
        _ => Key::Other,
    }
}

fn translate_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        _ => MouseButton::Other,
    }
}

/// Map a winit event onto ours; anything we don't observe is dropped
fn translate(event: WindowEvent) -> Option<Event> {
    match event {
        WindowEvent::Resized(size) => Some(Event::Resized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::CloseRequested => Some(Event::CloseRequested),
        WindowEvent::KeyboardInput { event, .. } => {
            let key = translate_key(event.physical_key);
            Some(match event.state {
                ElementState::Pressed => Event::KeyPressed(key),
                ElementState::Released => Event::KeyReleased(key),
            })
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let button = translate_button(button);
            Some(match state {
                ElementState::Pressed => Event::MousePressed(button),
                ElementState::Released => Event::MouseReleased(button),
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(Event::MouseMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        _ => None,
    }
}

/// A real window with a wgpu surface behind it
///
/// Field order is drop order: the surface goes before the window, and the
/// window before the event loop's display connection.
pub struct WinitDisplay {
    render: RenderState,
    window: Arc<Window>,
    shell: Shell,
    event_loop: EventLoop<()>,
    exited: bool,
}

impl WinitDisplay {
    /// Connect to the display server, open the window and set up rendering.
    ///
    /// Fails with `NoDisplay` when there is no display server to talk to and
    /// with `NoVisual` when no compatible GPU adapter/surface exists.
    pub fn open() -> Result<Self, PlatformError> {
        let mut event_loop =
            EventLoop::new().map_err(|e| PlatformError::NoDisplay(e.to_string()))?;
        let mut shell = Shell::default();

        // The window is created on the first resume
        for _ in 0..STARTUP_PUMPS {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut shell)
            {
                return Err(PlatformError::NoDisplay(format!(
                    "event loop exited during startup (code {code})"
                )));
            }
            if shell.window.is_some() || shell.create_error.is_some() {
                break;
            }
        }

        if let Some(err) = shell.create_error.take() {
            return Err(PlatformError::NoDisplay(err));
        }
        let Some(window) = shell.window.clone() else {
            return Err(PlatformError::NoDisplay("window was never created".into()));
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| PlatformError::NoVisual(e.to_string()))?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(|e| PlatformError::NoVisual(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
        ))?;

        log::info!("Window open at {}x{}", size.width, size.height);

        Ok(Self {
            render,
            window,
            shell,
            event_loop,
            exited: false,
        })
    }
}

impl WindowService for WinitDisplay {
    fn poll_event(&mut self) -> Option<Event> {
        if self.shell.pending.is_empty() && !self.exited {
            let status = self
                .event_loop
                .pump_app_events(Some(Duration::ZERO), &mut self.shell);
            if let PumpStatus::Exit(code) = status {
                log::warn!("Event loop exited (code {code})");
                self.exited = true;
                self.shell.pending.push_back(Event::CloseRequested);
            }
        }
        self.shell.pending.pop_front()
    }

    fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.render.resize(width, height);
    }

    fn draw(&mut self, frame: &Frame) {
        match self.render.draw(frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.size();
                self.render.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    fn present_frame(&mut self) {
        self.window.pre_present_notify();
        self.render.present();
    }
}
