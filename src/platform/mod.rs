//! Platform abstraction layer
//!
//! The simulation never talks to a window directly. It goes through the
//! `WindowService` capability:
//! - Non-blocking event polling
//! - Surface size and resize handling
//! - Drawing and presenting frames
//!
//! `native` provides the real winit/wgpu backend; tests drive the loop with a
//! scripted stand-in.

pub mod native;

use thiserror::Error;

use crate::renderer::Frame;

pub use native::WinitDisplay;

/// Fatal startup failures. Nothing after startup can fail.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("cannot connect to display server: {0}")]
    NoDisplay(String),

    #[error("no appropriate visual found: {0}")]
    NoVisual(String),

    #[error("failed to create rendering device: {0}")]
    Device(String),
}

/// Keys the app cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Digit1,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Other,
}

/// Input and window notifications, already stripped of backend types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Resized { width: u32, height: u32 },
    KeyPressed(Key),
    KeyReleased(Key),
    MousePressed(MouseButton),
    MouseReleased(MouseButton),
    /// Cursor position in window pixels (origin top-left)
    MouseMoved { x: f32, y: f32 },
    /// Window manager close button
    CloseRequested,
}

impl Event {
    /// Whether this event asks the app to shut down
    pub fn is_quit_requested(&self) -> bool {
        matches!(self, Event::KeyPressed(Key::Escape) | Event::CloseRequested)
    }
}

/// What the main loop needs from a window
pub trait WindowService {
    /// Next pending event, if any. Never blocks.
    fn poll_event(&mut self) -> Option<Event>;

    /// Current drawable size in pixels
    fn size(&self) -> (u32, u32);

    /// Follow a resize: reconfigure the drawing surface
    fn resize(&mut self, width: u32, height: u32);

    /// Clear and draw one frame
    fn draw(&mut self, frame: &Frame);

    /// Show the frame drawn since the last present
    fn present_frame(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_events() {
        assert!(Event::KeyPressed(Key::Escape).is_quit_requested());
        assert!(Event::CloseRequested.is_quit_requested());
        assert!(!Event::KeyReleased(Key::Escape).is_quit_requested());
        assert!(!Event::KeyPressed(Key::Digit1).is_quit_requested());
        assert!(!Event::MousePressed(MouseButton::Left).is_quit_requested());
        assert!(!Event::Resized { width: 10, height: 10 }.is_quit_requested());
    }

    #[test]
    fn test_error_messages() {
        let err = PlatformError::NoDisplay("no DISPLAY".into());
        assert_eq!(err.to_string(), "cannot connect to display server: no DISPLAY");
        let err = PlatformError::NoVisual("no adapter".into());
        assert_eq!(err.to_string(), "no appropriate visual found: no adapter");
    }
}
