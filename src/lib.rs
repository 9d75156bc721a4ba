//! Bounce Square - a colored square bouncing inside a resizable window
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state, physics step, visual response)
//! - `renderer`: Frame building and the WebGPU draw pipeline
//! - `platform`: Window/event capability and its native winit backend
//! - `app`: The main loop tying the three together

pub mod app;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::{App, LoopSummary};
pub use platform::{Event, PlatformError, WindowService};
pub use sim::{SimulationState, StepOutcome};

/// Initial constants. There is no runtime configuration beyond these.
pub mod consts {
    use std::time::Duration;

    /// Window title bar text
    pub const WINDOW_TITLE: &str = "Bounce Square";
    /// Initial drawable width (pixels)
    pub const INITIAL_WIDTH: u32 = 400;
    /// Initial drawable height (pixels)
    pub const INITIAL_HEIGHT: u32 = 200;

    /// Square half-size at startup
    pub const HALF_SIZE_INITIAL: f32 = 20.0;
    /// Smallest half-size a bounce can shrink the square to
    pub const HALF_SIZE_MIN: f32 = 10.0;
    /// Largest half-size a calm stretch can grow the square to
    pub const HALF_SIZE_MAX: f32 = 100.0;
    /// Half-size change per step
    pub const HALF_SIZE_STEP: f32 = 5.0;

    /// Per-frame displacement at startup
    pub const INITIAL_VELOCITY: (f32, f32) = (25.0, 10.0);

    /// Starting tint (r, g, b)
    pub const INITIAL_COLOR: (u8, u8, u8) = (160, 150, 220);
    /// Red gained on a bounce
    pub const BOUNCE_RED_GAIN: u8 = 100;
    /// Amount every other color step moves a channel
    pub const COLOR_STEP: u8 = 20;

    /// Frames without a bounce before the streak timer saturates
    pub const BOUNCE_STREAK_LIMIT: u32 = 10;

    /// CPU-yielding pause between loop iterations
    pub const FRAME_SLEEP: Duration = Duration::from_micros(200);

    /// Background clear color (linear RGBA)
    pub const CLEAR_COLOR: [f64; 4] = [0.1, 0.1, 0.1, 1.0];
}
