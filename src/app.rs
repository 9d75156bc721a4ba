//! Main loop
//!
//! One iteration: drain pending events, one physics step with its visual
//! response, build the frame, draw, present, then a short sleep. The `App`
//! owns the simulation state outright; nothing else mutates it.

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::FRAME_SLEEP;
use crate::platform::{Event, Key, MouseButton, WindowService};
use crate::renderer::FrameBuilder;
use crate::sim::{self, SimulationState, StepOutcome};

/// Frames in the FPS averaging window
const FPS_WINDOW: usize = 60;

/// Totals reported when the loop exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub iterations: u64,
    pub frames_drawn: u64,
    /// Iterations in which at least one wall was hit
    pub bounces: u64,
}

/// Remembers the last cursor position. Pointer input has no effect on the
/// simulation; this is only the hook for it.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn last_position(&self) -> Option<(f32, f32)> {
        self.last
    }

    pub fn observe(&mut self, event: &Event) {
        match *event {
            Event::MousePressed(MouseButton::Left) => log::debug!("Left button pressed"),
            Event::MousePressed(MouseButton::Right) => log::debug!("Right button pressed"),
            Event::MouseMoved { x, y } => {
                if self.last != Some((x, y)) {
                    self.last = Some((x, y));
                    log::trace!("Pointer at ({x}, {y})");
                }
            }
            _ => {}
        }
    }
}

/// Rolling FPS over the last `FPS_WINDOW` frames
#[derive(Debug)]
pub struct FrameStats {
    started: Instant,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            started: Instant::now(),
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FrameStats {
    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn record(&mut self) {
        let now = self.started.elapsed().as_secs_f64();
        self.frame_times[self.frame_index] = now;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 && now > oldest {
            self.fps = ((FPS_WINDOW - 1) as f64 / (now - oldest)).round() as u32;
        }
        if self.frame_index == 0 {
            log::debug!("{} fps", self.fps);
        }
    }
}

/// The application: simulation state plus per-loop bookkeeping
pub struct App {
    state: SimulationState,
    frames: FrameBuilder,
    pointer: PointerTracker,
    stats: FrameStats,
    frame_sleep: Duration,
    iterations: u64,
    bounces: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_state(SimulationState::new())
    }

    pub fn with_state(state: SimulationState) -> Self {
        Self {
            state,
            frames: FrameBuilder::new(),
            pointer: PointerTracker::default(),
            stats: FrameStats::default(),
            frame_sleep: FRAME_SLEEP,
            iterations: 0,
            bounces: 0,
        }
    }

    /// Override the pause between iterations
    pub fn with_frame_sleep(mut self, frame_sleep: Duration) -> Self {
        self.frame_sleep = frame_sleep;
        self
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn summary(&self) -> LoopSummary {
        LoopSummary {
            iterations: self.iterations,
            frames_drawn: self.frames.frames_drawn(),
            bounces: self.bounces,
        }
    }

    fn apply_resize<W: WindowService>(&mut self, display: &mut W, width: u32, height: u32) {
        if self.state.set_bounds(width, height) {
            log::info!("Resized to {width}x{height}");
            display.resize(width, height);
        }
    }

    /// Handle one event: resize, then pointer, then keys. Returns true if it
    /// asks the app to quit.
    pub fn handle_event<W: WindowService>(&mut self, display: &mut W, event: Event) -> bool {
        if let Event::Resized { width, height } = event {
            self.apply_resize(display, width, height);
        }

        self.pointer.observe(&event);

        match event {
            Event::KeyPressed(Key::Digit1) => log::debug!("Key 1 pressed"),
            Event::KeyPressed(Key::Escape) => log::info!("Escape pressed, quitting"),
            Event::CloseRequested => log::info!("Close requested, quitting"),
            _ => {}
        }

        event.is_quit_requested()
    }

    /// Run one loop iteration. Returns true once a quit was requested; the
    /// iteration still completes.
    pub fn iterate<W: WindowService>(&mut self, display: &mut W) -> bool {
        let mut quit = false;
        while let Some(event) = display.poll_event() {
            quit |= self.handle_event(display, event);
        }

        let outcome = sim::advance(&mut self.state);
        if let StepOutcome::Collision(hits) = outcome {
            self.bounces += 1;
            log::debug!(
                "Bounce ({} wall(s)): color {:?}, half-size {}",
                hits.count(),
                self.state.color,
                self.state.half_size
            );
        }

        let frame = self.frames.render(&self.state);
        display.draw(&frame);
        display.present_frame();

        self.stats.record();
        self.iterations += 1;

        quit
    }

    /// Loop until a quit is requested
    pub fn run<W: WindowService>(mut self, display: &mut W) -> LoopSummary {
        // The window may not have come up at the requested size
        let (width, height) = display.size();
        self.apply_resize(display, width, height);

        log::info!("Main loop running");
        loop {
            if self.iterate(display) {
                break;
            }
            if !self.frame_sleep.is_zero() {
                thread::sleep(self.frame_sleep);
            }
        }

        let summary = self.summary();
        log::info!(
            "Shutting down after {} iterations ({} frames drawn, {} bounces, last {} fps)",
            summary.iterations,
            summary.frames_drawn,
            summary.bounces,
            self.stats.fps()
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Frame;
    use std::collections::VecDeque;

    /// Window stand-in with a fixed event queue
    #[derive(Default)]
    struct QueueDisplay {
        events: VecDeque<Event>,
        resizes: Vec<(u32, u32)>,
        draws: usize,
        presents: usize,
    }

    impl WindowService for QueueDisplay {
        fn poll_event(&mut self) -> Option<Event> {
            self.events.pop_front()
        }
        fn size(&self) -> (u32, u32) {
            (400, 200)
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.resizes.push((width, height));
        }
        fn draw(&mut self, _frame: &Frame) {
            self.draws += 1;
        }
        fn present_frame(&mut self) {
            self.presents += 1;
        }
    }

    #[test]
    fn test_iteration_drains_events_then_steps_once() {
        let mut display = QueueDisplay::default();
        display.events.extend([
            Event::MouseMoved { x: 3.0, y: 4.0 },
            Event::KeyPressed(Key::Digit1),
            Event::MousePressed(MouseButton::Left),
        ]);
        let mut app = App::new();

        let quit = app.iterate(&mut display);

        assert!(!quit);
        assert!(display.events.is_empty());
        assert_eq!(app.state().position.x, 45.0);
        assert_eq!(app.pointer().last_position(), Some((3.0, 4.0)));
        assert_eq!((display.draws, display.presents), (1, 1));
        assert_eq!(app.summary().iterations, 1);
    }

    #[test]
    fn test_same_size_resize_is_ignored() {
        let mut display = QueueDisplay::default();
        display.events.extend([
            Event::Resized {
                width: 400,
                height: 200,
            },
            Event::Resized {
                width: 500,
                height: 300,
            },
        ]);
        let mut app = App::new();
        app.iterate(&mut display);
        assert_eq!(display.resizes, vec![(500, 300)]);
        assert_eq!(app.state().bounds.width, 500);
    }

    #[test]
    fn test_quit_is_sticky_within_a_batch() {
        let mut display = QueueDisplay::default();
        display.events.extend([
            Event::KeyPressed(Key::Escape),
            Event::KeyReleased(Key::Escape),
        ]);
        let mut app = App::new();
        assert!(app.iterate(&mut display));
        // The iteration still ran to completion
        assert_eq!(display.presents, 1);
    }

    #[test]
    fn test_pointer_ignores_repeat_position() {
        let mut pointer = PointerTracker::default();
        pointer.observe(&Event::MouseMoved { x: 1.0, y: 1.0 });
        pointer.observe(&Event::MouseReleased(MouseButton::Right));
        assert_eq!(pointer.last_position(), Some((1.0, 1.0)));
    }

    #[test]
    fn test_frame_stats_reports_once_window_is_full() {
        let mut stats = FrameStats::default();
        std::thread::sleep(std::time::Duration::from_millis(1));
        for _ in 0..FPS_WINDOW - 1 {
            stats.record();
        }
        assert_eq!(stats.fps(), 0);

        std::thread::sleep(std::time::Duration::from_millis(1));
        stats.record();
        assert!(stats.fps() > 0);
    }
}
