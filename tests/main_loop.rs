use std::collections::VecDeque;
use std::time::Duration;

use bounce_square::platform::{Event, Key, MouseButton, WindowService};
use bounce_square::renderer::Frame;
use bounce_square::sim::{Bounds, Rgb};
use bounce_square::App;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Call {
    Poll(Option<Event>),
    Resize(u32, u32),
    Draw,
    Present,
}

/// Headless window: hands out one batch of events per loop iteration and
/// records everything the app asks of it.
struct ScriptedDisplay {
    size: (u32, u32),
    batches: VecDeque<Vec<Event>>,
    current: Option<VecDeque<Event>>,
    calls: Vec<Call>,
    frames: Vec<Frame>,
}

impl ScriptedDisplay {
    fn new(batches: Vec<Vec<Event>>) -> Self {
        Self {
            size: (400, 200),
            batches: batches.into(),
            current: None,
            calls: Vec::new(),
            frames: Vec::new(),
        }
    }
}

impl WindowService for ScriptedDisplay {
    fn poll_event(&mut self) -> Option<Event> {
        let batches = &mut self.batches;
        let current = self.current.get_or_insert_with(|| {
            // Out of script: ask to quit so a broken loop can't spin forever
            batches
                .pop_front()
                .unwrap_or_else(|| vec![Event::KeyPressed(Key::Escape)])
                .into()
        });
        let event = current.pop_front();
        self.calls.push(Call::Poll(event));
        event
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.calls.push(Call::Resize(width, height));
    }

    fn draw(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
        self.calls.push(Call::Draw);
    }

    fn present_frame(&mut self) {
        self.current = None;
        self.calls.push(Call::Present);
    }
}

#[test]
fn test_resize_hide_and_quit() {
    let mut display = ScriptedDisplay::new(vec![
        vec![],
        vec![Event::Resized {
            width: 400,
            height: 30,
        }],
        vec![Event::Resized {
            width: 400,
            height: 200,
        }],
        vec![Event::KeyPressed(Key::Escape)],
    ]);

    let summary = App::new()
        .with_frame_sleep(Duration::ZERO)
        .run(&mut display);

    assert_eq!(summary.iterations, 4);
    assert_eq!(summary.frames_drawn, 3);
    assert_eq!(summary.bounces, 1);

    let frames = &display.frames;
    assert_eq!(frames.len(), 4);

    // First frame: one calm step from the defaults
    assert_eq!(frames[0].vertices.len(), 6);
    assert_eq!(frames[0].vertices[0].color, Rgb::new(140, 130, 240).to_f32());
    assert_eq!(frames[0].projection, Bounds::new(400, 200));

    // Window too short for the square: nothing drawn, background still cleared
    assert!(frames[1].is_empty());
    assert_eq!(frames[1].projection, Bounds::new(400, 30));

    // Grown back: visible again
    assert_eq!(frames[2].vertices.len(), 6);
    assert_eq!(frames[2].projection, Bounds::new(400, 200));

    // The quitting iteration still finished
    assert_eq!(frames[3].vertices.len(), 6);
    assert_eq!(display.calls.last(), Some(&Call::Present));
}

#[test]
fn test_iteration_order() {
    let mut display = ScriptedDisplay::new(vec![vec![
        Event::MouseMoved { x: 10.0, y: 10.0 },
        Event::Resized {
            width: 300,
            height: 300,
        },
        Event::KeyPressed(Key::Escape),
    ]]);

    App::new()
        .with_frame_sleep(Duration::ZERO)
        .run(&mut display);

    let moved = Event::MouseMoved { x: 10.0, y: 10.0 };
    let resized = Event::Resized {
        width: 300,
        height: 300,
    };
    let escape = Event::KeyPressed(Key::Escape);
    assert_eq!(
        display.calls,
        vec![
            Call::Poll(Some(moved)),
            Call::Poll(Some(resized)),
            Call::Resize(300, 300),
            Call::Poll(Some(escape)),
            Call::Poll(None),
            Call::Draw,
            Call::Present,
        ]
    );
}

#[test]
fn test_pointer_and_digit_one_do_not_touch_simulation() {
    let noise = vec![
        Event::MousePressed(MouseButton::Left),
        Event::MouseMoved { x: 5.0, y: 6.0 },
        Event::MouseReleased(MouseButton::Left),
        Event::MousePressed(MouseButton::Right),
        Event::KeyPressed(Key::Digit1),
        Event::KeyReleased(Key::Digit1),
        Event::KeyPressed(Key::Other),
    ];

    let mut noisy = ScriptedDisplay::new(vec![noise.clone(), noise, vec![]]);
    let mut quiet = ScriptedDisplay::new(vec![vec![], vec![], vec![]]);

    let a = App::new().with_frame_sleep(Duration::ZERO).run(&mut noisy);
    let b = App::new().with_frame_sleep(Duration::ZERO).run(&mut quiet);

    assert_eq!(a, b);
    assert_eq!(noisy.frames, quiet.frames);
}

#[test]
fn test_close_request_quits() {
    let mut display = ScriptedDisplay::new(vec![vec![], vec![Event::CloseRequested]]);
    let summary = App::new()
        .with_frame_sleep(Duration::ZERO)
        .run(&mut display);
    assert_eq!(summary.iterations, 2);
}

#[test]
fn test_startup_syncs_to_actual_window_size() {
    let mut display = ScriptedDisplay::new(vec![vec![Event::KeyPressed(Key::Escape)]]);
    display.size = (800, 600);

    App::new()
        .with_frame_sleep(Duration::ZERO)
        .run(&mut display);

    assert_eq!(display.calls[0], Call::Resize(800, 600));
    assert_eq!(display.frames[0].projection, Bounds::new(800, 600));
}
