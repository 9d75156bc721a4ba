//! Simulation state and core types
//!
//! A single `SimulationState` lives for the whole run. The main loop owns it
//! and is the only thing that mutates it.

use glam::Vec2;

use crate::consts::*;

/// Current drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Bounds as a float vector, for comparing against positions
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Whether a square of the given half-size still fits on both axes
    pub fn fits(&self, half_size: f32) -> bool {
        let extent = self.extent();
        extent.x - half_size > half_size && extent.y - half_size > half_size
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(INITIAL_WIDTH, INITIAL_HEIGHT)
    }
}

/// 8-bit color. Channels only move through saturating ops, so they can never
/// leave [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for the GPU (alpha always 1)
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        let (r, g, b) = INITIAL_COLOR;
        Self::new(r, g, b)
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Drawable area; changed only by resize events
    pub bounds: Bounds,
    /// Center of the square
    pub position: Vec2,
    /// Signed per-frame displacement
    pub velocity: Vec2,
    /// Half the side length, kept in [HALF_SIZE_MIN, HALF_SIZE_MAX]
    pub half_size: f32,
    pub color: Rgb,
    /// Frames since the last bounce, saturating at BOUNCE_STREAK_LIMIT
    pub bounce_streak: u32,
    /// False while the window is too small for the square
    pub visible: bool,
}

impl SimulationState {
    /// Startup state: square resting against the left wall, vertically centered
    pub fn new() -> Self {
        let bounds = Bounds::default();
        let (dx, dy) = INITIAL_VELOCITY;
        Self {
            bounds,
            position: Vec2::new(HALF_SIZE_INITIAL, bounds.height as f32 / 2.0),
            velocity: Vec2::new(dx, dy),
            half_size: HALF_SIZE_INITIAL,
            color: Rgb::default(),
            bounce_streak: 0,
            visible: true,
        }
    }

    /// Apply a window resize. Returns false if the size did not actually change.
    pub fn set_bounds(&mut self, width: u32, height: u32) -> bool {
        let bounds = Bounds::new(width, height);
        if bounds == self.bounds {
            return false;
        }
        self.bounds = bounds;
        true
    }

    /// Smallest and largest allowed center coordinates for the current size
    pub fn center_limits(&self) -> (Vec2, Vec2) {
        let low = Vec2::splat(self.half_size);
        let high = self.bounds.extent() - low;
        (low, high)
    }

    /// Re-check the square against its current size after it grew or shrank.
    /// A square that still fits is pulled back inside; this is not a bounce.
    pub fn settle(&mut self) {
        self.visible = self.bounds.fits(self.half_size);
        if self.visible {
            let (low, high) = self.center_limits();
            self.position = self.position.clamp(low, high);
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
