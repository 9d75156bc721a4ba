//! Render step: turn simulation state into a frame's draw list

use super::shapes::square;
use super::vertex::Vertex;
use crate::consts::CLEAR_COLOR;
use crate::sim::{Bounds, SimulationState};

/// Everything the display needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Background color, always applied
    pub clear: [f64; 4],
    /// Triangles in window pixel space
    pub vertices: Vec<Vertex>,
    /// Orthographic projection extent
    pub projection: Bounds,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices mapped to clip space for upload
    pub fn ndc_vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .map(|v| v.projected(self.projection))
            .collect()
    }
}

/// Builds frames and counts the ones that actually drew the square
#[derive(Debug, Default)]
pub struct FrameBuilder {
    frames_drawn: u64,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames in which the square was emitted (telemetry only)
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn render(&mut self, state: &SimulationState) -> Frame {
        let mut frame = Frame {
            clear: CLEAR_COLOR,
            vertices: Vec::new(),
            projection: state.bounds,
        };

        if state.visible {
            frame.vertices.extend_from_slice(&square(
                state.position,
                state.half_size,
                state.color.to_f32(),
            ));
            self.frames_drawn += 1;
        }

        frame
    }
}
