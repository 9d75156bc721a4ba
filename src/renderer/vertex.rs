//! GPU vertex layout

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::shapes::ortho_to_ndc;
use crate::sim::Bounds;

/// 2D vertex with position and RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Same vertex moved from window pixels into clip space
    pub fn projected(self, bounds: Bounds) -> Self {
        let ndc = ortho_to_ndc(Vec2::from_array(self.position), bounds);
        Self::new(ndc.x, ndc.y, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}
