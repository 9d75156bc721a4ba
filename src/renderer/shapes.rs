//! Shape generation and 2D projection

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Bounds;

/// Orthographic projection of window pixels onto clip space.
///
/// Window space has its origin at the bottom-left corner with y pointing up,
/// spanning `[0, width] x [0, height]`.
pub fn ortho_to_ndc(point: Vec2, bounds: Bounds) -> Vec2 {
    // A zero-sized window has nothing to project onto
    let extent = bounds.extent().max(Vec2::ONE);
    point / extent * 2.0 - Vec2::ONE
}

/// Filled axis-aligned square as two triangles (window space)
pub fn square(center: Vec2, half_size: f32, color: [f32; 4]) -> [Vertex; 6] {
    let min = center - Vec2::splat(half_size);
    let max = center + Vec2::splat(half_size);

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, min.y, color),
    ]
}
