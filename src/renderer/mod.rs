//! Rendering module
//!
//! `FrameBuilder` turns simulation state into a `Frame` (pure, testable);
//! `RenderState` draws a `Frame` with WebGPU.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, FrameBuilder};
pub use pipeline::RenderState;
pub use vertex::Vertex;
