//! Deterministic simulation module
//!
//! Everything that moves or changes color lives here. This module must stay
//! pure and deterministic:
//! - One step per loop iteration, no wall-clock time
//! - No randomness
//! - No rendering or platform dependencies

pub mod state;
pub mod step;
pub mod visual;

pub use state::{Bounds, Rgb, SimulationState};
pub use step::{StepOutcome, WallHits, step};
pub use visual::{VisualPolicy, apply_visual_response};

/// Advance the simulation one frame: physics, then the matching visual policy.
///
/// Visibility and containment are settled against the half-size the frame
/// will be drawn with.
pub fn advance(state: &mut SimulationState) -> StepOutcome {
    let outcome = step(state);
    apply_visual_response(state, outcome);
    state.settle();
    outcome
}
