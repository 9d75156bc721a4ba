//! Visual response: color and size policy
//!
//! Frequent bouncing reddens and shrinks the square; calm stretches turn it
//! blue and let it grow back. Purely cosmetic and deterministic.

use super::state::SimulationState;
use super::step::StepOutcome;
use crate::consts::*;

/// Which way the square's look moves this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualPolicy {
    /// A wall was hit: redder, smaller
    Energize,
    /// No wall hit (including the sustained-idle case): bluer, bigger
    Calm,
}

impl From<StepOutcome> for VisualPolicy {
    fn from(outcome: StepOutcome) -> Self {
        match outcome {
            StepOutcome::Collision(_) => VisualPolicy::Energize,
            StepOutcome::NoCollision | StepOutcome::SustainedIdle => VisualPolicy::Calm,
        }
    }
}

impl VisualPolicy {
    /// Apply this policy's color and size change
    pub fn apply(self, state: &mut SimulationState) {
        let c = &mut state.color;
        match self {
            VisualPolicy::Energize => {
                c.r = c.r.saturating_add(BOUNCE_RED_GAIN);
                c.g = c.g.saturating_sub(COLOR_STEP);
                c.b = c.b.saturating_sub(COLOR_STEP);
                state.half_size = (state.half_size - HALF_SIZE_STEP).max(HALF_SIZE_MIN);
            }
            VisualPolicy::Calm => {
                c.r = c.r.saturating_sub(COLOR_STEP);
                c.g = c.g.saturating_sub(COLOR_STEP);
                c.b = c.b.saturating_add(COLOR_STEP);
                state.half_size = (state.half_size + HALF_SIZE_STEP).min(HALF_SIZE_MAX);
            }
        }
    }
}

/// Apply exactly one policy for this step's outcome
pub fn apply_visual_response(state: &mut SimulationState, outcome: StepOutcome) -> VisualPolicy {
    let policy = VisualPolicy::from(outcome);
    policy.apply(state);
    policy
}
