//! Physics step
//!
//! Moves the square one frame, reflects it off the window edges and reports
//! what happened so the visual response can pick its policy.

use super::state::SimulationState;
use crate::consts::BOUNCE_STREAK_LIMIT;

/// Which walls the square touched this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.bottom || self.top
    }

    pub fn count(&self) -> u32 {
        [self.left, self.right, self.bottom, self.top]
            .into_iter()
            .filter(|&hit| hit)
            .count() as u32
    }
}

/// Result of a physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Free flight, streak still counting up
    NoCollision,
    /// At least one wall was hit; the streak timer was reset
    Collision(WallHits),
    /// No wall hit and the streak timer is pinned at its limit
    SustainedIdle,
}

impl StepOutcome {
    pub fn is_collision(&self) -> bool {
        matches!(self, StepOutcome::Collision(_))
    }
}

/// Clamp to `limit`, flip the velocity component
fn reflect(pos: &mut f32, vel: &mut f32, limit: f32) {
    *pos = limit;
    *vel = -*vel;
}

/// Advance the square by one frame
///
/// All four wall checks run every step against the half-size the step started
/// with. When the window is narrower than the square both sides of an axis
/// fire; the low-side clamp runs last and wins.
pub fn step(state: &mut SimulationState) -> StepOutcome {
    state.position += state.velocity;
    state.bounce_streak = state.bounce_streak.saturating_add(1);

    let (low, high) = state.center_limits();
    let mut hits = WallHits::default();

    if state.position.x >= high.x {
        reflect(&mut state.position.x, &mut state.velocity.x, high.x);
        hits.right = true;
    }
    if state.position.x <= low.x {
        reflect(&mut state.position.x, &mut state.velocity.x, low.x);
        hits.left = true;
    }
    if state.position.y >= high.y {
        reflect(&mut state.position.y, &mut state.velocity.y, high.y);
        hits.top = true;
    }
    if state.position.y <= low.y {
        reflect(&mut state.position.y, &mut state.velocity.y, low.y);
        hits.bottom = true;
    }

    if hits.any() {
        state.bounce_streak = 0;
    }

    let sustained = state.bounce_streak > BOUNCE_STREAK_LIMIT;
    if sustained {
        state.bounce_streak = BOUNCE_STREAK_LIMIT;
    }

    state.visible = state.bounds.fits(state.half_size);

    if hits.any() {
        StepOutcome::Collision(hits)
    } else if sustained {
        StepOutcome::SustainedIdle
    } else {
        StepOutcome::NoCollision
    }
}
