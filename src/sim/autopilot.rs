//! Demo-mode autopilot
//!
//! Flaps whenever the actor is falling and would sink into the bottom margin
//! of the gap it needs to pass next.

use super::state::{GameState, ObstaclePair};
use crate::tuning::Tuning;

/// Fraction of the gap height kept clear above the bottom segment
const BOTTOM_MARGIN: f32 = 0.1;

/// The pair the actor still has to clear: leftmost one whose right edge
/// has not passed the actor's left edge.
pub fn next_pair<'a>(state: &'a GameState, tuning: &Tuning) -> Option<&'a ObstaclePair> {
    state
        .obstacles
        .iter()
        .find(|pair| pair.right_edge() >= tuning.actor_x)
}

/// Whether a jump should be issued before the coming tick
pub fn wants_jump(state: &GameState, tuning: &Tuning) -> bool {
    if state.is_over() || state.actor.vel_y < 0.0 {
        return false;
    }

    let floor = next_pair(state, tuning)
        .map(|pair| pair.gap_bottom - tuning.gap_height * BOTTOM_MARGIN)
        .unwrap_or(tuning.playfield_height() - tuning.actor_size);

    // Where the actor's bottom edge lands after the next tick
    let next_vel = state.actor.vel_y + tuning.gravity;
    let next_bottom = state.actor.y + next_vel + tuning.actor_size;
    next_bottom >= floor
}
