//! Collision detection
//!
//! The actor is a square hitbox in a fixed column. It crashes by overlapping
//! either segment of any obstacle pair, or by reaching the ground line.

use super::rect::Rect;
use super::state::{CrashCause, GameState, ObstaclePair};
use crate::tuning::Tuning;

/// Whether a hitbox overlaps either segment of a pair
#[inline]
pub fn hits_pair(hitbox: &Rect, pair: &ObstaclePair, playfield_height: f32) -> bool {
    hitbox.intersects(&pair.top_rect()) || hitbox.intersects(&pair.bottom_rect(playfield_height))
}

/// Whether an actor whose top edge is at `y` has reached the ground
#[inline]
pub fn on_ground(y: f32, tuning: &Tuning) -> bool {
    y >= tuning.ground_line()
}

/// Check the actor against every pair and the ground.
///
/// Returns the first cause found; pairs are checked before the ground and
/// checking stops at the first hit.
pub fn check_collision(state: &GameState, tuning: &Tuning) -> Option<CrashCause> {
    let hitbox = state.actor.rect(tuning);
    let playfield = tuning.playfield_height();

    if state
        .obstacles
        .iter()
        .any(|pair| hits_pair(&hitbox, pair, playfield))
    {
        return Some(CrashCause::Obstacle);
    }

    if on_ground(state.actor.y, tuning) {
        return Some(CrashCause::Ground);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(y: f32, obstacles: Vec<ObstaclePair>) -> (GameState, Tuning) {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.actor.y = y;
        state.obstacles = obstacles;
        (state, tuning)
    }

    #[test]
    fn test_clear_air() {
        let (state, tuning) = state_with(300.0, Vec::new());
        assert_eq!(check_collision(&state, &tuning), None);
    }

    #[test]
    fn test_hit_top_segment() {
        // Gap 250..450, actor 200..230 in the same column
        let pair = ObstaclePair::new(90.0, 250.0, 200.0, 60.0);
        let (state, tuning) = state_with(200.0, vec![pair]);
        assert_eq!(check_collision(&state, &tuning), Some(CrashCause::Obstacle));
    }

    #[test]
    fn test_hit_bottom_segment() {
        let pair = ObstaclePair::new(90.0, 250.0, 200.0, 60.0);
        let (state, tuning) = state_with(430.0, vec![pair]);
        assert_eq!(check_collision(&state, &tuning), Some(CrashCause::Obstacle));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let pair = ObstaclePair::new(90.0, 250.0, 200.0, 60.0);
        let (state, tuning) = state_with(300.0, vec![pair]);
        assert_eq!(check_collision(&state, &tuning), None);
    }

    #[test]
    fn test_touching_gap_edges_is_safe() {
        // Actor top flush with the top segment's bottom edge
        let pair = ObstaclePair::new(90.0, 250.0, 200.0, 60.0);
        let (state, tuning) = state_with(250.0, vec![pair]);
        assert_eq!(check_collision(&state, &tuning), None);

        // Actor bottom flush with the bottom segment's top edge
        let (state, tuning) = state_with(420.0, vec![pair]);
        assert_eq!(check_collision(&state, &tuning), None);
    }

    #[test]
    fn test_touching_column_edge_is_safe() {
        // Pair's right edge exactly at the actor's left edge (x = 100)
        let pair = ObstaclePair::new(40.0, 250.0, 200.0, 60.0);
        let (state, tuning) = state_with(100.0, vec![pair]);
        assert_eq!(check_collision(&state, &tuning), None);
    }

    #[test]
    fn test_ground_line() {
        let tuning = Tuning::default();
        assert!(!on_ground(tuning.ground_line() - 0.1, &tuning));
        assert!(on_ground(tuning.ground_line(), &tuning));

        let (state, tuning) = state_with(560.0, Vec::new());
        assert_eq!(check_collision(&state, &tuning), Some(CrashCause::Ground));
    }

    #[test]
    fn test_above_screen_is_not_a_crash() {
        let (state, tuning) = state_with(-500.0, Vec::new());
        assert_eq!(check_collision(&state, &tuning), None);
    }
}
