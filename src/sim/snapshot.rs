//! Read-only view of a game for drawing

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{GameState, GameStatus};
use crate::tuning::Tuning;

/// Both segments of one obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleRects {
    pub top: Rect,
    pub bottom: Rect,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub actor: Rect,
    /// Left-to-right
    pub obstacles: Vec<ObstacleRects>,
    pub score: u64,
    pub status: GameStatus,
    /// Top of the ground strip
    pub ground_y: f32,
}

impl Snapshot {
    pub fn capture(state: &GameState, tuning: &Tuning) -> Self {
        let playfield = tuning.playfield_height();
        Self {
            actor: state.actor.rect(tuning),
            obstacles: state
                .obstacles
                .iter()
                .map(|pair| ObstacleRects {
                    top: pair.top_rect(),
                    bottom: pair.bottom_rect(playfield),
                })
                .collect(),
            score: state.score,
            status: state.status,
            ground_y: playfield,
        }
    }
}
