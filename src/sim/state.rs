//! Game state and core simulation types
//!
//! Everything the stepper mutates lives in [`GameState`]. It holds no RNG or
//! tuning, so it can be cloned and compared freely.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Ticking, accepting jumps
    #[default]
    Active,
    /// Crashed; only a restart leaves this state
    Over,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Obstacle,
    Ground,
}

/// Things that happened during a tick, for effects in the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A pair entered at the right edge with its gap starting at `gap_top`
    Spawned { gap_top: f32 },
    /// A pair scrolled fully past the left edge
    Despawned,
    /// The run ended
    Crashed { cause: CrashCause },
}

/// The player-controlled falling entity. Its column is fixed by the tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top edge, screen space (down is positive)
    pub y: f32,
    /// Vertical velocity in pixels/tick (down is positive)
    pub vel_y: f32,
}

impl Actor {
    pub fn new(y: f32) -> Self {
        Self { y, vel_y: 0.0 }
    }

    /// Hitbox at the actor's fixed column
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::new(tuning.actor_x, self.y, tuning.actor_size, tuning.actor_size)
    }
}

/// A top and bottom obstacle sharing one column, with a gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Left edge
    pub x: f32,
    /// Bottom edge of the top segment
    pub gap_top: f32,
    /// Top edge of the bottom segment
    pub gap_bottom: f32,
    pub width: f32,
}

impl ObstaclePair {
    pub fn new(x: f32, gap_top: f32, gap_height: f32, width: f32) -> Self {
        Self {
            x,
            gap_top,
            gap_bottom: gap_top + gap_height,
            width,
        }
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Fully past the left screen edge
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() < 0.0
    }

    /// Segment hanging from the top of the screen down to the gap
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top)
    }

    /// Segment rising from the ground line up to the gap
    pub fn bottom_rect(&self, playfield_height: f32) -> Rect {
        Rect::new(
            self.x,
            self.gap_bottom,
            self.width,
            self.bottom_height(playfield_height),
        )
    }

    #[inline]
    pub fn bottom_height(&self, playfield_height: f32) -> f32 {
        playfield_height - self.gap_bottom
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub actor: Actor,
    /// Live pairs in spawn order, which is also left-to-right order
    pub obstacles: Vec<ObstaclePair>,
    /// Ticks survived this run
    pub score: u64,
    pub status: GameStatus,
    /// Ticks simulated this run, including the crash tick
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh run: actor mid-screen and at rest, no obstacles yet.
    /// The stepper seeds the first pair right after construction.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            actor: Actor::new(tuning.start_y()),
            obstacles: Vec::with_capacity(tuning.max_live_obstacles()),
            score: 0,
            status: GameStatus::Active,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Most recently spawned pair (rightmost)
    pub fn newest_obstacle(&self) -> Option<&ObstaclePair> {
        self.obstacles.last()
    }
}
