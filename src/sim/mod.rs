//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform concerns:
//! - Fixed timestep only
//! - Randomness only through a `GapSource`
//! - Obstacles kept in spawn (left-to-right) order

pub mod autopilot;
pub mod collision;
pub mod gaps;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::check_collision;
pub use gaps::{GapSource, ScriptedGaps, SeededGaps};
pub use rect::Rect;
pub use snapshot::{ObstacleRects, Snapshot};
pub use state::{Actor, CrashCause, GameEvent, GameState, GameStatus, ObstaclePair};
pub use tick::Game;
