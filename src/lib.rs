//! Gap Runner - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (physics, obstacles, collisions, game state)
//! - `platform`: Driver-side helpers (fixed-step clock, input mapping)
//! - `tuning`: Data-driven game constants

pub mod platform;
pub mod sim;
pub mod tuning;

pub use sim::{Game, GameStatus, Snapshot};
pub use tuning::{ConfigError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (50 Hz)
    pub const TICK_MS: u64 = 20;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Actor defaults (square sprite in a fixed column)
    pub const ACTOR_X: f32 = 100.0;
    pub const ACTOR_SIZE: f32 = 30.0;

    /// Downward velocity added every tick (pixels/tick²)
    pub const GRAVITY: f32 = 2.0;
    /// Velocity set by a jump (negative = upward, pixels/tick)
    pub const JUMP_VELOCITY: f32 = -20.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 200.0;
    /// Minimum height of the top segment above a gap
    pub const GAP_MARGIN: f32 = 200.0;
    /// Leftward scroll per tick (pixels)
    pub const SCROLL_SPEED: f32 = 5.0;
    /// A new pair spawns once the newest one is this far from the right edge
    pub const SPAWN_SPACING: f32 = 300.0;
}
