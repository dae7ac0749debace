//! Game tuning and validation
//!
//! Every physics and geometry constant the simulation reads lives here, so a
//! driver can override them from JSON without touching the sim code.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while building or validating a [`Tuning`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("jump velocity {0} must be negative (upward)")]
    JumpNotUpward(f32),

    #[error("ground height {ground} must be in [0, {height})")]
    GroundOutOfRange { ground: f32, height: f32 },

    #[error("gap height {gap} does not fit the {playfield} px playfield")]
    GapTooTall { gap: f32, playfield: f32 },

    #[error("no room to place a gap: margin {margin} leaves [{margin}, {max}) empty")]
    EmptySpawnRange { margin: f32, max: f32 },

    #[error("tick interval must be at least 1 ms")]
    ZeroTick,

    #[error("invalid tuning json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Physics and geometry constants for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Height of the ground strip at the bottom of the screen
    pub ground_height: f32,

    // === Actor ===
    /// Fixed horizontal slot of the actor's left edge
    pub actor_x: f32,
    /// Side length of the actor's square hitbox
    pub actor_size: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity a jump sets (negative = upward)
    pub jump_velocity: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_height: f32,
    /// Minimum height of the top segment
    pub gap_margin: f32,
    pub scroll_speed: f32,
    /// Distance the newest pair must travel from the right edge before the next spawns
    pub spawn_spacing: f32,

    // === Timing ===
    /// Driver cadence between ticks
    pub tick_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,

            actor_x: ACTOR_X,
            actor_size: ACTOR_SIZE,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,
            scroll_speed: SCROLL_SPEED,
            spawn_spacing: SPAWN_SPACING,

            tick_ms: TICK_MS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it.
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("actor_size", self.actor_size),
            ("gravity", self.gravity),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("scroll_speed", self.scroll_speed),
            ("spawn_spacing", self.spawn_spacing),
        ];
        for (field, value) in positive {
            // Written this way so NaN is rejected too
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let finite = [
            ("actor_x", self.actor_x),
            ("jump_velocity", self.jump_velocity),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if self.jump_velocity >= 0.0 {
            return Err(ConfigError::JumpNotUpward(self.jump_velocity));
        }

        if !(self.ground_height >= 0.0 && self.ground_height < self.screen_height) {
            return Err(ConfigError::GroundOutOfRange {
                ground: self.ground_height,
                height: self.screen_height,
            });
        }

        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }

        let playfield = self.playfield_height();
        if self.gap_height >= playfield {
            return Err(ConfigError::GapTooTall {
                gap: self.gap_height,
                playfield,
            });
        }

        let range = self.gap_top_range();
        if !(range.start >= 0.0 && range.start < range.end) {
            return Err(ConfigError::EmptySpawnRange {
                margin: self.gap_margin,
                max: range.end,
            });
        }

        Ok(())
    }

    /// Height above the ground strip
    #[inline]
    pub fn playfield_height(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Lowest actor `y` (top edge) that is still airborne.
    /// At or past this line the actor's bottom touches the ground.
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.playfield_height() - self.actor_size
    }

    /// Actor starting height (mid-screen)
    #[inline]
    pub fn start_y(&self) -> f32 {
        self.screen_height / 2.0
    }

    /// The newest pair must scroll left of this before another spawns
    #[inline]
    pub fn spawn_threshold(&self) -> f32 {
        self.screen_width - self.spawn_spacing
    }

    /// Half-open range a gap's top offset is drawn from
    pub fn gap_top_range(&self) -> Range<f32> {
        self.gap_margin..self.playfield_height() - self.gap_height
    }

    /// Upper bound on simultaneously live obstacle pairs
    pub fn max_live_obstacles(&self) -> usize {
        ((self.screen_width + self.obstacle_width) / self.spawn_spacing).floor() as usize + 1
    }
}
