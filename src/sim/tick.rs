//! Fixed timestep simulation tick
//!
//! [`Game`] owns the state, the tuning and the gap source, and is the only
//! thing that mutates the state. A driver calls [`Game::tick`] at the fixed
//! cadence and forwards input through the command methods.

use super::collision::check_collision;
use super::gaps::{GapSource, SeededGaps};
use super::snapshot::Snapshot;
use super::state::{GameEvent, GameState, GameStatus, ObstaclePair};
use crate::platform::input::Input;
use crate::tuning::{ConfigError, Tuning};

/// A running game: state plus everything needed to advance it
#[derive(Debug, Clone)]
pub struct Game<G: GapSource = SeededGaps> {
    tuning: Tuning,
    state: GameState,
    gaps: G,
}

impl Game<SeededGaps> {
    /// New game with gaps seeded from system entropy
    pub fn from_entropy(tuning: Tuning) -> Result<Self, ConfigError> {
        let gaps = SeededGaps::from_entropy();
        log::info!("New game with seed {}", gaps.seed());
        Self::new(tuning, gaps)
    }

    /// New game with a fixed seed (replays a run)
    pub fn with_seed(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        Self::new(tuning, SeededGaps::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.gaps.seed()
    }
}

impl<G: GapSource> Game<G> {
    /// Validate the tuning and start a run with one obstacle pair seeded
    pub fn new(tuning: Tuning, gaps: G) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let state = GameState::new(&tuning);
        let mut game = Self {
            tuning,
            state,
            gaps,
        };
        game.spawn_obstacle();
        Ok(game)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Read-only view for drawing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.tuning)
    }

    /// Advance one fixed step. Does nothing once the run is over.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.is_over() {
            return events;
        }

        self.state.time_ticks += 1;

        // Gravity, then integrate
        self.state.actor.vel_y += self.tuning.gravity;
        self.state.actor.y += self.state.actor.vel_y;

        // Scroll and drop pairs that left the screen
        for pair in &mut self.state.obstacles {
            pair.x -= self.tuning.scroll_speed;
        }
        let before = self.state.obstacles.len();
        self.state.obstacles.retain(|pair| !pair.is_off_screen());
        for _ in self.state.obstacles.len()..before {
            log::debug!("Obstacle pair left the screen");
            events.push(GameEvent::Despawned);
        }

        let threshold = self.tuning.spawn_threshold();
        if self
            .state
            .newest_obstacle()
            .is_none_or(|pair| pair.x < threshold)
        {
            let gap_top = self.spawn_obstacle();
            events.push(GameEvent::Spawned { gap_top });
        }

        match check_collision(&self.state, &self.tuning) {
            Some(cause) => {
                self.state.status = GameStatus::Over;
                log::info!(
                    "Game over ({:?}) after {} ticks, score {}",
                    cause,
                    self.state.time_ticks,
                    self.state.score
                );
                events.push(GameEvent::Crashed { cause });
            }
            None => self.state.score += 1,
        }

        events
    }

    /// Flap: override vertical velocity with the jump velocity.
    /// Returns false (and does nothing) once the run is over.
    pub fn on_jump(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }
        self.state.actor.vel_y = self.tuning.jump_velocity;
        true
    }

    /// Start a fresh run. Only has an effect once the current run is over.
    pub fn on_restart(&mut self) -> bool {
        if !self.state.is_over() {
            return false;
        }
        let final_score = self.state.score;
        self.state = GameState::new(&self.tuning);
        self.spawn_obstacle();
        log::info!("Restarted (previous score {})", final_score);
        true
    }

    /// Route a raw input: any input restarts a finished run, only a jump
    /// counts while playing. Returns whether anything changed.
    pub fn handle_input(&mut self, input: Input) -> bool {
        match (self.state.status, input) {
            (GameStatus::Over, _) => self.on_restart(),
            (GameStatus::Active, Input::Jump) => self.on_jump(),
            (GameStatus::Active, Input::Other) => false,
        }
    }

    /// Push a new pair at the right edge, returning its gap top
    fn spawn_obstacle(&mut self) -> f32 {
        let gap_top = self.gaps.gap_top(self.tuning.gap_top_range());
        self.state.obstacles.push(ObstaclePair::new(
            self.tuning.screen_width,
            gap_top,
            self.tuning.gap_height,
            self.tuning.obstacle_width,
        ));
        log::debug!("Spawned obstacle pair with gap at {:.1}", gap_top);
        gap_top
    }
}
