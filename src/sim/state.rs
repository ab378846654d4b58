//! Game state and run lifecycle
//!
//! Everything a run mutates lives in one `GameState`. There are no globals:
//! speed, ranges and score are fields reset together by [`GameState::reset`].

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::player::{ActionState, Player};
use super::rect::Rect;
use super::rng::{RandomSource, seeded};
use super::tick::{TickInput, tick};
use super::track::{Segment, Track, TrackLayout};
use crate::config::{ConfigError, RunnerConfig};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player alive, simulation advancing
    Running,
    /// Player fell off the screen; only `reset` leaves this phase
    GameOver,
}

/// Player geometry and pose for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPose {
    /// Collision/draw rectangle (crouched while ducking)
    pub rect: Rect,
    pub is_ducking: bool,
    pub action: ActionState,
    /// Sprite index: run frames first, then the duck pose
    pub frame: usize,
}

/// Public state published after every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u64,
    pub alive: bool,
    pub phase: GamePhase,
    /// HUD readouts
    pub scroll_speed: f32,
    pub velocity: f32,
    pub player: PlayerPose,
    /// Left to right
    pub segments: Vec<Segment>,
}

/// Complete state of one simulation
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = Pcg32> {
    pub(crate) config: RunnerConfig,
    pub(crate) rng: R,
    pub phase: GamePhase,
    /// Whole seconds survived this run
    pub score: u64,
    /// Ticks simulated this run
    pub time_ticks: u64,
    pub track: Track,
    pub player: Player,
    pub difficulty: Difficulty,
}

impl GameState<Pcg32> {
    /// New run with the default seeded generator
    pub fn new(config: RunnerConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, seeded(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// New run drawing segment gaps and widths from `rng`
    pub fn with_rng(config: RunnerConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = Self {
            track: Track::new(TrackLayout::from_config(&config)),
            player: Player::from_config(&config),
            difficulty: Difficulty::from_config(&config),
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            rng,
            config,
        };
        state.reset();
        Ok(state)
    }

    /// Start a fresh run: starter track, spawned player, default difficulty,
    /// zero score. The random stream keeps going, so each run's fill differs.
    pub fn reset(&mut self) {
        self.difficulty.reset();
        self.track.reset(self.difficulty.params(), &mut self.rng);
        self.player.reset();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        log::info!(
            "Run reset: {} segments, player at ({}, {})",
            self.track.len(),
            self.player.rect.x,
            self.player.rect.y
        );
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn is_alive(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Advance one tick of `dt` seconds and publish the result
    pub fn step(&mut self, input: &TickInput, dt: f32) -> Snapshot {
        tick(self, input, dt);
        self.snapshot()
    }

    /// Current public state
    pub fn snapshot(&self) -> Snapshot {
        let ducking = self.player.is_ducking();
        Snapshot {
            score: self.score,
            alive: self.is_alive(),
            phase: self.phase,
            scroll_speed: self.difficulty.params().scroll_speed,
            velocity: self.player.velocity,
            player: PlayerPose {
                rect: self.player.collision_rect(),
                is_ducking: ducking,
                action: self.player.action,
                frame: self.player.animation.pose_index(ducking),
            },
            segments: self.track.segments().copied().collect(),
        }
    }
}
