//! Skyline Runner - An endless runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (track generation, collisions, player physics, difficulty)
//! - `config`: Validated construction-time tuning

pub mod config;
pub mod sim;

pub use config::{ConfigError, RunnerConfig};
pub use sim::{GameState, Snapshot, TickInput};

/// Default tuning constants
pub mod consts {
    /// Visible area
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Horizontal track movement per tick at the start of a run
    pub const SCROLL_SPEED: f32 = 2.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.2;
    /// Upward velocity applied by a jump (and downward by a fast-descend)
    pub const JUMP_IMPULSE: f32 = 4.0;

    /// Segment spawn ranges (inclusive)
    pub const GAP_RANGE: (i32, i32) = (20, 120);
    pub const WIDTH_RANGE: (i32, i32) = (100, 200);

    /// Segment geometry - the track sits at `SCREEN_HEIGHT - SEGMENT_HEIGHT`
    pub const SEGMENT_HEIGHT: f32 = 30.0;
    pub const STARTER_WIDTH: f32 = 250.0;
    /// Minimum number of segments alive at any time
    pub const MIN_SEGMENTS: usize = 5;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 32.0;
    pub const SPAWN_X: f32 = 90.0;
    pub const SPAWN_Y: f32 = 250.0;

    /// Difficulty ramp (applied once per interval)
    pub const DIFFICULTY_INTERVAL: f32 = 1.0;
    pub const SPEED_STEP: f32 = 0.1;
    pub const RANGE_STEP: i32 = 3;
    /// Largest accepted range shift per ramp and initial range bound
    pub const MAX_RANGE_STEP: i32 = 1_000;
    pub const MAX_RANGE_BOUND: i32 = 1_000_000;

    /// Track stops scrolling once the player's feet sink below `SCREEN_HEIGHT - this`
    pub const SCROLL_FREEZE_MARGIN: f32 = 23.0;

    /// Run animation
    pub const ANIMATION_INTERVAL: f32 = 0.5;
    pub const RUN_FRAMES: usize = 2;

    /// Reference frame pacing for drivers (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
}
