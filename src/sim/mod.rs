//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied elapsed time only
//! - Injected, seedable random source only
//! - Stable segment order (left to right, by creation)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod player;
pub mod rect;
pub mod rng;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::is_grounded;
pub use difficulty::{Difficulty, DifficultyParams};
pub use player::{ActionState, Animation, Player};
pub use rect::Rect;
pub use rng::{MidpointSource, RandomSource, SpawnRange, seeded};
pub use state::{GamePhase, GameState, PlayerPose, Snapshot};
pub use tick::{TickInput, tick};
pub use track::{Segment, Track, TrackLayout};
