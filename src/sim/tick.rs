//! Per-tick simulation step
//!
//! Fixed order every tick: intents, track scroll, player physics, death
//! check, difficulty clock.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::{GamePhase, GameState};

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Jump (edge-triggered by the driver: one tick per key press)
    pub jump: bool,
    /// Duck key currently held
    pub duck: bool,
}

/// Advance the game state by one tick of `dt` seconds
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    // Intents register before anything moves
    if input.jump {
        state.player.jump(&state.track);
    }
    state.player.set_duck(input.duck, &state.track);

    // Scrolling stops once the player has sunk toward the bottom edge
    if state.player.collision_rect().max_y() <= state.config.scroll_cutoff() {
        state.track.advance(state.difficulty.params(), &mut state.rng);
    }

    state.player.apply_physics(&state.track);
    let ducking = state.player.is_ducking();
    state.player.animation.advance(dt, ducking);

    if state.player.has_fallen_off(state.config.screen_height) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
        return;
    }

    state.score += u64::from(state.difficulty.advance(dt));
}
