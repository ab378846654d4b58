//! The runner: vertical physics, action state and run animation
//!
//! Velocity is signed with positive meaning up, so moving the body is
//! `rect.y -= velocity` in screen coordinates.

use serde::{Deserialize, Serialize};

use super::collision::is_grounded;
use super::rect::Rect;
use super::track::Track;
use crate::config::RunnerConfig;

/// What the runner is doing this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionState {
    /// Standing on a segment
    #[default]
    Grounded,
    /// Airborne, moving up
    Rising,
    /// Airborne, moving down (or hanging at the apex)
    Falling,
    /// Crouched on a segment
    Ducking,
}

/// Alternating run-cycle timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    frame: usize,
    frames: usize,
    interval: f32,
    timer: f32,
}

impl Animation {
    pub fn new(frames: usize, interval: f32) -> Self {
        Self {
            frame: 0,
            frames,
            interval,
            timer: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
    }

    /// Step the cycle. The duck pose holds the cycle at its first frame.
    pub fn advance(&mut self, dt: f32, ducking: bool) {
        if ducking {
            self.reset();
            return;
        }
        self.timer += dt;
        while self.timer >= self.interval {
            self.timer -= self.interval;
            self.frame = (self.frame + 1) % self.frames;
        }
    }

    /// Current run frame (`0..frames`)
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Sprite index including the duck pose, which sits right after the run frames
    pub fn pose_index(&self, ducking: bool) -> usize {
        if ducking { self.frames } else { self.frame }
    }
}

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Full standing body; never reshaped by ducking
    pub rect: Rect,
    /// Signed vertical speed per tick (positive = up)
    pub velocity: f32,
    pub action: ActionState,
    pub animation: Animation,
    spawn: Rect,
    gravity: f32,
    jump_impulse: f32,
    duck_height: f32,
    /// Duck input as of the previous tick, for press detection
    duck_was_held: bool,
}

impl Player {
    pub fn from_config(config: &RunnerConfig) -> Self {
        let spawn = Rect::new(
            config.spawn_x,
            config.spawn_y,
            config.player_width,
            config.player_height,
        );
        Self {
            rect: spawn,
            velocity: 0.0,
            action: ActionState::Grounded,
            animation: Animation::new(config.run_frames, config.animation_interval),
            spawn,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            duck_height: config.duck_height,
            duck_was_held: false,
        }
    }

    /// Back to the spawn point, at rest
    pub fn reset(&mut self) {
        self.rect = self.spawn;
        self.velocity = 0.0;
        self.action = ActionState::Grounded;
        self.animation.reset();
        self.duck_was_held = false;
    }

    pub fn spawn(&self) -> Rect {
        self.spawn
    }

    pub fn is_ducking(&self) -> bool {
        self.action == ActionState::Ducking
    }

    /// Rectangle used for collision and drawing this tick.
    /// Ducking keeps the feet in place and lowers the head.
    pub fn collision_rect(&self) -> Rect {
        if self.is_ducking() {
            Rect::new(
                self.rect.x,
                self.rect.y + self.rect.height - self.duck_height,
                self.rect.width,
                self.duck_height,
            )
        } else {
            self.rect
        }
    }

    pub fn is_grounded(&self, track: &Track) -> bool {
        is_grounded(track, &self.collision_rect())
    }

    /// Jump if standing on something. Returns whether it took effect.
    pub fn jump(&mut self, track: &Track) -> bool {
        if !self.is_grounded(track) {
            return false;
        }
        self.velocity = self.jump_impulse;
        self.action = ActionState::Rising;
        true
    }

    /// Drop hard if airborne. Returns whether it took effect.
    pub fn fast_descend(&mut self, track: &Track) -> bool {
        if self.is_grounded(track) {
            return false;
        }
        self.velocity = -self.jump_impulse;
        self.action = ActionState::Falling;
        true
    }

    /// Feed the duck input for this tick. On the ground a held duck crouches;
    /// in the air a fresh press becomes a fast-descend. Letting go stands up.
    pub fn set_duck(&mut self, held: bool, track: &Track) {
        let pressed = held && !self.duck_was_held;
        self.duck_was_held = held;

        if !held {
            if self.is_ducking() {
                self.action = ActionState::Grounded;
            }
            return;
        }

        if self.is_grounded(track) {
            self.action = ActionState::Ducking;
        } else if pressed {
            self.fast_descend(track);
        }
    }

    /// One tick of gravity and vertical motion
    pub fn apply_physics(&mut self, track: &Track) {
        let jumping = self.velocity > 0.0;
        let landed = self.is_grounded(track) && !jumping;

        if landed {
            self.velocity = 0.0;
        } else {
            self.velocity -= self.gravity;
        }
        self.rect.y -= self.velocity;

        self.action = match (landed, self.action) {
            (true, ActionState::Ducking) => ActionState::Ducking,
            (true, _) => ActionState::Grounded,
            (false, _) if self.velocity > 0.0 => ActionState::Rising,
            (false, _) => ActionState::Falling,
        };
    }

    /// Fallen fully past the bottom of the screen
    pub fn has_fallen_off(&self, screen_height: f32) -> bool {
        self.rect.y > screen_height
    }
}
