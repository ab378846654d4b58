//! Time-driven difficulty ramp
//!
//! Every elapsed interval (one real second by default) the run gets faster and
//! the track gets sparser and longer. The ramp never caps.

use serde::{Deserialize, Serialize};

use super::rng::SpawnRange;
use crate::config::RunnerConfig;

/// Parameters the track generator reads each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    pub scroll_speed: f32,
    pub gap_range: SpawnRange,
    pub width_range: SpawnRange,
}

/// Owns the live difficulty parameters and the clock that advances them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Difficulty {
    initial: DifficultyParams,
    params: DifficultyParams,
    interval: f64,
    speed_step: f32,
    range_step: i32,
    /// Seconds accumulated toward the next ramp. Kept in f64 so sixty
    /// 1/60 s ticks add up to a full second.
    clock: f64,
}

impl Difficulty {
    pub fn from_config(config: &RunnerConfig) -> Self {
        let initial = DifficultyParams {
            scroll_speed: config.scroll_speed,
            gap_range: config.gap_range,
            width_range: config.width_range,
        };
        Self {
            initial,
            params: initial,
            interval: f64::from(config.difficulty_interval),
            speed_step: config.speed_step,
            range_step: config.range_step,
            clock: 0.0,
        }
    }

    /// Back to the configured starting values
    pub fn reset(&mut self) {
        self.params = self.initial;
        self.clock = 0.0;
    }

    pub fn params(&self) -> &DifficultyParams {
        &self.params
    }

    /// Apply one ramp step
    pub fn ramp(&mut self) {
        self.params.scroll_speed += self.speed_step;
        self.params.gap_range = self.params.gap_range.shifted(self.range_step);
        self.params.width_range = self.params.width_range.shifted(self.range_step);
    }

    /// Accumulate `dt` seconds and ramp once per full interval elapsed.
    /// Returns the number of ramps applied (each one is a scored second).
    pub fn advance(&mut self, dt: f32) -> u32 {
        // Absorbs rounding in dt values like 0.1 that aren't exact in binary
        const EPS: f64 = 1e-6;

        self.clock += f64::from(dt);
        let mut ramps = 0;
        while self.clock + EPS >= self.interval {
            self.clock -= self.interval;
            self.ramp();
            ramps += 1;
        }
        if ramps > 0 {
            log::debug!(
                "Difficulty up x{}: speed={:.2} gap={:?} width={:?}",
                ramps,
                self.params.scroll_speed,
                self.params.gap_range,
                self.params.width_range
            );
        }
        ramps
    }
}
