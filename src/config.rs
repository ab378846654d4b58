//! Run configuration
//!
//! Every tuning constant the simulation reads lives here. Values are fixed for
//! the lifetime of a `GameState`; difficulty only mutates its own copies.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::SpawnRange;

/// Reasons a configuration is rejected
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite (got {value})")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} is inverted: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
    #[error("duck height {duck} must be in (0, {height}]")]
    DuckHeight { duck: f32, height: f32 },
    #[error("{field} must be at most {max} (got {value})")]
    TooLarge {
        field: &'static str,
        value: i32,
        max: i32,
    },
    #[error("run animation needs at least one frame")]
    NoRunFrames,
    #[error("Cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Construction-time simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Physics (per tick) ===
    /// Initial scroll speed
    pub scroll_speed: f32,
    pub gravity: f32,
    pub jump_impulse: f32,

    // === Track ===
    /// Initial gap between consecutive segments
    pub gap_range: SpawnRange,
    /// Initial segment width
    pub width_range: SpawnRange,
    pub segment_height: f32,
    /// Width of the fixed segment every run starts on
    pub starter_width: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub duck_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,

    // === Difficulty ===
    /// Seconds between difficulty ticks
    pub difficulty_interval: f32,
    pub speed_step: f32,
    pub range_step: i32,

    /// Scrolling pauses while the player's bottom edge is below
    /// `screen_height - scroll_freeze_margin`
    pub scroll_freeze_margin: f32,

    // === Animation ===
    /// Seconds per run frame
    pub animation_interval: f32,
    pub run_frames: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            scroll_speed: SCROLL_SPEED,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            gap_range: SpawnRange::new(GAP_RANGE.0, GAP_RANGE.1),
            width_range: SpawnRange::new(WIDTH_RANGE.0, WIDTH_RANGE.1),
            segment_height: SEGMENT_HEIGHT,
            starter_width: STARTER_WIDTH,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            duck_height: PLAYER_DUCK_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,

            difficulty_interval: DIFFICULTY_INTERVAL,
            speed_step: SPEED_STEP,
            range_step: RANGE_STEP,

            scroll_freeze_margin: SCROLL_FREEZE_MARGIN,

            animation_interval: ANIMATION_INTERVAL,
            run_frames: RUN_FRAMES,
        }
    }
}

impl RunnerConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON (for writing a starter config file)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject anything the simulation can't run with. Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("gravity", self.gravity)?;
        positive("jump_impulse", self.jump_impulse)?;
        positive("segment_height", self.segment_height)?;
        positive("starter_width", self.starter_width)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("difficulty_interval", self.difficulty_interval)?;
        positive("animation_interval", self.animation_interval)?;

        non_negative("scroll_speed", self.scroll_speed)?;
        non_negative("speed_step", self.speed_step)?;
        non_negative("scroll_freeze_margin", self.scroll_freeze_margin)?;
        non_negative("range_step", self.range_step as f32)?;
        at_most("range_step", self.range_step, MAX_RANGE_STEP)?;
        finite("spawn_x", self.spawn_x)?;
        finite("spawn_y", self.spawn_y)?;

        ordered("gap_range", self.gap_range)?;
        ordered("width_range", self.width_range)?;
        // Overlapping segments would break the track ordering
        non_negative("gap_range.min", self.gap_range.min as f32)?;
        // Zero-width segments never cover anything
        positive("width_range.min", self.width_range.min as f32)?;
        at_most("gap_range.max", self.gap_range.max, MAX_RANGE_BOUND)?;
        at_most("width_range.max", self.width_range.max, MAX_RANGE_BOUND)?;

        if !(self.duck_height > 0.0 && self.duck_height <= self.player_height) {
            return Err(ConfigError::DuckHeight {
                duck: self.duck_height,
                height: self.player_height,
            });
        }
        if self.run_frames == 0 {
            return Err(ConfigError::NoRunFrames);
        }

        Ok(())
    }

    /// Y coordinate of the top of every track segment
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.segment_height
    }

    /// Lowest bottom edge at which the track still scrolls
    pub fn scroll_cutoff(&self) -> f32 {
        self.screen_height - self.scroll_freeze_margin
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn at_most(field: &'static str, value: i32, max: i32) -> Result<(), ConfigError> {
    if value <= max {
        Ok(())
    } else {
        Err(ConfigError::TooLarge { field, value, max })
    }
}

fn ordered(field: &'static str, range: SpawnRange) -> Result<(), ConfigError> {
    if range.min <= range.max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange {
            field,
            min: range.min,
            max: range.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RunnerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.floor_y(), 450.0);
        assert_eq!(config.scroll_cutoff(), 457.0);
    }

    #[test]
    fn test_rejects_non_positive_screen() {
        let config = RunnerConfig {
            screen_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "screen_height",
                value
            }) if value == 0.0
        ));

        let config = RunnerConfig {
            screen_width: -640.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "screen_width", .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = RunnerConfig {
            gap_range: SpawnRange::new(120, 20),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange {
                field: "gap_range",
                min: 120,
                max: 20
            })
        ));
    }

    #[test]
    fn test_rejects_oversized_ramp() {
        let config = RunnerConfig {
            range_step: i32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge { field: "range_step", .. })
        ));

        let config = RunnerConfig {
            width_range: SpawnRange::new(100, MAX_RANGE_BOUND + 1),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge { field: "width_range.max", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_width_segments() {
        let config = RunnerConfig {
            width_range: SpawnRange::new(0, 10),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_duck_height() {
        let config = RunnerConfig {
            duck_height: 80.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::DuckHeight { .. })));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "scroll_speed": 3.5, "gap_range": { "min": 20, "max": 70 } }"#;
        let config = RunnerConfig::from_json(json).expect("valid config");
        assert_eq!(config.scroll_speed, 3.5);
        assert_eq!(config.gap_range, SpawnRange::new(20, 70));
        assert_eq!(config.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_json_validation_and_parse_errors() {
        assert!(matches!(
            RunnerConfig::from_json(r#"{ "gravity": -1.0 }"#),
            Err(ConfigError::NotPositive { field: "gravity", .. })
        ));
        assert!(matches!(
            RunnerConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        use std::error::Error;

        let err = RunnerConfig::from_json("{ \"gravity\": ").unwrap_err();
        assert!(err.source().is_some());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ConfigError::from(io);
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_json_round_trip() {
        let config = RunnerConfig::default();
        let json = config.to_json().expect("serializable");
        assert_eq!(RunnerConfig::from_json(&json).expect("valid"), config);
    }
}
