//! Validated tuning parameters
//!
//! A [`Config`] carries every speed and pacing constant a single simulation
//! run needs. Out-of-range values are a caller bug, rejected when the world is
//! built rather than tolerated at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// The spawn ranges assume the lane can hold the widest obstacle plus its
/// side margins; narrower lanes would make the spawn windows empty.
pub const MIN_WORLD_WIDTH: f32 = 6.0;

/// Rejected tuning values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("world_width must be at least 6 world units (got {0})")]
    LaneTooNarrow(f32),
    #[error("starting_lives must be at least 1 (got {0})")]
    NoLives(i32),
}

/// Tuning for one simulation run
///
/// Deserializable so a driver can load it from a JSON file; missing fields
/// fall back to the stock constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub world_width: f32,
    pub scroll_speed: f32,
    pub player_speed_x: f32,
    pub player_speed_y: f32,
    pub player_speed_z: f32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,
    pub fire_recharge: f32,
    pub starting_lives: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            scroll_speed: SCROLL_SPEED,
            player_speed_x: PLAYER_SPEED_X,
            player_speed_y: PLAYER_SPEED_Y,
            player_speed_z: PLAYER_SPEED_Z,
            bullet_speed: BULLET_SPEED,
            enemy_speed: ENEMY_SPEED,
            fire_recharge: FIRE_RECHARGE,
            starting_lives: STARTING_LIVES,
        }
    }
}

impl Config {
    /// Check every field against its contract
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("scroll_speed", self.scroll_speed),
            ("player_speed_x", self.player_speed_x),
            ("player_speed_y", self.player_speed_y),
            ("player_speed_z", self.player_speed_z),
            ("bullet_speed", self.bullet_speed),
            ("enemy_speed", self.enemy_speed),
            ("fire_recharge", self.fire_recharge),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(self.world_width.is_finite() && self.world_width >= MIN_WORLD_WIDTH) {
            return Err(ConfigError::LaneTooNarrow(self.world_width));
        }
        if self.starting_lives < 1 {
            return Err(ConfigError::NoLives(self.starting_lives));
        }
        Ok(())
    }
}
