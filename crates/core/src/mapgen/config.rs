//! Attempt budgets and room-size bounds for the generation controller.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;
pub const DEFAULT_RELAXED_ATTEMPTS: u32 = 32;
pub const DEFAULT_START_GOAL_SAMPLING_ATTEMPTS: u32 = 64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Candidates tried against the difficulty target.
    pub max_attempts: u32,
    /// Candidates tried against the relaxed constraint floor.
    pub relaxed_attempts: u32,
    /// Inclusive dungeon room width bounds.
    pub room_width: (usize, usize),
    /// Inclusive dungeon room height bounds.
    pub room_height: (usize, usize),
    /// Rejection-sampling budget for a tilt start/goal pair.
    pub start_goal_sampling_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            relaxed_attempts: DEFAULT_RELAXED_ATTEMPTS,
            room_width: (3, 7),
            room_height: (3, 5),
            start_goal_sampling_attempts: DEFAULT_START_GOAL_SAMPLING_ATTEMPTS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1")]
    ZeroBudget { field: &'static str },
    #[error("{field} range is inverted or empty: {min}..={max}")]
    InvalidRange { field: &'static str, min: usize, max: usize },
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroBudget { field: "max_attempts" });
        }
        if self.relaxed_attempts == 0 {
            return Err(ConfigError::ZeroBudget { field: "relaxed_attempts" });
        }
        if self.start_goal_sampling_attempts == 0 {
            return Err(ConfigError::ZeroBudget { field: "start_goal_sampling_attempts" });
        }
        check_range("room_width", self.room_width)?;
        check_range("room_height", self.room_height)?;
        Ok(())
    }
}

fn check_range(field: &'static str, (min, max): (usize, usize)) -> Result<(), ConfigError> {
    if min == 0 || min > max {
        return Err(ConfigError::InvalidRange { field, min, max });
    }
    Ok(())
}
