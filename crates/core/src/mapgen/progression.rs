//! Difficulty curve: pure mappings from a level index to generation parameters.
//! Every parameter is non-decreasing in the level index and clamped at a cap.

use super::model::LayoutVariant;

pub const TILT_MAX_WIDTH: usize = 15;
pub const TILT_MAX_HEIGHT: usize = 13;
pub const DUNGEON_MAX_WIDTH: usize = 30;
pub const DUNGEON_MAX_HEIGHT: usize = 20;
pub const MAX_WALL_DENSITY_PERCENT: u32 = 35;
pub const MAX_MIN_SOLUTION_LENGTH: u32 = 6;
pub const MAX_START_GOAL_SEPARATION: u32 = 8;
pub const MAX_ROOM_COUNT_RANGE: (usize, usize) = (6, 8);
pub const MAX_MIN_REACHABLE_TILES: usize = 120;
pub const MAX_MONSTER_COUNT: usize = 8;

/// Lowest level index at which every parameter sits at its cap.
pub const FULL_DIFFICULTY_LEVEL: u32 = 18;

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
    pub tilt_width: usize,
    pub tilt_height: usize,
    pub dungeon_width: usize,
    pub dungeon_height: usize,
    /// Probability that an interior tilt cell becomes a wall.
    pub wall_density: f64,
    pub min_solution_length: u32,
    /// Minimum Manhattan distance between the tilt start and goal cells.
    pub min_start_goal_separation: u32,
    /// Inclusive range the dungeon's target room count is drawn from.
    pub room_count_range: (usize, usize),
    pub min_reachable_tiles: usize,
    pub monster_count: usize,
}

impl GenerationParams {
    pub fn for_level(level_index: u32) -> Self {
        let level = level_index.min(FULL_DIFFICULTY_LEVEL);
        let level_usize = level as usize;
        Self {
            tilt_width: (9 + level_usize / 2).min(TILT_MAX_WIDTH),
            tilt_height: (9 + level_usize / 3).min(TILT_MAX_HEIGHT),
            dungeon_width: (24 + level_usize).min(DUNGEON_MAX_WIDTH),
            dungeon_height: (16 + level_usize / 2).min(DUNGEON_MAX_HEIGHT),
            wall_density: f64::from(wall_density_percent(level)) / 100.0,
            min_solution_length: (2 + level / 3).min(MAX_MIN_SOLUTION_LENGTH),
            min_start_goal_separation: (3 + level / 3).min(MAX_START_GOAL_SEPARATION),
            room_count_range: (
                (3 + level_usize / 3).min(MAX_ROOM_COUNT_RANGE.0),
                (5 + level_usize / 3).min(MAX_ROOM_COUNT_RANGE.1),
            ),
            min_reachable_tiles: (30 + 5 * level_usize).min(MAX_MIN_REACHABLE_TILES),
            monster_count: (1 + level_usize / 2).min(MAX_MONSTER_COUNT),
        }
    }

    /// Grid `(width, height)` for the given layout.
    pub fn dimensions(&self, variant: LayoutVariant) -> (usize, usize) {
        match variant {
            LayoutVariant::Dungeon => (self.dungeon_width, self.dungeon_height),
            LayoutVariant::Tilt => (self.tilt_width, self.tilt_height),
        }
    }

    /// Constraint floor used once the difficulty target cannot be met:
    /// any solvable or reachable candidate is acceptable.
    pub fn relaxed(&self) -> Self {
        Self {
            wall_density: self.wall_density / 2.0,
            min_solution_length: 1,
            min_start_goal_separation: 1,
            room_count_range: (1, self.room_count_range.1),
            min_reachable_tiles: 1,
            ..self.clone()
        }
    }
}

fn wall_density_percent(level: u32) -> u32 {
    (15 + 2 * level).min(MAX_WALL_DENSITY_PERCENT)
}
