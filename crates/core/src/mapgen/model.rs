//! Public data models for generated levels.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::movement::{MoveOutcome, MovementModel};
use crate::types::{Direction, Pos};

use super::reachability::ReachableSet;
use super::solver::SolutionLength;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutVariant {
    /// Room-and-corridor layout played with the walking model.
    Dungeon,
    /// Bordered density maze played with the tilting model.
    Tilt,
}

impl LayoutVariant {
    pub fn movement_model(self) -> MovementModel {
        match self {
            Self::Dungeon => MovementModel::Walk,
            Self::Tilt => MovementModel::Tilt,
        }
    }
}

/// How the controller arrived at a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationOutcome {
    /// Met the difficulty target on the given (1-based) attempt.
    Accepted { attempts: u32 },
    /// Met only the relaxed constraint floor on the given relaxed attempt.
    Relaxed { attempts: u32 },
    /// Hand-built fallback layout.
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub grid: Grid,
    pub start: Pos,
    pub goal: Pos,
    /// Walking-adjacency component of `start`; entity placement draws from it.
    pub reachable: ReachableSet,
    pub variant: LayoutVariant,
    pub outcome: GenerationOutcome,
    /// Solver result under the variant's movement model.
    pub solution_length: SolutionLength,
}

impl GeneratedLevel {
    /// Resolves one player move with the same rule the generator validated against.
    pub fn apply_move(&self, from: Pos, direction: Direction) -> MoveOutcome {
        self.variant.movement_model().step(&self.grid, from, direction)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.grid.canonical_bytes();
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.goal.y.to_le_bytes());
        bytes.extend(self.goal.x.to_le_bytes());
        bytes.extend((self.reachable.len() as u32).to_le_bytes());
        bytes.push(match self.variant {
            LayoutVariant::Dungeon => 0,
            LayoutVariant::Tilt => 1,
        });
        match self.outcome {
            GenerationOutcome::Accepted { attempts } => {
                bytes.push(0);
                bytes.extend(attempts.to_le_bytes());
            }
            GenerationOutcome::Relaxed { attempts } => {
                bytes.push(1);
                bytes.extend(attempts.to_le_bytes());
            }
            GenerationOutcome::Fallback => bytes.push(2),
        }
        bytes
    }
}
