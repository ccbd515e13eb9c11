pub mod grid;
pub mod mapgen;
pub mod movement;
pub mod types;

pub use grid::{Grid, GridParseError};
pub use mapgen::{
    GeneratedLevel, GenerationOutcome, GenerationParams, GeneratorConfig, LayoutVariant,
    LevelGenerator, ReachableSet, SolutionLength, compute_reachable, generate,
    shortest_solution_length,
};
pub use movement::{MoveOutcome, MovementModel};
pub use types::*;
