//! Last-resort layout: one open room with start and goal in opposite interior
//! corners. Structurally solvable under both movement models.

use crate::grid::Grid;
use crate::types::{Pos, TileKind};

use super::super::error::FallbackViolation;
use super::super::model::{GeneratedLevel, GenerationOutcome, LayoutVariant};
use super::super::progression::GenerationParams;
use super::super::reachability::compute_reachable;
use super::super::solver::shortest_solution_length_with;
use super::candidate::{Constraints, validate};

const MIN_FALLBACK_SIDE: usize = 4;

pub(crate) fn fallback_level(variant: LayoutVariant, params: &GenerationParams) -> GeneratedLevel {
    let (width, height) = params.dimensions(variant);
    let width = width.max(MIN_FALLBACK_SIDE);
    let height = height.max(MIN_FALLBACK_SIDE);

    let mut grid = Grid::bordered_room(width, height);
    let start = Pos { y: 1, x: 1 };
    let goal = Pos { y: (height - 2) as i32, x: (width - 2) as i32 };
    grid.set_tile(goal, TileKind::Goal);

    let (reachable, solution_length) =
        match validate(variant, &grid, start, goal, Constraints::SOLVABLE) {
            Ok(validated) => validated,
            Err(rejection) => {
                let violation = FallbackViolation { variant, rejection };
                log::error!("invariant violation: {violation}: {}", violation.rejection);
                (
                    compute_reachable(&grid, start),
                    shortest_solution_length_with(&grid, start, variant.movement_model()),
                )
            }
        };

    GeneratedLevel {
        grid,
        start,
        goal,
        reachable,
        variant,
        outcome: GenerationOutcome::Fallback,
        solution_length,
    }
}

/// Re-runs the candidate validators over a level at the solvable floor.
pub fn verify_fallback(level: &GeneratedLevel) -> Result<(), FallbackViolation> {
    validate(level.variant, &level.grid, level.start, level.goal, Constraints::SOLVABLE)
        .map(|_| ())
        .map_err(|rejection| FallbackViolation { variant: level.variant, rejection })
}
