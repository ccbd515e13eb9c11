//! Candidate construction and validation for both layout variants.

use rand_chacha::rand_core::Rng;

use crate::grid::Grid;
use crate::movement::MovementModel;
use crate::types::{Pos, TileKind};

use super::super::config::GeneratorConfig;
use super::super::error::CandidateRejection;
use super::super::layout::build_dungeon_layout;
use super::super::maze::{build_density_maze, sample_start_goal};
use super::super::model::LayoutVariant;
use super::super::progression::GenerationParams;
use super::super::reachability::{ReachableSet, compute_reachable};
use super::super::seed::random_usize;
use super::super::solver::{SolutionLength, shortest_solution_length_with};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Constraints {
    pub(crate) min_reachable_tiles: usize,
    pub(crate) min_solution_length: u32,
}

impl Constraints {
    /// Merely reachable (dungeon) or merely solvable (tilt).
    pub(crate) const SOLVABLE: Self = Self { min_reachable_tiles: 1, min_solution_length: 1 };

    pub(crate) fn from_params(params: &GenerationParams) -> Self {
        Self {
            min_reachable_tiles: params.min_reachable_tiles,
            min_solution_length: params.min_solution_length,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Candidate {
    pub(crate) grid: Grid,
    pub(crate) start: Pos,
    pub(crate) goal: Pos,
    pub(crate) reachable: ReachableSet,
    pub(crate) solution_length: SolutionLength,
}

pub(super) fn build_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    variant: LayoutVariant,
    params: &GenerationParams,
    config: &GeneratorConfig,
) -> Result<Candidate, CandidateRejection> {
    let (grid, start, goal, reachable) = match variant {
        LayoutVariant::Dungeon => build_dungeon_candidate(rng, params, config)?,
        LayoutVariant::Tilt => {
            let (grid, start, goal) = build_tilt_candidate(rng, params, config)?;
            let reachable = compute_reachable(&grid, start);
            (grid, start, goal, reachable)
        }
    };
    let constraints = Constraints::from_params(params);
    let solution_length = check_acceptance(variant, &grid, start, goal, &reachable, constraints)?;
    Ok(Candidate { grid, start, goal, reachable, solution_length })
}

/// Carves the rooms and places the goal on a farthest tile. The returned
/// reachable set is still valid after placement since goal tiles stay open.
fn build_dungeon_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GenerationParams,
    config: &GeneratorConfig,
) -> Result<(Grid, Pos, Pos, ReachableSet), CandidateRejection> {
    let (width, height) = params.dimensions(LayoutVariant::Dungeon);
    let (min_rooms, max_rooms) = params.room_count_range;
    let target_room_count = random_usize(rng, min_rooms, max_rooms.max(min_rooms));
    let layout = build_dungeon_layout(rng, width, height, target_room_count, config);
    let Some(first_room) = layout.rooms.first() else {
        return Err(CandidateRejection::NoRooms);
    };

    let start = first_room.center();
    let reachable = compute_reachable(&layout.grid, start);
    if reachable.max_distance().unwrap_or_default() == 0 {
        return Err(CandidateRejection::NoGoalPlacement);
    }
    let goal = reachable.pick_farthest(rng).ok_or(CandidateRejection::NoGoalPlacement)?;

    let mut grid = layout.grid;
    grid.set_tile(goal, TileKind::Goal);
    Ok((grid, start, goal, reachable))
}

fn build_tilt_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GenerationParams,
    config: &GeneratorConfig,
) -> Result<(Grid, Pos, Pos), CandidateRejection> {
    let (width, height) = params.dimensions(LayoutVariant::Tilt);
    let (start, goal) = sample_start_goal(
        rng,
        width,
        height,
        params.min_start_goal_separation,
        config.start_goal_sampling_attempts,
    )
    .ok_or(CandidateRejection::NoStartGoalPair)?;
    let grid = build_density_maze(rng, width, height, params.wall_density, start, goal);
    Ok((grid, start, goal))
}

/// Checks a finished grid against the variant's acceptance rule and returns
/// the reachable set and solution length the level will carry.
pub(crate) fn validate(
    variant: LayoutVariant,
    grid: &Grid,
    start: Pos,
    goal: Pos,
    constraints: Constraints,
) -> Result<(ReachableSet, SolutionLength), CandidateRejection> {
    let reachable = compute_reachable(grid, start);
    let solution_length = check_acceptance(variant, grid, start, goal, &reachable, constraints)?;
    Ok((reachable, solution_length))
}

fn check_acceptance(
    variant: LayoutVariant,
    grid: &Grid,
    start: Pos,
    goal: Pos,
    reachable: &ReachableSet,
    constraints: Constraints,
) -> Result<SolutionLength, CandidateRejection> {
    let goals = grid.goal_positions();
    if goals.len() != 1 {
        return Err(CandidateRejection::GoalCount { found: goals.len() });
    }

    match variant {
        LayoutVariant::Dungeon => {
            if reachable.len() < constraints.min_reachable_tiles {
                return Err(CandidateRejection::TooFewReachable {
                    found: reachable.len(),
                    required: constraints.min_reachable_tiles,
                });
            }
            let Some(distance) = reachable.distance(goal) else {
                return Err(CandidateRejection::GoalUnreachable);
            };
            if goals.first() != Some(&goal) || distance == 0 {
                return Err(CandidateRejection::NoGoalPlacement);
            }
            Ok(SolutionLength::Moves(distance))
        }
        LayoutVariant::Tilt => {
            let solution_length = shortest_solution_length_with(grid, start, MovementModel::Tilt);
            let Some(moves) = solution_length.moves() else {
                return Err(CandidateRejection::Unsolvable);
            };
            if moves < constraints.min_solution_length {
                return Err(CandidateRejection::SolutionTooShort {
                    found: moves,
                    required: constraints.min_solution_length,
                });
            }
            Ok(solution_length)
        }
    }
}
