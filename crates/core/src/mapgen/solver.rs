//! Breadth-first search over moves rather than tiles: one edge is one
//! [`MovementModel::step`], so a single tilt may cross many tiles.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::movement::MovementModel;
use crate::types::{Direction, Pos, TileKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SolutionLength {
    Moves(u32),
    Unsolvable,
}

impl SolutionLength {
    pub fn moves(self) -> Option<u32> {
        match self {
            Self::Moves(moves) => Some(moves),
            Self::Unsolvable => None,
        }
    }

    pub fn is_solvable(self) -> bool {
        matches!(self, Self::Moves(_))
    }
}

impl fmt::Display for SolutionLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moves(moves) => write!(f, "{moves} moves"),
            Self::Unsolvable => write!(f, "unsolvable"),
        }
    }
}

/// Minimum number of tilts from `start` to the goal.
pub fn shortest_solution_length(grid: &Grid, start: Pos) -> SolutionLength {
    shortest_solution_length_with(grid, start, MovementModel::Tilt)
}

pub fn shortest_solution_length_with(
    grid: &Grid,
    start: Pos,
    model: MovementModel,
) -> SolutionLength {
    match solve(grid, start, model) {
        Some(moves) => SolutionLength::Moves(moves.len() as u32),
        None => SolutionLength::Unsolvable,
    }
}

/// A minimum-length move sequence from `start` to the goal, or `None` when
/// the frontier empties first.
pub fn solve(grid: &Grid, start: Pos, model: MovementModel) -> Option<Vec<Direction>> {
    if !grid.in_bounds(start) || grid.tile_at(start) == TileKind::Wall {
        return None;
    }
    if grid.tile_at(start) == TileKind::Goal {
        return Some(Vec::new());
    }

    let mut came_from: BTreeMap<Pos, (Pos, Direction)> = BTreeMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for direction in Direction::ALL {
            let outcome = model.step(grid, current, direction);
            if outcome.reached_goal {
                let mut moves = reconstruct_moves(&came_from, start, current);
                moves.push(direction);
                return Some(moves);
            }
            let next = outcome.final_position;
            if next == current || next == start || came_from.contains_key(&next) {
                continue;
            }
            came_from.insert(next, (current, direction));
            queue.push_back(next);
        }
    }
    None
}

fn reconstruct_moves(
    came_from: &BTreeMap<Pos, (Pos, Direction)>,
    start: Pos,
    end: Pos,
) -> Vec<Direction> {
    let mut moves = Vec::new();
    let mut current = end;
    while current != start {
        let Some(&(previous, direction)) = came_from.get(&current) else {
            break;
        };
        moves.push(direction);
        current = previous;
    }
    moves.reverse();
    moves
}
