//! The single "apply one move" rule shared by level generation and live play.
//! Generators validate solvability through [`MovementModel::step`] and games
//! resolve player input through the same call, so the two can never disagree.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::{Direction, Pos, TileKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementModel {
    /// One tile per move, blocked by walls and the grid edge.
    Walk,
    /// Slide until a wall or edge blocks, or a goal tile absorbs the motion.
    Tilt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveOutcome {
    pub final_position: Pos,
    pub reached_goal: bool,
}

impl MoveOutcome {
    pub fn moved_from(&self, origin: Pos) -> bool {
        self.final_position != origin
    }
}

impl MovementModel {
    pub fn step(self, grid: &Grid, position: Pos, direction: Direction) -> MoveOutcome {
        match self {
            Self::Walk => walk_step(grid, position, direction),
            Self::Tilt => tilt_step(grid, position, direction),
        }
    }
}

fn walk_step(grid: &Grid, position: Pos, direction: Direction) -> MoveOutcome {
    let next = position.offset(direction);
    if !grid.is_open(next) {
        return MoveOutcome { final_position: position, reached_goal: false };
    }
    MoveOutcome { final_position: next, reached_goal: grid.tile_at(next) == TileKind::Goal }
}

fn tilt_step(grid: &Grid, position: Pos, direction: Direction) -> MoveOutcome {
    let mut current = position;
    loop {
        let next = current.offset(direction);
        if !grid.is_open(next) {
            break;
        }
        current = next;
        if grid.tile_at(current) == TileKind::Goal {
            break;
        }
    }
    MoveOutcome {
        final_position: current,
        reached_goal: current != position && grid.tile_at(current) == TileKind::Goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        Grid::from_ascii(
            "#######
             #..#..#
             #....G#
             #######",
        )
        .expect("fixture grid should parse")
    }

    #[test]
    fn walk_moves_exactly_one_tile() {
        let grid = corridor();
        let outcome = MovementModel::Walk.step(&grid, Pos { y: 2, x: 1 }, Direction::Right);
        assert_eq!(
            outcome,
            MoveOutcome { final_position: Pos { y: 2, x: 2 }, reached_goal: false }
        );
    }

    #[test]
    fn walk_into_wall_leaves_position_unchanged() {
        let grid = corridor();
        let outcome = MovementModel::Walk.step(&grid, Pos { y: 1, x: 2 }, Direction::Right);
        assert_eq!(
            outcome,
            MoveOutcome { final_position: Pos { y: 1, x: 2 }, reached_goal: false }
        );
        assert!(!outcome.moved_from(Pos { y: 1, x: 2 }));
    }

    #[test]
    fn walk_onto_goal_reports_goal() {
        let grid = corridor();
        let outcome = MovementModel::Walk.step(&grid, Pos { y: 2, x: 4 }, Direction::Right);
        assert_eq!(outcome, MoveOutcome { final_position: Pos { y: 2, x: 5 }, reached_goal: true });
    }

    #[test]
    fn tilt_slides_until_wall() {
        let grid = corridor();
        let outcome = MovementModel::Tilt.step(&grid, Pos { y: 1, x: 1 }, Direction::Right);
        assert_eq!(
            outcome,
            MoveOutcome { final_position: Pos { y: 1, x: 2 }, reached_goal: false }
        );

        let outcome = MovementModel::Tilt.step(&grid, Pos { y: 2, x: 4 }, Direction::Left);
        assert_eq!(
            outcome,
            MoveOutcome { final_position: Pos { y: 2, x: 1 }, reached_goal: false }
        );
    }

    #[test]
    fn tilt_is_absorbed_by_goal() {
        let grid = Grid::from_ascii(
            "########
             #..G...#
             ########",
        )
        .expect("fixture grid should parse");
        let outcome = MovementModel::Tilt.step(&grid, Pos { y: 1, x: 1 }, Direction::Right);
        assert_eq!(outcome, MoveOutcome { final_position: Pos { y: 1, x: 3 }, reached_goal: true });
    }

    #[test]
    fn tilt_against_adjacent_wall_does_not_move() {
        let grid = corridor();
        let outcome = MovementModel::Tilt.step(&grid, Pos { y: 1, x: 1 }, Direction::Up);
        assert_eq!(
            outcome,
            MoveOutcome { final_position: Pos { y: 1, x: 1 }, reached_goal: false }
        );
    }

    #[test]
    fn tilt_stops_at_grid_edge_without_border() {
        let grid = Grid::filled(5, 1, TileKind::Floor);
        let outcome = MovementModel::Tilt.step(&grid, Pos { y: 0, x: 1 }, Direction::Right);
        assert_eq!(outcome.final_position, Pos { y: 0, x: 4 });
    }

    #[test]
    fn steps_from_the_edge_of_the_coordinate_range_stay_put() {
        let grid = corridor();
        let extremes = [
            Pos { y: i32::MAX, x: i32::MAX },
            Pos { y: i32::MIN, x: i32::MIN },
            Pos { y: 1, x: i32::MAX },
        ];
        for position in extremes {
            for direction in Direction::ALL {
                for model in [MovementModel::Walk, MovementModel::Tilt] {
                    let outcome = model.step(&grid, position, direction);
                    assert_eq!(
                        outcome,
                        MoveOutcome { final_position: position, reached_goal: false }
                    );
                }
            }
        }
        assert_eq!(Pos { y: 0, x: i32::MAX }.offset(Direction::Right), Pos { y: 0, x: i32::MAX });
    }
}
