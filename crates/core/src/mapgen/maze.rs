//! Density-scattered wall layouts for the tilt maze.

use rand_chacha::rand_core::Rng;

use crate::grid::Grid;
use crate::types::{Pos, TileKind};

use super::seed::{random_usize, roll_chance};

/// Rejection-samples two distinct interior cells at least `min_separation`
/// apart (Manhattan). Returns `None` once the sampling budget runs out.
pub fn sample_start_goal<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    min_separation: u32,
    attempts: u32,
) -> Option<(Pos, Pos)> {
    if width < 3 || height < 3 {
        return None;
    }
    for _ in 0..attempts {
        let start = random_interior_cell(rng, width, height);
        let goal = random_interior_cell(rng, width, height);
        if start != goal && start.manhattan(goal) >= min_separation {
            return Some((start, goal));
        }
    }
    None
}

/// Bordered grid whose interior cells, except `start` and `goal`, become
/// walls independently with probability `wall_density`. `goal` is the only
/// goal tile.
pub fn build_density_maze<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    wall_density: f64,
    start: Pos,
    goal: Pos,
) -> Grid {
    let mut grid = Grid::bordered_room(width, height);
    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let pos = Pos { y: y as i32, x: x as i32 };
            if pos == start || pos == goal {
                continue;
            }
            if roll_chance(rng, wall_density) {
                grid.set_tile(pos, TileKind::Wall);
            }
        }
    }
    grid.set_tile(goal, TileKind::Goal);
    grid
}

fn random_interior_cell<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize) -> Pos {
    let x = random_usize(rng, 1, width - 2);
    let y = random_usize(rng, 1, height - 2);
    Pos { y: y as i32, x: x as i32 }
}

#[cfg(test)]
mod tests {
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

    use super::*;

    #[test]
    fn sampled_pair_is_interior_and_separated() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let (start, goal) =
                sample_start_goal(&mut rng, 9, 9, 5, 64).expect("9x9 fits a separation of 5");
            let grid = Grid::bordered_room(9, 9);
            assert!(grid.is_interior(start) && grid.is_interior(goal));
            assert!(start.manhattan(goal) >= 5);
        }
    }

    #[test]
    fn impossible_separation_exhausts_the_budget() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        // A 5x5 interior diagonal spans only 3 + 3 tiles.
        assert_eq!(sample_start_goal(&mut rng, 5, 5, 7, 64), None);
        assert_eq!(sample_start_goal(&mut rng, 2, 9, 1, 64), None);
    }

    #[test]
    fn maze_keeps_border_start_and_single_goal() {
        let start = Pos { y: 1, x: 1 };
        let goal = Pos { y: 7, x: 7 };
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = build_density_maze(&mut rng, 9, 9, 0.35, start, goal);
            assert!(grid.border_is_wall());
            assert_eq!(grid.goal_positions(), vec![goal]);
            assert_eq!(grid.tile_at(start), TileKind::Floor);
        }
    }

    #[test]
    fn density_extremes_produce_open_or_solid_interiors() {
        let start = Pos { y: 1, x: 1 };
        let goal = Pos { y: 5, x: 5 };
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let open = build_density_maze(&mut rng, 7, 7, 0.0, start, goal);
        assert_eq!(open.count(TileKind::Floor), 5 * 5 - 1);

        let solid = build_density_maze(&mut rng, 7, 7, 1.0, start, goal);
        assert_eq!(solid.count(TileKind::Floor), 1);
        assert_eq!(solid.count(TileKind::Goal), 1);
    }
}
