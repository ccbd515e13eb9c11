//! Entity placement over a generated level's reachable tiles.

use rand_chacha::rand_core::Rng;

use crate::types::Pos;

use super::model::GeneratedLevel;
use super::seed::random_usize;

/// Picks up to `count` distinct positions from the level's reachable set,
/// excluding the start, the goal, and the tiles orthogonally adjacent to the
/// start. Returns fewer positions when not enough tiles qualify.
pub fn place_entities<R: Rng + ?Sized>(
    level: &GeneratedLevel,
    count: usize,
    rng: &mut R,
) -> Vec<Pos> {
    let mut candidates: Vec<Pos> = level
        .reachable
        .iter()
        .filter(|&pos| pos != level.goal && pos.manhattan(level.start) > 1)
        .collect();

    let take = count.min(candidates.len());
    // Partial Fisher-Yates: the first `take` slots end up a uniform sample.
    for index in 0..take {
        let swap_with = random_usize(rng, index, candidates.len() - 1);
        candidates.swap(index, swap_with);
    }
    candidates.truncate(take);
    candidates.sort();
    candidates
}

#[cfg(test)]
mod tests {
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

    use super::*;
    use crate::grid::Grid;
    use crate::mapgen::{
        GenerationOutcome, LayoutVariant, LevelGenerator, SolutionLength, compute_reachable,
        progression::GenerationParams,
    };
    use crate::types::TileKind;

    #[test]
    fn placements_are_distinct_reachable_and_outside_the_sanctuary() {
        let generator = LevelGenerator::default();
        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let level = generator.generate(6, &mut rng, LayoutVariant::Dungeon);
            let count = GenerationParams::for_level(6).monster_count;
            let placed = place_entities(&level, count, &mut rng);

            assert_eq!(placed.len(), count);
            for (index, pos) in placed.iter().enumerate() {
                assert!(level.reachable.contains(*pos));
                assert_ne!(*pos, level.goal);
                assert!(pos.manhattan(level.start) > 1, "{pos:?} is next to the start");
                assert!(!placed[index + 1..].contains(pos));
            }
        }
    }

    #[test]
    fn placement_is_capped_by_available_tiles() {
        let mut grid = Grid::bordered_room(6, 3);
        let goal = Pos { y: 1, x: 4 };
        grid.set_tile(goal, TileKind::Goal);
        let start = Pos { y: 1, x: 1 };
        let level = GeneratedLevel {
            reachable: compute_reachable(&grid, start),
            grid,
            start,
            goal,
            variant: LayoutVariant::Dungeon,
            outcome: GenerationOutcome::Fallback,
            solution_length: SolutionLength::Moves(3),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        // Row of four: start, its neighbour, one free tile, goal.
        assert_eq!(place_entities(&level, 10, &mut rng), vec![Pos { y: 1, x: 3 }]);
    }
}
