//! Walking-adjacency flood fill with a BFS distance field.
//! Goals chosen from [`ReachableSet::farthest_tiles`] always share the start's
//! connected component.

use std::collections::{BTreeMap, VecDeque};

use rand_chacha::rand_core::Rng;

use crate::grid::Grid;
use crate::types::{Direction, Pos};

use super::seed::choose;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReachableSet {
    distances: BTreeMap<Pos, u32>,
}

impl ReachableSet {
    pub fn contains(&self, pos: Pos) -> bool {
        self.distances.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Row-major iteration over reachable positions.
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.distances.keys().copied()
    }

    pub fn distance(&self, pos: Pos) -> Option<u32> {
        self.distances.get(&pos).copied()
    }

    pub fn max_distance(&self) -> Option<u32> {
        self.distances.values().copied().max()
    }

    pub fn farthest_tiles(&self) -> Vec<Pos> {
        let Some(max_distance) = self.max_distance() else {
            return Vec::new();
        };
        self.distances
            .iter()
            .filter(|&(_, &distance)| distance == max_distance)
            .map(|(&pos, _)| pos)
            .collect()
    }

    /// Uniform pick among the tiles at maximum distance from the start.
    pub fn pick_farthest<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Pos> {
        choose(rng, &self.farthest_tiles())
    }
}

pub fn compute_reachable(grid: &Grid, start: Pos) -> ReachableSet {
    let mut distances = BTreeMap::new();
    if !grid.is_open(start) {
        return ReachableSet { distances };
    }

    let mut queue = VecDeque::new();
    distances.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances.get(&current).copied().unwrap_or_default() + 1;
        for direction in Direction::ALL {
            let neighbor = current.offset(direction);
            if grid.is_open(neighbor) && !distances.contains_key(&neighbor) {
                distances.insert(neighbor, next_distance);
                queue.push_back(neighbor);
            }
        }
    }

    ReachableSet { distances }
}
