//! Room placement and corridor carving for dungeon layouts.

use rand_chacha::rand_core::Rng;

use crate::grid::Grid;
use crate::types::{Pos, TileKind};

use super::config::GeneratorConfig;
use super::seed::random_usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl RoomRect {
    fn right(self) -> usize {
        self.x + self.width - 1
    }

    fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y + (self.height / 2)) as i32, x: (self.x + (self.width / 2)) as i32 }
    }

    pub fn intersects(self, other: &Self) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }

    pub fn contains(self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let px = pos.x as usize;
        let py = pos.y as usize;
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DungeonLayout {
    pub grid: Grid,
    /// Accepted rooms in insertion order.
    pub rooms: Vec<RoomRect>,
}

/// Proposes up to `3 * target_room_count` rectangles, keeping each one that
/// does not overlap an earlier room, then links consecutive rooms with
/// L-shaped corridors. Connectivity is validated by the caller, not assumed.
pub fn build_dungeon_layout<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    target_room_count: usize,
    config: &GeneratorConfig,
) -> DungeonLayout {
    let mut grid = Grid::filled(width, height, TileKind::Wall);
    let rooms = place_rooms(rng, width, height, target_room_count, config);
    for room in &rooms {
        carve_room(&mut grid, room);
    }
    carve_room_corridors(&mut grid, &rooms);
    DungeonLayout { grid, rooms }
}

fn place_rooms<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    target_room_count: usize,
    config: &GeneratorConfig,
) -> Vec<RoomRect> {
    let (minimum_room_width, maximum_room_width) = config.room_width;
    let (minimum_room_height, maximum_room_height) = config.room_height;

    let mut rooms: Vec<RoomRect> = Vec::with_capacity(target_room_count);
    for _ in 0..target_room_count.saturating_mul(3) {
        if rooms.len() >= target_room_count {
            break;
        }
        let room_width = random_usize(rng, minimum_room_width, maximum_room_width);
        let room_height = random_usize(rng, minimum_room_height, maximum_room_height);
        if room_width + 2 > width || room_height + 2 > height {
            continue;
        }

        let max_x = width - room_width - 1;
        let max_y = height - room_height - 1;
        let x = random_usize(rng, 1, max_x);
        let y = random_usize(rng, 1, max_y);
        let candidate = RoomRect { x, y, width: room_width, height: room_height };
        if rooms.iter().any(|existing_room| existing_room.intersects(&candidate)) {
            continue;
        }
        rooms.push(candidate);
    }
    rooms
}

pub(crate) fn carve_room(grid: &mut Grid, room: &RoomRect) {
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            grid.set_tile(Pos { y: y as i32, x: x as i32 }, TileKind::Floor);
        }
    }
}

/// Links rooms in insertion order: horizontal leg along the first room's
/// center row, then vertical leg along the second room's center column.
pub(crate) fn carve_room_corridors(grid: &mut Grid, rooms: &[RoomRect]) {
    for pair in rooms.windows(2) {
        let [from, to] = pair else {
            continue;
        };
        let start = from.center();
        let end = to.center();
        carve_horizontal_line(grid, start.y, start.x, end.x);
        carve_vertical_line(grid, end.x, start.y, end.y);
    }
}

fn carve_horizontal_line(grid: &mut Grid, y: i32, left_x: i32, right_x: i32) {
    for x in left_x.min(right_x)..=left_x.max(right_x) {
        carve_corridor_tile(grid, Pos { y, x });
    }
}

fn carve_vertical_line(grid: &mut Grid, x: i32, top_y: i32, bottom_y: i32) {
    for y in top_y.min(bottom_y)..=top_y.max(bottom_y) {
        carve_corridor_tile(grid, Pos { y, x });
    }
}

fn carve_corridor_tile(grid: &mut Grid, pos: Pos) {
    if grid.tile_at(pos) == TileKind::Wall && grid.in_bounds(pos) {
        grid.set_tile(pos, TileKind::Floor);
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

    use super::*;
    use crate::mapgen::reachability::compute_reachable;

    #[test]
    fn rooms_never_overlap_and_stay_off_the_border() {
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let layout = build_dungeon_layout(&mut rng, 30, 20, 7, &GeneratorConfig::default());
            assert!(!layout.rooms.is_empty(), "seed {seed} placed no rooms");
            assert!(layout.rooms.len() <= 7);
            for (index, room) in layout.rooms.iter().enumerate() {
                assert!(room.x >= 1 && room.y >= 1);
                assert!(room.x + room.width < 30 && room.y + room.height < 20);
                for other in &layout.rooms[index + 1..] {
                    assert!(!room.intersects(other), "rooms overlap: {room:?} vs {other:?}");
                }
            }
        }
    }

    #[test]
    fn corridors_connect_every_room_to_the_first() {
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let layout = build_dungeon_layout(&mut rng, 30, 20, 6, &GeneratorConfig::default());
            let Some(first) = layout.rooms.first() else {
                continue;
            };
            let reachable = compute_reachable(&layout.grid, first.center());
            for room in &layout.rooms {
                assert!(reachable.contains(room.center()), "seed {seed}: {room:?} is cut off");
            }
            assert_eq!(reachable.len(), layout.grid.count(TileKind::Floor));
        }
    }

    #[test]
    fn oversized_rooms_are_never_placed() {
        let config = GeneratorConfig { room_width: (40, 50), ..GeneratorConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let layout = build_dungeon_layout(&mut rng, 30, 20, 6, &config);
        assert!(layout.rooms.is_empty());
        assert_eq!(layout.grid.count(TileKind::Floor), 0);
    }

    #[test]
    fn l_corridor_runs_horizontal_then_vertical() {
        let mut grid = Grid::filled(12, 9, TileKind::Wall);
        let rooms = [
            RoomRect { x: 1, y: 1, width: 3, height: 3 },
            RoomRect { x: 7, y: 5, width: 3, height: 3 },
        ];
        carve_room_corridors(&mut grid, &rooms);
        // Horizontal leg on row 2 from x=2 to x=8, vertical leg on column 8.
        for x in 2..=8 {
            assert_eq!(grid.tile_at(Pos { y: 2, x }), TileKind::Floor);
        }
        for y in 2..=6 {
            assert_eq!(grid.tile_at(Pos { y, x: 8 }), TileKind::Floor);
        }
        assert_eq!(grid.tile_at(Pos { y: 6, x: 2 }), TileKind::Wall);
        assert!(rooms[1].contains(Pos { y: 6, x: 8 }));
    }
}
