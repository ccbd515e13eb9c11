//! Rectangular tile grid shared by the layout builders, the solvers, and callers.

use std::fmt;

use crate::types::{Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("grid text has no rows")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, found: usize, expected: usize },
    #[error("unknown glyph '{glyph}' at row {row}, column {column}")]
    UnknownGlyph { glyph: char, row: usize, column: usize },
}

impl Grid {
    pub fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self { width, height, tiles: vec![tile; width * height] }
    }

    /// Open floor surrounded by a one-tile wall border.
    pub fn bordered_room(width: usize, height: usize) -> Self {
        let mut grid = Self::filled(width, height, TileKind::Floor);
        if width == 0 || height == 0 {
            return grid;
        }
        for x in 0..width {
            grid.tiles[x] = TileKind::Wall;
            grid.tiles[(height - 1) * width + x] = TileKind::Wall;
        }
        for y in 0..height {
            grid.tiles[y * width] = TileKind::Wall;
            grid.tiles[y * width + (width - 1)] = TileKind::Wall;
        }
        grid
    }

    /// Parses `#` (wall), `.` (floor) and `G` (goal) rows separated by newlines.
    pub fn from_ascii(text: &str) -> Result<Self, GridParseError> {
        let rows: Vec<&str> =
            text.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
        let Some(first) = rows.first() else {
            return Err(GridParseError::Empty);
        };
        let width = first.chars().count();
        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridParseError::RaggedRow { row, found, expected: width });
            }
            for (column, glyph) in line.chars().enumerate() {
                tiles.push(match glyph {
                    '#' => TileKind::Wall,
                    '.' => TileKind::Floor,
                    'G' => TileKind::Goal,
                    _ => return Err(GridParseError::UnknownGlyph { glyph, row, column }),
                });
            }
        }
        Ok(Self { width, height: rows.len(), tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x >= 1
            && pos.y >= 1
            && (pos.x as usize) + 1 < self.width
            && (pos.y as usize) + 1 < self.height
    }

    /// Out-of-bounds positions read as walls.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn is_open(&self, pos: Pos) -> bool {
        self.tile_at(pos).is_open()
    }

    pub(crate) fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    pub fn count(&self, tile: TileKind) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    pub fn goal_positions(&self) -> Vec<Pos> {
        self.positions().filter(|&pos| self.tile_at(pos) == TileKind::Goal).collect()
    }

    pub fn border_is_wall(&self) -> bool {
        self.positions()
            .filter(|&pos| !self.is_interior(pos))
            .all(|pos| self.tile_at(pos) == TileKind::Wall)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
                TileKind::Goal => 2,
            });
        }
        bytes
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|tile| tile.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bordered_room_has_wall_border_and_open_interior() {
        let grid = Grid::bordered_room(6, 5);
        assert!(grid.border_is_wall());
        assert_eq!(grid.count(TileKind::Floor), 4 * 3);
        assert_eq!(grid.tile_at(Pos { y: 1, x: 1 }), TileKind::Floor);
        assert_eq!(grid.tile_at(Pos { y: 2, x: 5 }), TileKind::Wall);
    }

    #[test]
    fn out_of_bounds_reads_are_walls_and_writes_are_ignored() {
        let mut grid = Grid::filled(3, 3, TileKind::Floor);
        assert_eq!(grid.tile_at(Pos { y: 0, x: -1 }), TileKind::Wall);
        assert_eq!(grid.tile_at(Pos { y: 3, x: 0 }), TileKind::Wall);

        grid.set_tile(Pos { y: 0, x: 3 }, TileKind::Goal);
        assert_eq!(grid.count(TileKind::Goal), 0);
        assert_eq!(grid.count(TileKind::Floor), 9);
    }

    #[test]
    fn ascii_round_trips_through_display() {
        let text = "#####\n#..G#\n#####\n";
        let grid = Grid::from_ascii(text).expect("valid grid text should parse");
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.goal_positions(), vec![Pos { y: 1, x: 3 }]);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn ascii_parse_reports_ragged_rows_and_unknown_glyphs() {
        assert_eq!(
            Grid::from_ascii("###\n##\n"),
            Err(GridParseError::RaggedRow { row: 1, found: 2, expected: 3 })
        );
        assert_eq!(
            Grid::from_ascii("#?#"),
            Err(GridParseError::UnknownGlyph { glyph: '?', row: 0, column: 1 })
        );
        assert_eq!(Grid::from_ascii("\n\n"), Err(GridParseError::Empty));
    }
}
