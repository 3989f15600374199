use crate::movement::GridQuery;
use crate::tile::{Tile, TileType};
use thiserror::Error;

/// Errors from parsing an ASCII floor map.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridParseError {
    #[error("map has no rows")]
    Empty,
    #[error("row {row} is {found} cells wide, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("unknown tile {glyph:?} at ({x}, {y})")]
    UnknownTile { glyph: char, x: usize, y: usize },
}

pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
}

impl Grid {
    /// A grid filled with one tile type.
    pub fn filled(width: usize, height: usize, tile_type: TileType) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::new(tile_type); width * height],
        }
    }

    /// Parse a floor from rows of glyphs (see [`TileType::from_glyph`]).
    pub fn from_ascii(rows: &[&str]) -> Result<Self, GridParseError> {
        let width = rows.first().ok_or(GridParseError::Empty)?.chars().count();
        let mut grid = Self::filled(width, rows.len(), TileType::Empty);

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridParseError::Ragged { row: y, expected: width, found });
            }
            for (x, glyph) in row.chars().enumerate() {
                let tile_type =
                    TileType::from_glyph(glyph).ok_or(GridParseError::UnknownTile { glyph, x, y })?;
                grid.tiles[y * width + x] = Tile::new(tile_type);
            }
        }

        Ok(grid)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&self.tiles[y as usize * self.width + x as usize])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&mut self.tiles[y as usize * self.width + x as usize])
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|tile| tile.tile_type.is_walkable())
    }
}

impl GridQuery for Grid {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Orthogonal neighbours are connected when both tiles are walkable.
    fn can_move_to(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        let adjacent = (to_x - from_x).abs() + (to_y - from_y).abs() == 1;
        adjacent && self.is_walkable(from_x, from_y) && self.is_walkable(to_x, to_y)
    }
}
