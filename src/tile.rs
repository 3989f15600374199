/// Terrain kinds that make up a dungeon floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    Empty,
    Floor,
    Wall,
    Door,
    StairsDown,
    StairsUp,
}

impl TileType {
    /// Map-file glyph for this tile
    pub fn glyph(&self) -> char {
        match self {
            TileType::Empty => ' ',
            TileType::Floor => '.',
            TileType::Wall => '#',
            TileType::Door => '+',
            TileType::StairsDown => '>',
            TileType::StairsUp => '<',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        let tile = match glyph {
            ' ' => TileType::Empty,
            '.' => TileType::Floor,
            '#' => TileType::Wall,
            '+' => TileType::Door,
            '>' => TileType::StairsDown,
            '<' => TileType::StairsUp,
            _ => return None,
        };
        Some(tile)
    }

    pub fn is_walkable(&self) -> bool {
        matches!(
            self,
            TileType::Floor
                | TileType::Door
                | TileType::StairsDown
                | TileType::StairsUp
        )
    }
}

#[derive(Debug, Clone)]
pub struct Tile {
    pub tile_type: TileType,
    /// Set once the player has stood on this tile
    pub explored: bool,
}

impl Tile {
    pub fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            explored: false,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(TileType::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_round_trip() {
        for glyph in [' ', '.', '#', '+', '>', '<'] {
            let tile = TileType::from_glyph(glyph).unwrap();
            assert_eq!(tile.glyph(), glyph);
        }
        assert_eq!(TileType::from_glyph('x'), None);
        assert_eq!(TileType::from_glyph('~'), None);
    }

    #[test]
    fn test_walls_and_void_block() {
        assert!(!TileType::Wall.is_walkable());
        assert!(!TileType::Empty.is_walkable());
        for tile in [TileType::Floor, TileType::Door, TileType::StairsDown, TileType::StairsUp] {
            assert!(tile.is_walkable(), "{tile:?}");
        }
    }
}
