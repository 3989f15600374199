/// Position component - logical grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Where the entity is drawn, in grid units (fractional while animating)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualPosition {
    pub x: f32,
    pub y: f32,
}

impl VisualPosition {
    pub fn at(pos: Position) -> Self {
        Self {
            x: pos.x as f32,
            y: pos.y as f32,
        }
    }
}

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;
