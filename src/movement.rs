//! Movement resolution.
//!
//! Decides whether a directional move request may proceed, given the grid and
//! the current game state. Resolution is a pure function of its inputs: it
//! never mutates state, and committing the move is left to the caller.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// The four cardinal directions a player can step in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Grid offset for one step (y grows southward).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Cell one step from `(x, y)` in this direction.
    pub fn step_from(&self, x: i32, y: i32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A direction string that names none of the cardinal directions or aliases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction: {0:?}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Case-insensitive; accepts `up`/`down`/`left`/`right` as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, Direction); 8] = [
            ("north", Direction::North),
            ("up", Direction::North),
            ("south", Direction::South),
            ("down", Direction::South),
            ("west", Direction::West),
            ("left", Direction::West),
            ("east", Direction::East),
            ("right", Direction::East),
        ];
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, dir)| dir)
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

/// Read-only view of the dungeon grid's topology.
pub trait GridQuery {
    /// `(width, height)` in cells.
    fn size(&self) -> (usize, usize);

    /// Whether a traversable passage joins the two cells.
    fn can_move_to(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool;

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        let (width, height) = self.size();
        x >= 0 && y >= 0 && (x as i64) < width as i64 && (y as i64) < height as i64
    }
}

/// Read-only view of the game flags that gate movement.
pub trait GameStateQuery {
    fn is_transitioning_level(&self) -> bool;
    fn is_combat_active(&self) -> bool;
    fn player_position(&self) -> (i32, i32);
}

/// Writes the player's logical position. Returns `false` if the write was refused.
pub trait PositionCommit {
    fn commit_position(&mut self, x: i32, y: i32) -> bool;
}

/// Why a move request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    Transitioning,
    CombatActive,
    Animating,
    NoGrid,
    UnknownDirection,
    OutOfBounds,
    Disconnected,
    /// The player entity is gone; raised by the engine, never by [`resolve`]
    NoPlayer,
}

impl BlockReason {
    /// Reasons the player should be told about ("can't move that way").
    pub fn is_player_facing(&self) -> bool {
        matches!(self, BlockReason::OutOfBounds | BlockReason::Disconnected)
    }

    /// Reasons that point at a caller bug rather than game state.
    pub fn is_developer_error(&self) -> bool {
        matches!(self, BlockReason::UnknownDirection | BlockReason::NoPlayer)
    }
}

/// Result of resolving a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Allowed {
        direction: Direction,
        from: (i32, i32),
        to: (i32, i32),
    },
    Blocked(BlockReason),
}

impl MoveOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, MoveOutcome::Allowed { .. })
    }
}

/// Resolve a symbolic direction string into a move outcome.
///
/// Guards run in a fixed order and the first failure wins: level transition,
/// combat, running animation, missing grid, unknown direction, bounds, then
/// connectivity.
pub fn resolve<G, S>(direction: &str, grid: Option<&G>, state: &S, animating: bool) -> MoveOutcome
where
    G: GridQuery + ?Sized,
    S: GameStateQuery + ?Sized,
{
    let grid = match check_state(grid, state, animating) {
        Ok(grid) => grid,
        Err(reason) => return MoveOutcome::Blocked(reason),
    };

    let direction = match direction.parse::<Direction>() {
        Ok(dir) => dir,
        Err(err) => {
            warn!("{}", err);
            return MoveOutcome::Blocked(BlockReason::UnknownDirection);
        }
    };

    step(grid, state.player_position(), direction)
}

/// Resolve an already-typed direction. Same guard order as [`resolve`].
pub fn resolve_direction<G, S>(direction: Direction, grid: Option<&G>, state: &S, animating: bool) -> MoveOutcome
where
    G: GridQuery + ?Sized,
    S: GameStateQuery + ?Sized,
{
    match check_state(grid, state, animating) {
        Ok(grid) => step(grid, state.player_position(), direction),
        Err(reason) => MoveOutcome::Blocked(reason),
    }
}

fn check_state<'g, G, S>(grid: Option<&'g G>, state: &S, animating: bool) -> Result<&'g G, BlockReason>
where
    G: GridQuery + ?Sized,
    S: GameStateQuery + ?Sized,
{
    if state.is_transitioning_level() {
        return Err(BlockReason::Transitioning);
    }
    if state.is_combat_active() {
        return Err(BlockReason::CombatActive);
    }
    if animating {
        return Err(BlockReason::Animating);
    }
    grid.ok_or(BlockReason::NoGrid)
}

/// Bounds and connectivity checks for one step from `from`.
fn step<G: GridQuery + ?Sized>(grid: &G, from: (i32, i32), direction: Direction) -> MoveOutcome {
    let to = direction.step_from(from.0, from.1);

    if !grid.in_bounds(to.0, to.1) {
        return MoveOutcome::Blocked(BlockReason::OutOfBounds);
    }
    if !grid.can_move_to(from.0, from.1, to.0, to.1) {
        return MoveOutcome::Blocked(BlockReason::Disconnected);
    }

    MoveOutcome::Allowed { direction, from, to }
}

/// Directions that pass the bounds and connectivity checks from `(x, y)`.
///
/// Useful for movement hints; game-state guards are not considered.
pub fn valid_directions_from<G: GridQuery + ?Sized>(x: i32, y: i32, grid: &G) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|dir| step(grid, (x, y), *dir).is_allowed())
        .collect()
}
