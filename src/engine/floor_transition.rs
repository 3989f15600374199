//! Floor transitions for multi-floor dungeons.
//!
//! While a transition is in progress every move request is refused with
//! `BlockReason::Transitioning`.

use crate::events::GameEvent;
use crate::grid::Grid;
use crate::movement::GameStateQuery;
use crate::notifications::MoveFeedback;
use crate::tile::TileType;

use super::{GameEngine, GameState};
use tracing::{info, warn};

/// Whether the player is standing on stairs down.
pub fn can_descend(state: &GameState, grid: &Grid) -> bool {
    let (x, y) = state.player_position();
    grid.get(x, y)
        .is_some_and(|tile| tile.tile_type == TileType::StairsDown)
}

impl<F: MoveFeedback> GameEngine<F> {
    /// Freeze movement while the next floor is prepared.
    ///
    /// A move in flight is snapped to its destination without completing.
    pub fn begin_floor_transition(&mut self) {
        self.state.transitioning_level = true;
        self.cancel_move();
        self.input.clear();
    }

    /// Install the next floor, place the player on `spawn` and unfreeze movement.
    ///
    /// Returns the floor number the player is on afterwards. If the player
    /// cannot be placed the floor number is unchanged and no event is emitted.
    pub fn complete_floor_transition(&mut self, grid: Grid, spawn: (i32, i32)) -> u32 {
        self.grid = Some(grid);
        self.state.transitioning_level = false;

        if !self.state.teleport_player(spawn.0, spawn.1) {
            warn!(?spawn, "player could not be placed on the new floor");
            return self.state.current_floor;
        }
        self.state.current_floor += 1;
        self.mark_explored();

        let floor = self.state.current_floor;
        info!(floor, ?spawn, "entered floor");
        self.events.push(GameEvent::FloorChanged { floor });
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MovementConfig;
    use crate::movement::{BlockReason, MoveOutcome};

    fn engine() -> GameEngine {
        let grid = Grid::from_ascii(&["#####", "#..>#", "#####"]).unwrap();
        GameEngine::new(&MovementConfig::default(), Some(grid), (1, 1))
    }

    #[test]
    fn test_can_descend_only_on_stairs() {
        let mut engine = engine();
        assert!(!can_descend(&engine.state, engine.grid.as_ref().unwrap()));
        engine.state.teleport_player(3, 1);
        assert!(can_descend(&engine.state, engine.grid.as_ref().unwrap()));
    }

    #[test]
    fn test_transition_blocks_then_releases() {
        let mut engine = engine();
        engine.request_move("east");
        assert!(engine.is_busy());

        engine.begin_floor_transition();
        assert!(!engine.is_busy());
        assert_eq!(engine.request_move("east"), MoveOutcome::Blocked(BlockReason::Transitioning));

        let next = Grid::from_ascii(&["####", "#<.#", "####"]).unwrap();
        let floor = engine.complete_floor_transition(next, (1, 1));
        assert_eq!(floor, 1);
        assert_eq!(engine.state.player_position(), (1, 1));
        assert!(engine.request_move("east").is_allowed());

        let events: Vec<_> = engine.events.drain().collect();
        assert!(events.contains(&GameEvent::FloorChanged { floor: 1 }));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::MoveFinished { .. })));
    }

    #[test]
    fn test_failed_placement_keeps_floor() {
        let mut engine = engine();
        engine.begin_floor_transition();
        let player = engine.state.player_entity;
        engine.state.world.despawn(player).unwrap();

        let next = Grid::from_ascii(&["####", "#<.#", "####"]).unwrap();
        assert_eq!(engine.complete_floor_transition(next, (1, 1)), 0);
        assert_eq!(engine.state.current_floor, 0);
        assert!(!engine.state.transitioning_level);
        assert!(!engine.events.drain().any(|e| matches!(e, GameEvent::FloorChanged { .. })));
    }
}
