//! Core game state - owns the simulation data the movement core reads.

use crate::components::{Player, Position, VisualPosition};
use crate::movement::{GameStateQuery, PositionCommit};
use crate::systems;

use hecs::{Entity, World};

/// Core game state - the ECS world plus the flags that gate movement.
pub struct GameState {
    /// The ECS world
    pub world: World,

    /// Player entity handle
    pub player_entity: Entity,

    /// Current floor number
    pub current_floor: u32,

    /// Set while the level is being swapped out
    pub transitioning_level: bool,

    /// Set by the combat layer while an encounter is running
    pub combat_active: bool,
}

impl GameState {
    /// Create a world with the player standing on `spawn`.
    pub fn new(spawn: (i32, i32)) -> Self {
        let mut world = World::new();
        let pos = Position::new(spawn.0, spawn.1);
        let player_entity = world.spawn((Player, pos, VisualPosition::at(pos)));

        Self {
            world,
            player_entity,
            current_floor: 0,
            transitioning_level: false,
            combat_active: false,
        }
    }

    /// Move the player instantly, visual position included.
    pub fn teleport_player(&mut self, x: i32, y: i32) -> bool {
        let pos = Position::new(x, y);
        match self
            .world
            .query_one_mut::<(&mut Position, &mut VisualPosition)>(self.player_entity)
        {
            Ok((p, vis)) => {
                *p = pos;
                *vis = VisualPosition::at(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// The player's logical cell, or `None` once the player entity lost its `Position`.
    pub fn player_cell(&self) -> Option<(i32, i32)> {
        self.world
            .get::<&Position>(self.player_entity)
            .ok()
            .map(|p| (p.x, p.y))
    }

    pub fn player_visual_position(&self) -> Option<VisualPosition> {
        self.world.get::<&VisualPosition>(self.player_entity).ok().map(|v| *v)
    }
}

impl GameStateQuery for GameState {
    fn is_transitioning_level(&self) -> bool {
        self.transitioning_level
    }

    fn is_combat_active(&self) -> bool {
        self.combat_active
    }

    /// Callers check [`GameState::player_cell`] first; a missing player reads as the origin.
    fn player_position(&self) -> (i32, i32) {
        self.player_cell().unwrap_or((0, 0))
    }
}

impl PositionCommit for GameState {
    fn commit_position(&mut self, x: i32, y: i32) -> bool {
        systems::commit_player_position(&mut self.world, self.player_entity, x, y)
    }
}
