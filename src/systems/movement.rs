//! Player movement system.

use crate::components::Position;
use hecs::{Entity, World};

/// Write the entity's logical position.
///
/// Returns `false` if the entity is gone or has no `Position`.
pub fn commit_player_position(world: &mut World, entity: Entity, x: i32, y: i32) -> bool {
    match world.get::<&mut Position>(entity) {
        Ok(mut pos) => {
            pos.x = x;
            pos.y = y;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_updates_position() {
        let mut world = World::new();
        let e = world.spawn((Position::new(1, 1),));
        assert!(commit_player_position(&mut world, e, 2, 1));
        assert_eq!(*world.get::<&Position>(e).unwrap(), Position::new(2, 1));
    }

    #[test]
    fn test_commit_refused_without_position() {
        let mut world = World::new();
        let e = world.spawn((42u32,));
        assert!(!commit_player_position(&mut world, e, 0, 0));

        world.despawn(e).unwrap();
        assert!(!commit_player_position(&mut world, e, 0, 0));
    }
}
