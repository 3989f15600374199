//! Animation systems for visual positions.

use crate::animation::AnimationController;
use crate::components::{Position, VisualPosition};
use hecs::{Entity, World};

/// Copy the controller's animated point onto the entity's `VisualPosition`.
///
/// While idle the visual position rests on the logical `Position`.
pub fn sync_visual_position(world: &mut World, entity: Entity, animation: &AnimationController) {
    let Ok((pos, vis_pos)) = world.query_one_mut::<(&Position, &mut VisualPosition)>(entity) else {
        return;
    };

    if animation.is_animating() {
        let current = animation.current_position();
        vis_pos.x = current.x;
        vis_pos.y = current.y;
    } else {
        *vis_pos = VisualPosition::at(*pos);
    }
}
