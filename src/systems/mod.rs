//! ECS systems that connect the movement core to the world.
//!
//! - `movement`: committing logical positions
//! - `animation`: copying the animated position onto render components

pub mod animation;
pub mod movement;

pub use animation::sync_visual_position;
pub use movement::commit_player_position;
