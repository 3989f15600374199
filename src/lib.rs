//! Grid movement and move animation for a dungeon crawler.
//!
//! A move request flows through three layers:
//! - [`movement`] decides whether the step is allowed (pure, stateless)
//! - [`engine`] commits the new cell and starts the animation
//! - [`animation`] tweens the drawn position with an [`easing`] curve, one frame at a time

pub mod animation;
pub mod components;
pub mod config;
pub mod constants;
pub mod easing;
pub mod engine;
pub mod events;
pub mod grid;
pub mod input;
pub mod movement;
pub mod notifications;
pub mod systems;
pub mod tile;

pub use animation::AnimationController;
pub use config::MovementConfig;
pub use easing::{ease, lerp, EasingKind};
pub use engine::GameEngine;
pub use movement::{resolve, valid_directions_from, BlockReason, Direction, MoveOutcome};
