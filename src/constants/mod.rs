//! Tuning constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod animation;
mod dungeon;
mod input;

pub use animation::*;
pub use dungeon::*;
pub use input::*;
