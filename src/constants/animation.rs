//! Animation-related constants.

/// Default duration of a one-tile move animation (milliseconds)
pub const MOVE_ANIMATION_DURATION_MS: f32 = 200.0;
/// Shortest allowed move animation (milliseconds)
pub const MIN_ANIMATION_DURATION_MS: f32 = 100.0;
/// Frame step used by the headless demo driver (milliseconds, ~60 FPS)
pub const DEMO_FRAME_MS: f32 = 16.0;
/// Longest allowed move animation (milliseconds)
pub const MAX_ANIMATION_DURATION_MS: f32 = 10_000.0;
