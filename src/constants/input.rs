//! Raw input constants.

/// Minimum swipe length (pixels) before a touch gesture counts as a move
pub const SWIPE_MIN_DISTANCE: f32 = 30.0;
