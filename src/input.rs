//! Input handling.
//!
//! Translates raw keyboard and touch input into movement directions.

use crate::constants::*;
use crate::movement::Direction;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Map a physical key to a movement direction (arrow keys and WASD).
pub fn direction_from_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::North),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::South),
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::West),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::East),
        _ => None,
    }
}

/// Map a key code string (`"ArrowUp"`, `"KeyW"`, or a bare `"w"`) to a direction.
pub fn direction_from_code(code: &str) -> Option<Direction> {
    match code {
        "ArrowUp" | "KeyW" | "w" | "W" => Some(Direction::North),
        "ArrowDown" | "KeyS" | "s" | "S" => Some(Direction::South),
        "ArrowLeft" | "KeyA" | "a" | "A" => Some(Direction::West),
        "ArrowRight" | "KeyD" | "d" | "D" => Some(Direction::East),
        _ => None,
    }
}

/// Classify a swipe using the default minimum distance.
pub fn direction_from_swipe(dx: f32, dy: f32) -> Option<Direction> {
    direction_from_swipe_with(dx, dy, SWIPE_MIN_DISTANCE)
}

/// Classify a swipe vector. The longer axis wins, horizontal on ties.
pub fn direction_from_swipe_with(dx: f32, dy: f32, min_distance: f32) -> Option<Direction> {
    if dx.abs().max(dy.abs()) < min_distance {
        return None;
    }

    if dx.abs() >= dy.abs() {
        Some(if dx > 0.0 { Direction::East } else { Direction::West })
    } else {
        Some(if dy > 0.0 { Direction::South } else { Direction::North })
    }
}

/// Input state tracking
pub struct InputState {
    pub keys_pressed: HashSet<KeyCode>,
    /// Where the current touch began, if a finger is down
    pub touch_start: Option<(f32, f32)>,
    pub swipe_min_distance: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::with_swipe_distance(SWIPE_MIN_DISTANCE)
    }

    pub fn with_swipe_distance(swipe_min_distance: f32) -> Self {
        Self {
            keys_pressed: HashSet::new(),
            touch_start: None,
            swipe_min_distance,
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.keys_pressed.insert(key);
    }

    pub fn begin_touch(&mut self, x: f32, y: f32) {
        self.touch_start = Some((x, y));
    }

    /// Finish a touch and classify it as a swipe.
    pub fn end_touch(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (sx, sy) = self.touch_start.take()?;
        direction_from_swipe_with(x - sx, y - sy, self.swipe_min_distance)
    }

    /// Drop any buffered input.
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.touch_start = None;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Consume at most one buffered movement key.
///
/// Checked in north, south, west, east order; non-movement keys stay buffered.
pub fn process_keyboard(input: &mut InputState) -> Option<Direction> {
    const ORDER: [(KeyCode, KeyCode); 4] = [
        (KeyCode::KeyW, KeyCode::ArrowUp),
        (KeyCode::KeyS, KeyCode::ArrowDown),
        (KeyCode::KeyA, KeyCode::ArrowLeft),
        (KeyCode::KeyD, KeyCode::ArrowRight),
    ];

    for (letter, arrow) in ORDER {
        // Evaluate both so a held pair is consumed together
        let hit_letter = input.keys_pressed.remove(&letter);
        let hit_arrow = input.keys_pressed.remove(&arrow);
        if hit_letter || hit_arrow {
            return direction_from_key(letter);
        }
    }
    None
}
