//! Game engine - the calling layer around the movement core.
//!
//! The engine handles:
//! - Game state (world, grid, floor number, gating flags)
//! - Input translation (keys, key codes, swipes)
//! - Committing allowed moves and animating them
//! - Event emission and player feedback
//!
//! The application shell only forwards input and calls [`GameEngine::frame`]
//! once per rendered frame.

pub mod floor_transition;
mod game_state;

pub use floor_transition::can_descend;
pub use game_state::GameState;

use crate::animation::AnimationController;
use crate::config::MovementConfig;
use crate::events::{EventQueue, GameEvent};
use crate::grid::Grid;
use crate::input::{self, InputState};
use crate::movement::{self, BlockReason, Direction, GameStateQuery, MoveOutcome, PositionCommit};
use crate::notifications::{MoveFeedback, NoFeedback};
use crate::systems;

use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, warn};
use winit::keyboard::KeyCode;

/// The game engine - owns the state the movement core reads and writes.
pub struct GameEngine<F: MoveFeedback = NoFeedback> {
    /// Core game state (world, player, flags)
    pub state: GameState,

    /// Current floor grid - None while no level is loaded
    pub grid: Option<Grid>,

    /// The single movement animation
    pub animation: AnimationController,

    /// Input state tracking
    pub input: InputState,

    /// Event queue for game events
    pub events: EventQueue,

    /// Where refused moves are reported
    pub feedback: F,

    /// Held from commit until the move animation completes
    input_locked: Rc<Cell<bool>>,
}

impl GameEngine<NoFeedback> {
    pub fn new(config: &MovementConfig, grid: Option<Grid>, spawn: (i32, i32)) -> Self {
        Self::with_feedback(config, grid, spawn, NoFeedback)
    }
}

impl<F: MoveFeedback> GameEngine<F> {
    pub fn with_feedback(config: &MovementConfig, grid: Option<Grid>, spawn: (i32, i32), feedback: F) -> Self {
        let mut engine = Self {
            state: GameState::new(spawn),
            grid,
            animation: AnimationController::with_settings(config.move_duration_ms, config.easing),
            input: InputState::with_swipe_distance(config.swipe_min_distance),
            events: EventQueue::new(),
            feedback,
            input_locked: Rc::new(Cell::new(false)),
        };
        engine.mark_explored();
        engine
    }

    /// True from the moment a move is committed until its animation ends.
    pub fn is_busy(&self) -> bool {
        self.animation.is_animating() || self.input_locked.get()
    }

    /// Handle a symbolic direction (`"north"`, `"Left"`, ...).
    pub fn request_move(&mut self, direction: &str) -> MoveOutcome {
        let outcome = if self.state.player_cell().is_none() {
            MoveOutcome::Blocked(BlockReason::NoPlayer)
        } else {
            movement::resolve(direction, self.grid.as_ref(), &self.state, self.is_busy())
        };
        self.apply(outcome)
    }

    pub fn request_direction(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = if self.state.player_cell().is_none() {
            MoveOutcome::Blocked(BlockReason::NoPlayer)
        } else {
            movement::resolve_direction(direction, self.grid.as_ref(), &self.state, self.is_busy())
        };
        self.apply(outcome)
    }

    /// Handle a key press. Non-movement keys return `None`.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<MoveOutcome> {
        input::direction_from_key(key).map(|dir| self.request_direction(dir))
    }

    /// Handle a key code string such as `"ArrowUp"` or `"KeyD"`.
    pub fn handle_key_code(&mut self, code: &str) -> Option<MoveOutcome> {
        input::direction_from_code(code).map(|dir| self.request_direction(dir))
    }

    /// Handle a completed swipe. Gestures below the threshold return `None`.
    pub fn handle_swipe(&mut self, dx: f32, dy: f32) -> Option<MoveOutcome> {
        input::direction_from_swipe_with(dx, dy, self.input.swipe_min_distance)
            .map(|dir| self.request_direction(dir))
    }

    pub fn begin_touch(&mut self, x: f32, y: f32) {
        self.input.begin_touch(x, y);
    }

    pub fn end_touch(&mut self, x: f32, y: f32) -> Option<MoveOutcome> {
        self.input.end_touch(x, y).map(|dir| self.request_direction(dir))
    }

    /// Advance one rendered frame.
    ///
    /// Buffered movement keys are only consumed while no move is in flight, so
    /// a key pressed mid-animation runs once the animation lands.
    pub fn frame(&mut self, dt_ms: f32) {
        puffin::profile_function!();

        if !self.is_busy() {
            if let Some(dir) = input::process_keyboard(&mut self.input) {
                self.request_direction(dir);
            }
        }

        let was_animating = self.animation.is_animating();
        self.animation.update(dt_ms);
        systems::sync_visual_position(&mut self.state.world, self.state.player_entity, &self.animation);

        if was_animating && !self.animation.is_animating() {
            let position = self.state.player_position();
            debug!(?position, "move finished");
            self.events.push(GameEvent::MoveFinished { position });
        }
    }

    /// Directions the player could step in from their current cell.
    pub fn hints(&self) -> Vec<Direction> {
        match (&self.grid, self.state.player_cell()) {
            (Some(grid), Some((x, y))) => movement::valid_directions_from(x, y, grid),
            _ => Vec::new(),
        }
    }

    pub fn set_combat_active(&mut self, active: bool) {
        self.state.combat_active = active;
    }

    fn apply(&mut self, outcome: MoveOutcome) -> MoveOutcome {
        match outcome {
            MoveOutcome::Allowed { direction, from, to } => {
                if !self.state.commit_position(to.0, to.1) {
                    warn!(?from, ?to, "player position commit refused, not animating");
                    return self.apply(MoveOutcome::Blocked(BlockReason::NoPlayer));
                }
                self.mark_explored();

                self.input_locked.set(true);
                let lock = Rc::clone(&self.input_locked);
                self.animation.start(
                    Vec2::new(from.0 as f32, from.1 as f32),
                    Vec2::new(to.0 as f32, to.1 as f32),
                    Some(Box::new(move || lock.set(false))),
                );

                info!(%direction, ?from, ?to, "player moved");
                self.events.push(GameEvent::MoveStarted { direction, from, to });
            }
            MoveOutcome::Blocked(reason) => {
                if reason == BlockReason::NoPlayer {
                    warn!("player entity has no position, move refused");
                } else {
                    debug!(?reason, "move blocked");
                }
                if reason.is_player_facing() {
                    self.feedback.cannot_move(reason);
                }
                self.events.push(GameEvent::MoveBlocked { reason });
            }
        }
        outcome
    }

    fn mark_explored(&mut self) {
        let Some((x, y)) = self.state.player_cell() else {
            return;
        };
        if let Some(tile) = self.grid.as_mut().and_then(|grid| grid.get_mut(x, y)) {
            tile.explored = true;
        }
    }

    /// Cancel any move in flight, snapping to its destination.
    pub(crate) fn cancel_move(&mut self) {
        self.animation.stop();
        self.input_locked.set(false);
        systems::sync_visual_position(&mut self.state.world, self.state.player_entity, &self.animation);
    }
}
