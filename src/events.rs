//! Game event system for decoupled communication between systems.
//!
//! The engine emits events as moves are accepted, refused and finished; UI,
//! audio and hint layers drain them at the end of the frame.

use crate::movement::{BlockReason, Direction};

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A move was committed and its animation started
    MoveStarted {
        direction: Direction,
        from: (i32, i32),
        to: (i32, i32),
    },
    /// A move request was refused
    MoveBlocked { reason: BlockReason },
    /// The move animation reached its destination
    MoveFinished { position: (i32, i32) },
    /// The player arrived on a new floor
    FloorChanged { floor: u32 },
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }
}
