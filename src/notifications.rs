//! Player-facing feedback for refused moves.
//!
//! The engine is handed one `MoveFeedback` at construction. Games without a
//! message log use [`NoFeedback`].

use crate::movement::BlockReason;
use tracing::info;

pub const CANNOT_MOVE_MESSAGE: &str = "You can't move that way.";

/// Receives refused moves the player should hear about.
pub trait MoveFeedback {
    fn cannot_move(&mut self, reason: BlockReason);
}

/// Discards all feedback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl MoveFeedback for NoFeedback {
    fn cannot_move(&mut self, _reason: BlockReason) {}
}

/// Writes feedback to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFeedback;

impl MoveFeedback for LogFeedback {
    fn cannot_move(&mut self, reason: BlockReason) {
        info!(?reason, "{}", CANNOT_MOVE_MESSAGE);
    }
}

/// Collects messages in memory (message log panels, tests).
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    pub messages: Vec<String>,
}

impl MoveFeedback for MessageLog {
    fn cannot_move(&mut self, _reason: BlockReason) {
        self.messages.push(CANNOT_MOVE_MESSAGE.to_string());
    }
}
