//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during round actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DealError> for ActionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::EmptyDeck => Self::NoCards,
        }
    }
}

/// Errors that can end an interactive round.
#[derive(Debug, Error)]
pub enum PlayError {
    /// The round rejected an action.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Reading input or writing output failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
