//! Error types for the game engine and history boundary.
//!
//! All errors are raised synchronously to the immediate caller; the core
//! never retries or swallows them. Retries, if any, belong to the driver
//! or to the History Store's I/O layer.

use thiserror::Error;

use crate::history::RecordId;

/// Errors produced by the game engine and the history boundary.
#[derive(Debug, Error)]
pub enum GameError {
    /// Deck size validation failed: the deck must split evenly between
    /// two players.
    #[error("deck size must be a positive even integer, got {0}")]
    InvalidDeckSize(usize),

    /// Dealing was attempted on a game that already has cards.
    #[error("cards have already been dealt for this game")]
    AlreadyDealt,

    /// A round was played or applied after the game ended.
    #[error("this game has ended, it is not possible to play another round")]
    GameOver,

    /// A winner was requested before the game ended.
    #[error("this game is not over yet, it is not possible to select a winner")]
    GameInProgress,

    /// A round no longer matches the players' current top cards.
    #[error("round does not match the players' current top cards")]
    StaleRound,

    /// The tie-break policy could not determine a winner.
    #[error("game is an unresolvable tie, no winner can be selected")]
    UnresolvableTie,

    /// A history query referenced a record that does not exist.
    #[error("no history record found with id {0}")]
    RecordNotFound(RecordId),

    /// The asynchronous persistence task panicked or was cancelled
    /// before completing.
    #[error("history persistence task failed or was cancelled")]
    PersistenceInterrupted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::InvalidDeckSize(51).to_string(),
            "deck size must be a positive even integer, got 51"
        );
        assert!(GameError::GameOver.to_string().contains("has ended"));
        assert!(GameError::GameInProgress.to_string().contains("not over yet"));
        assert!(GameError::UnresolvableTie.to_string().contains("unresolvable tie"));
    }
}
