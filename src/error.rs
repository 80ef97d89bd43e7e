//! Error types for game operations.

use thiserror::Error;

use crate::game::GameState;

/// Drawing from a deck that has no cards left.
///
/// The reshuffle policy keeps enough cards in the deck for a normal round, so
/// this only surfaces when that policy was bypassed or a round ran unusually
/// long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is only legal during the player's turn.
    #[error("action is not legal in the {state:?} state")]
    IllegalAction {
        /// State the game was in when the action was attempted.
        state: GameState,
    },
    /// The deck ran out mid-round; the round has been abandoned.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The current round has not been resolved yet.
    #[error("the current round is still in progress")]
    RoundInProgress,
    /// The deck ran out while dealing; the round has been abandoned.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Errors that can occur when parsing a card such as `"9H"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is not a rank followed by a suit.
    #[error("card must be a rank followed by a suit")]
    InvalidLength,
    /// Unknown rank symbol.
    #[error("unknown rank symbol")]
    InvalidRank,
    /// Unknown suit symbol.
    #[error("unknown suit symbol")]
    InvalidSuit,
}
