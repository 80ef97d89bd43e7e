//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No round has been dealt yet.
    Idle,
    /// Dealing the starting cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended; a new round can be started.
    Resolved,
}

impl GameState {
    /// Returns whether a round is underway and must be resolved before
    /// another one can start.
    #[must_use]
    pub const fn is_round_in_progress(self) -> bool {
        !matches!(self, Self::Idle | Self::Resolved)
    }
}
