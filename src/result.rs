//! Round outcomes and the values returned by game operations.

extern crate alloc;

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player was dealt a natural 21.
    Blackjack,
    /// The player went over 21.
    Bust,
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player loses (dealer has the higher score).
    Lose,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win)
    }

    /// Returns the message shown to the player when the round ends.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack!",
            Self::Bust => "Bust!",
            Self::Win => "You Win!",
            Self::Lose => "You Lose!",
            Self::Push => "Push",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealResult {
    /// The dealer's face-up card.
    pub dealer_upcard: Card,
    /// The player's two starting cards.
    pub player_cards: [Card; 2],
    /// The player's starting score.
    pub player_score: u32,
    /// `Some(Outcome::Blackjack)` if the player was dealt a natural.
    pub outcome: Option<Outcome>,
    /// Whether a fresh deck was shuffled before dealing.
    pub reshuffled: bool,
}

/// Result of a player hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    /// The card drawn.
    pub drawn_card: Card,
    /// The player's score after the hit.
    pub score: u32,
    /// `Some(Outcome::Bust)` if the hit took the player over 21.
    pub outcome: Option<Outcome>,
}

/// Result of the player standing and the dealer playing out their hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandResult {
    /// Cards drawn by the dealer, in draw order.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final score.
    pub dealer_score: u32,
    /// The player's final score.
    pub player_score: u32,
    /// The outcome of the round.
    pub outcome: Outcome,
}
