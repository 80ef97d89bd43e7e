//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The best possible score; anything above it is a bust.
pub const BLACKJACK: u32 = 21;

fn evaluate_cards(cards: &[Card]) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut soft_aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            soft_aces += 1;
        }
        value += u32::from(card.value());
    }

    while value > BLACKJACK && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }

    (value, soft_aces > 0)
}

/// Returns the best score for the given cards.
///
/// Every ace starts at 11. While the total is over 21, one ace at a time is
/// lowered to 1 until the hand is no longer bust or no soft ace is left.
///
/// ```
/// use bjsolo::Card;
/// use bjsolo::hand::evaluate;
///
/// let cards: [Card; 4] = ["AH", "AS", "AD", "9C"].map(|c| c.parse().unwrap());
/// assert_eq!(evaluate(&cards), 12);
/// assert_eq!(evaluate(&[]), 0);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// A hand of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the score of the hand.
    #[must_use]
    pub fn score(&self) -> u32 {
        evaluate(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
