use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::EmptyDeckError;
use crate::options::DEALER_STANDS_ON;
use crate::result::Outcome;

use super::Game;

impl<R: rand::Rng> Game<R> {
    /// Dealer draws until reaching 17 or higher.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, EmptyDeckError> {
        let mut drawn_cards = Vec::new();

        while self.dealer_hand.score() < DEALER_STANDS_ON {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
            drawn_cards.push(card);

            tracing::debug!(
                round = self.round,
                %card,
                score = self.dealer_hand.score(),
                "dealer draws"
            );
        }

        Ok(drawn_cards)
    }

    /// Compares the final hands and ends the round.
    pub(super) fn resolve(&mut self) -> Outcome {
        let outcome = if self.dealer_hand.is_bust() {
            Outcome::Win
        } else {
            match self.dealer_hand.score().cmp(&self.player_hand.score()) {
                Ordering::Greater => Outcome::Lose,
                Ordering::Less => Outcome::Win,
                Ordering::Equal => Outcome::Push,
            }
        };

        self.finish(outcome);
        outcome
    }
}
