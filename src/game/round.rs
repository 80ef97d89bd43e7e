use crate::error::DealError;
use crate::result::{DealResult, Outcome};

use super::{Game, GameState};

impl<R: rand::Rng> Game<R> {
    /// Starts a new round.
    ///
    /// Replaces the deck with a fresh shuffled one if it is running low, clears
    /// both hands, then deals one face-up card to the dealer and two cards to
    /// the player. A natural 21 resolves the round at once as
    /// [`Outcome::Blackjack`]; the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if the previous round has not been resolved, or if the
    /// deck runs out while dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// let dealt = game.start_round()?;
    /// assert_eq!(game.player_hand().len(), 2);
    /// assert_eq!(dealt.outcome.is_some(), game.state() == GameState::Resolved);
    /// # Ok::<(), bjsolo::DealError>(())
    /// ```
    pub fn start_round(&mut self) -> Result<DealResult, DealError> {
        if self.state.is_round_in_progress() {
            return Err(DealError::RoundInProgress);
        }

        let reshuffled = self.needs_reshuffle();
        if reshuffled {
            self.replace_deck();
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.outcome = None;
        self.round = self.round.wrapping_add(1);
        self.transition(GameState::Dealing);

        let dealer_upcard = self.draw()?;
        self.dealer_hand.add_card(dealer_upcard);

        let first = self.draw()?;
        self.player_hand.add_card(first);
        let second = self.draw()?;
        self.player_hand.add_card(second);

        let player_score = self.player_hand.score();
        tracing::debug!(
            round = self.round,
            %dealer_upcard,
            player_first = %first,
            player_second = %second,
            player_score,
            "dealt starting hands"
        );

        if self.player_hand.is_blackjack() {
            self.finish(Outcome::Blackjack);
        } else {
            self.transition(GameState::PlayerTurn);
        }

        Ok(DealResult {
            dealer_upcard,
            player_cards: [first, second],
            player_score,
            outcome: self.outcome,
            reshuffled,
        })
    }
}
