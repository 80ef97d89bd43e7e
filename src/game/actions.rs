use crate::error::ActionError;
use crate::result::{HitResult, Outcome, StandResult};

use super::{Game, GameState};

impl<R: rand::Rng> Game<R> {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.state {
            GameState::PlayerTurn => Ok(()),
            state => Err(ActionError::IllegalAction { state }),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 resolves the round as [`Outcome::Bust`] without the
    /// dealer playing. Otherwise it stays the player's turn, including at
    /// exactly 21.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn (the game is left
    /// untouched), or if the deck is empty.
    pub fn hit(&mut self) -> Result<HitResult, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player_hand.add_card(card);

        let score = self.player_hand.score();
        tracing::debug!(round = self.round, %card, score, "player hits");

        if self.player_hand.is_bust() {
            self.finish(Outcome::Bust);
        }

        Ok(HitResult {
            drawn_card: card,
            score,
            outcome: self.outcome,
        })
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out their hand and the round is resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn (the game is left
    /// untouched), or if the deck runs out during the dealer's turn.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 3);
    /// game.start_round()?;
    /// if game.state() == GameState::PlayerTurn {
    ///     let result = game.stand()?;
    ///     assert!(result.dealer_score >= 17);
    ///     assert_eq!(game.outcome(), Some(result.outcome));
    /// }
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn stand(&mut self) -> Result<StandResult, ActionError> {
        self.ensure_player_turn()?;

        tracing::debug!(
            round = self.round,
            score = self.player_hand.score(),
            "player stands"
        );
        self.transition(GameState::DealerTurn);

        let dealer_cards = self.dealer_play()?;
        let outcome = self.resolve();

        Ok(StandResult {
            dealer_cards,
            dealer_score: self.dealer_hand.score(),
            player_score: self.player_hand.score(),
            outcome,
        })
    }
}
