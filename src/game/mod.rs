//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{EmptyDeckError, ReshuffleError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Outcome;

mod actions;
mod dealer;
mod round;
pub mod state;

pub use state::GameState;

/// Cards needed for the initial deal: one for the dealer, two for the player.
pub const INITIAL_DEAL_CARDS: usize = 3;

/// A single-player blackjack session against an automated dealer.
///
/// The game owns the deck, both hands, and the random source used for
/// shuffling. Independent games share nothing, and a seeded or injected
/// random source makes a session reproducible.
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// Cards left in the deck.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Outcome of the current round, once decided.
    outcome: Option<Outcome>,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: Hand,
    /// Number of rounds dealt so far.
    round: u32,
    /// Random number generator.
    rng: R,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Idle);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game that shuffles with the given random source.
    #[must_use]
    pub fn with_rng(options: GameOptions, mut rng: R) -> Self {
        let deck = Deck::shuffled(&mut rng);
        Self::with_deck(options, deck, rng)
    }

    /// Creates a new game that deals from `deck` as given, without shuffling
    /// it first.
    ///
    /// The random source is used for every later reshuffle.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck, rng: R) -> Self {
        Self {
            deck,
            options,
            state: GameState::Idle,
            outcome: None,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            round: 0,
            rng,
        }
    }

    /// Replaces the deck with a fresh shuffled 52-card deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress (not in `Idle` or
    /// `Resolved` state).
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state.is_round_in_progress() {
            return Err(ReshuffleError::InvalidState);
        }

        self.replace_deck();
        Ok(())
    }

    /// Returns whether the deck is running low enough to be replaced before
    /// the next deal.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        let threshold = self.options.reshuffle_threshold.max(INITIAL_DEAL_CARDS);
        self.deck.len() < threshold
    }

    /// Checks the remaining cards and reshuffles if needed.
    ///
    /// Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn replace_deck(&mut self) {
        let discarded = self.deck.len();
        self.deck = Deck::shuffled(&mut self.rng);
        tracing::info!(round = self.round, discarded, "shuffled a fresh deck");
    }

    /// Draws a card from the deck.
    ///
    /// Running out of cards abandons the current round.
    fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.deck.draw().inspect_err(|_| {
            tracing::error!(
                round = self.round,
                state = ?self.state,
                "deck ran out mid-round, abandoning the round"
            );
            self.state = GameState::Resolved;
            self.outcome = None;
        })
    }

    fn transition(&mut self, next: GameState) {
        tracing::debug!(round = self.round, from = ?self.state, to = ?next, "state transition");
        self.state = next;
    }

    /// Ends the round with the given outcome.
    fn finish(&mut self, outcome: Outcome) {
        self.transition(GameState::Resolved);
        self.outcome = Some(outcome);
        tracing::info!(
            round = self.round,
            player_score = self.player_hand.score(),
            dealer_score = self.dealer_hand.score(),
            %outcome,
            "round resolved"
        );
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the outcome of the current round, or `None` while it is still
    /// being played (or if it was abandoned).
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of rounds dealt so far, wrapping at `u32::MAX`.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }
}
