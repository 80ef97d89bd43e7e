//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] session that deals from a shuffled 52-card
//! deck, scores hands with flexible aces, lets the player hit or stand, plays
//! the dealer out to 17, and decides the outcome of each round.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_round()?;
//!
//! while game.state() == GameState::PlayerTurn && game.player_hand().score() < 17 {
//!     game.hit()?;
//! }
//! if game.state() == GameState::PlayerTurn {
//!     game.stand()?;
//! }
//!
//! assert!(game.outcome().is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, EmptyDeckError, ParseCardError, ReshuffleError};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, Hand, evaluate};
pub use options::{DEALER_STANDS_ON, GameOptions};
pub use result::{DealResult, HitResult, Outcome, StandResult};
