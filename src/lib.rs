//! A single-player terminal blackjack simulator.
//!
//! The crate provides a [`Round`] state machine covering the initial deal,
//! the player's hit/stand loop, and the dealer's fixed drawing policy, plus a
//! [`Game`] that shuffles a fresh [`Deck`] for each round and drives the
//! terminal prompts. Each side's standing is reported with a simple
//! win-probability heuristic from [`odds`].
//!
//! # Example
//!
//! ```
//! use bjsim::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut round = game.new_round();
//! round.deal_initial().unwrap();
//! if round.state() == GameState::PlayerTurn {
//!     round.stand().unwrap();
//! }
//! round.dealer_play().unwrap();
//! assert!(round.dealer().value() >= 17);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod odds;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, PlayError};
pub use game::{Choice, Game, GameState, Party, Replay, Round};
pub use hand::Hand;
pub use odds::{Label, Odds, win_probability};
pub use options::{GameOptions, ReplayPolicy};
pub use result::{PartyResult, RoundResult};
