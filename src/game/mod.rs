//! Game engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod console;
mod dealer;
mod session;
pub mod state;

pub use actions::{Choice, Replay};
pub use dealer::{DEALER_STANDS_ON, dealer_must_draw};
pub use state::{GameState, Party};

/// One round of blackjack between the player and the dealer.
///
/// The round owns its deck and both hands. Drive it with
/// [`Round::deal_initial`], then [`Round::hit`] / [`Round::stand`], then
/// [`Round::dealer_play`], or hand it to [`Round::play`] for the interactive
/// terminal flow.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    state: GameState,
    stand_on_soft_17: bool,
    dealer_draws: usize,
}

impl Round {
    /// Creates a round that deals from `deck` as given, without shuffling.
    #[must_use]
    pub const fn new(deck: Deck, options: &GameOptions) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: GameState::Setup,
            stand_on_soft_17: options.stand_on_soft_17,
            dealer_draws: 0,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the hand held by `party`.
    #[must_use]
    pub const fn hand(&self, party: Party) -> &Hand {
        match party {
            Party::Player => &self.player,
            Party::Dealer => &self.dealer,
        }
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}

/// A blackjack session: house rules plus the random source used for every shuffle.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Random number generator, seeded once per session.
    rng: ChaCha8Rng,
    /// Rounds started so far.
    rounds_played: usize,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjsim::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_os_rng(options: GameOptions) -> Self {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }

    fn with_rng(options: GameOptions, rng: ChaCha8Rng) -> Self {
        Self {
            options,
            rng,
            rounds_played: 0,
        }
    }

    /// Builds a fresh, shuffled deck and an empty round around it.
    pub fn new_round(&mut self) -> Round {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.rounds_played += 1;
        log::info!("round {} set up", self.rounds_played);
        Round::new(deck, &self.options)
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }
}
