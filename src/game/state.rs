//! Round state types.

use core::fmt;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Deck shuffled, hands empty.
    Setup,
    /// Dealing the opening two cards to each side.
    InitialDeal,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and final scores can be reported.
    Resolution,
}

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    /// The human player.
    Player,
    /// The house.
    Dealer,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        })
    }
}
