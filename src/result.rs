//! Round result types.

use crate::odds::Odds;

/// Final state of one party after a round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartyResult {
    /// Final hand value.
    pub value: u8,
    /// Number of cards held at the end of the round.
    pub cards: usize,
    /// Heuristic odds for the final value.
    pub odds: Odds,
}

/// Result of a completed round. No verdict is recorded, only each side's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// The player's final state.
    pub player: PartyResult,
    /// The dealer's final state.
    pub dealer: PartyResult,
    /// Cards drawn by the dealer after the initial deal.
    pub dealer_draws: usize,
}
