use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::odds::Odds;
use crate::result::{PartyResult, RoundResult};

use super::{GameState, Round};

/// Total at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u8 = 17;

/// Returns whether the dealer must draw another card.
///
/// The dealer draws below 17. On a soft 17 the dealer draws only when
/// `stand_on_soft_17` is false.
#[must_use]
pub fn dealer_must_draw(hand: &Hand, stand_on_soft_17: bool) -> bool {
    let value = hand.value();
    value < DEALER_STANDS_ON || (value == DEALER_STANDS_ON && hand.is_soft() && !stand_on_soft_17)
}

fn party_result(hand: &Hand) -> PartyResult {
    let value = hand.value();
    PartyResult {
        value,
        cards: hand.len(),
        odds: Odds::for_score(value),
    }
}

impl Round {
    /// Dealer plays their hand according to the house rules.
    ///
    /// The player's hand has no influence on the dealer's decisions.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != GameState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while dealer_must_draw(&self.dealer, self.stand_on_soft_17) {
            let card = self.deck.deal()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        log::debug!(
            "dealer drew {} card(s), final value {}",
            drawn_cards.len(),
            self.dealer.value()
        );
        self.dealer_draws = drawn_cards.len();
        self.state = GameState::Resolution;

        Ok(drawn_cards)
    }

    /// Returns both sides' final scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached resolution.
    pub fn result(&self) -> Result<RoundResult, ActionError> {
        if self.state != GameState::Resolution {
            return Err(ActionError::InvalidState);
        }

        Ok(RoundResult {
            player: party_result(&self.player),
            dealer: party_result(&self.dealer),
            dealer_draws: self.dealer_draws,
        })
    }
}
