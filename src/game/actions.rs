use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::{GameState, Round};

/// A player decision read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Draw one more card.
    Hit,
    /// Stop drawing.
    Stand,
}

impl Choice {
    /// Parses a trimmed, lowercased token. Returns `None` for anything else.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "h" | "hit" => Some(Self::Hit),
            "s" | "stand" => Some(Self::Stand),
            _ => None,
        }
    }
}

/// Answer to the play-again prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replay {
    /// Play another round.
    Yes,
    /// Stop playing.
    No,
}

impl Replay {
    /// Parses a trimmed, lowercased token. Returns `None` for anything else.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "y" | "yes" => Some(Self::Yes),
            "n" | "no" => Some(Self::No),
            _ => None,
        }
    }
}

impl Round {
    fn ensure_state(&self, expected: GameState) -> Result<(), ActionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Deals two cards each, alternating player, dealer, player, dealer.
    ///
    /// Moves to [`GameState::PlayerTurn`], or straight to
    /// [`GameState::DealerTurn`] if the player already has 21.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in setup or the deck runs out.
    pub fn deal_initial(&mut self) -> Result<(), ActionError> {
        self.ensure_state(GameState::Setup)?;
        self.state = GameState::InitialDeal;

        for _ in 0..2 {
            self.player.add_card(self.deck.deal()?);
            self.dealer.add_card(self.deck.deal()?);
        }

        log::debug!(
            "initial deal: player {} ({}), dealer {} ({})",
            self.player,
            self.player.value(),
            self.dealer,
            self.dealer.value()
        );

        self.state = if self.player.value() < BLACKJACK {
            GameState::PlayerTurn
        } else {
            GameState::DealerTurn
        };

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Ends the player's turn once the hand reaches 21 or more.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(GameState::PlayerTurn)?;

        let card = self.deck.deal()?;
        self.player.add_card(card);
        log::debug!("player hits {card}, value {}", self.player.value());

        if self.player.value() >= BLACKJACK {
            self.state = GameState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_state(GameState::PlayerTurn)?;
        log::debug!("player stands on {}", self.player.value());
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Applies a parsed player decision.
    ///
    /// Returns the card drawn for a hit.
    ///
    /// # Errors
    ///
    /// See [`Round::hit`] and [`Round::stand`].
    pub fn apply(&mut self, choice: Choice) -> Result<Option<Card>, ActionError> {
        match choice {
            Choice::Hit => self.hit().map(Some),
            Choice::Stand => self.stand().map(|()| None),
        }
    }
}
