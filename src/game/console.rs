//! Line-oriented terminal I/O for a round.

use std::io::{self, BufRead, Write};

use crate::error::PlayError;
use crate::hand::BLACKJACK;
use crate::odds::Odds;
use crate::result::RoundResult;

use super::{Choice, Party, Round};

const HIT_OR_STAND: &str = "Do you want to hit or stand? (h/s): ";
const INVALID_HIT_OR_STAND: &str = "Invalid choice. Please enter 'h' or 's'.";

/// Writes `prompt` without a newline and reads one trimmed, lowercased token.
///
/// Returns `None` once the input is exhausted.
pub(super) fn prompt_token<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

impl Round {
    fn write_hand<O: Write>(&self, output: &mut O, party: Party) -> io::Result<()> {
        writeln!(output, "{party}'s Hand: {}", self.hand(party))
    }

    fn write_odds<O: Write>(&self, output: &mut O, party: Party) -> io::Result<()> {
        let odds = Odds::for_score(self.hand(party).value());
        writeln!(output, "{party}'s Winning Probability: {odds}%")
    }

    /// Plays the round to completion against a terminal.
    ///
    /// Prints the opening hands and odds, asks the player to hit or stand
    /// until they stand or reach 21, plays the dealer silently, then prints
    /// both final hands and odds.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already started, the deck runs out,
    /// or the terminal cannot be read or written.
    pub fn play<I: BufRead, O: Write>(
        mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<RoundResult, PlayError> {
        self.deal_initial()?;

        self.write_hand(output, Party::Dealer)?;
        self.write_hand(output, Party::Player)?;
        writeln!(output)?;
        self.write_odds(output, Party::Dealer)?;
        self.write_odds(output, Party::Player)?;
        writeln!(output)?;

        while self.player.value() < BLACKJACK {
            let Some(token) = prompt_token(input, output, HIT_OR_STAND)? else {
                log::warn!("input closed during player turn, standing");
                writeln!(output)?;
                self.stand()?;
                break;
            };

            match Choice::parse(&token) {
                Some(Choice::Hit) => {
                    self.hit()?;
                    writeln!(output)?;
                    self.write_hand(output, Party::Player)?;
                    self.write_odds(output, Party::Player)?;
                    writeln!(output)?;
                }
                Some(Choice::Stand) => {
                    self.stand()?;
                    break;
                }
                None => {
                    log::debug!("rejected player input {token:?}");
                    writeln!(output, "{INVALID_HIT_OR_STAND}")?;
                }
            }
        }

        self.dealer_play()?;

        self.write_hand(output, Party::Dealer)?;
        self.write_hand(output, Party::Player)?;
        self.write_odds(output, Party::Player)?;
        self.write_odds(output, Party::Dealer)?;

        let result = self.result()?;
        log::info!(
            "round over: player {}, dealer {}",
            result.player.value,
            result.dealer.value
        );
        Ok(result)
    }
}
