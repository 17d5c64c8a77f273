//! Banner and play-again flow around individual rounds.

use std::io::{BufRead, Write};

use crate::error::PlayError;
use crate::options::ReplayPolicy;
use crate::result::RoundResult;

use super::console::prompt_token;
use super::{Game, Replay};

const BANNER: &str = "\
*************************
* Welcome to black jack *
*************************
";
const PLAY_AGAIN: &str = "Would you like to play again? (y/n):";
const INVALID_PLAY_AGAIN: &str = "Invalid choice. Please enter 'y' or 'n': ";
const FAREWELL: &str = "Thank you for playing";

impl Game {
    /// Plays one round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    pub fn play_round<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<RoundResult, PlayError> {
        self.new_round().play(input, output)
    }

    /// Runs a whole session: banner, first round, and the play-again prompt.
    ///
    /// With [`ReplayPolicy::Once`] at most one extra round is offered and any
    /// answer other than yes or no ends the session. With
    /// [`ReplayPolicy::UntilDeclined`] the prompt repeats after every round.
    ///
    /// Returns the number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<usize, PlayError> {
        writeln!(output, "{BANNER}")?;
        self.play_round(input, output)?;
        let mut played = 1;

        loop {
            let answer = prompt_token(input, output, PLAY_AGAIN)?;
            writeln!(output)?;

            match answer.as_deref().map_or(Some(Replay::No), Replay::parse) {
                Some(Replay::Yes) => {
                    self.play_round(input, output)?;
                    played += 1;
                    if self.options.replay == ReplayPolicy::Once {
                        break;
                    }
                }
                Some(Replay::No) => {
                    writeln!(output, "{FAREWELL}")?;
                    break;
                }
                None => {
                    writeln!(output, "{INVALID_PLAY_AGAIN}")?;
                    if self.options.replay == ReplayPolicy::Once {
                        log::info!("invalid replay answer, ending session");
                        break;
                    }
                }
            }
        }

        Ok(played)
    }
}
