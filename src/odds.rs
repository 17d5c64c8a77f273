//! Win-probability heuristic.
//!
//! The figure is linear in the distance from 21 and is not a statistical
//! estimate. Computation, labelling, and formatting are kept separate.

use core::fmt;

use crate::hand::BLACKJACK;

/// Significant digits used when printing a percentage.
const SIGNIFICANT_DIGITS: usize = 6;

/// Status label printed ahead of a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Score over 21.
    Bust,
    /// Score of exactly 21.
    Blackjack,
}

impl Label {
    /// Returns the label for a score, if any applies.
    #[must_use]
    pub const fn for_score(score: u8) -> Option<Self> {
        if score > BLACKJACK {
            Some(Self::Bust)
        } else if score == BLACKJACK {
            Some(Self::Blackjack)
        } else {
            None
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bust => "Bust",
            Self::Blackjack => "Blackjack",
        })
    }
}

/// Heuristic chance of winning, in percent.
///
/// ```
/// use bjsim::odds::win_probability;
///
/// assert_eq!(win_probability(21), 100.0);
/// assert_eq!(win_probability(22), 0.0);
/// ```
#[must_use]
pub fn win_probability(score: u8) -> f64 {
    if score > BLACKJACK {
        0.0
    } else if score == BLACKJACK {
        100.0
    } else {
        f64::from(BLACKJACK - score) / f64::from(BLACKJACK) * 100.0
    }
}

/// Formats a percentage with six significant digits and no trailing zeros.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let integer_digits = if value.abs() < 1.0 {
        1
    } else {
        value.abs().log10().floor() as usize + 1
    };
    let decimals = SIGNIFICANT_DIGITS.saturating_sub(integer_digits);
    let text = format!("{value:.decimals$}");

    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// A party's probability line, e.g. `Bust 0` or `14.2857`, without the `%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Odds {
    /// Label for the score, if any.
    pub label: Option<Label>,
    /// Heuristic percentage.
    pub probability: f64,
}

impl Odds {
    /// Computes the odds for a hand score.
    #[must_use]
    pub fn for_score(score: u8) -> Self {
        Self {
            label: Label::for_score(score),
            probability: win_probability(score),
        }
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = self.label {
            write!(f, "{label} ")?;
        }
        f.write_str(&format_percent(self.probability))
    }
}
