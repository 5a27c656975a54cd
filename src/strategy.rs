//! Rule-based player strategies.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseStrategyError;

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// A deterministic hit/stand rule keyed on the player's score and the
/// dealer's upcard value.
///
/// ```
/// use bjsim::{Action, Strategy};
///
/// assert_eq!(Strategy::BasicHard.decide(14, 5), Action::Stand);
/// assert_eq!(Strategy::BasicHard.decide(14, 9), Action::Hit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Plays like the house: hit below 17.
    #[default]
    DealerMimic,
    /// Never risks a bust: hit below 12.
    NeverBust,
    /// Simplified basic strategy for hard totals.
    BasicHard,
    /// Stands early against a weak dealer upcard.
    Cautious,
    /// Hits below 19.
    Aggressive,
}

const DEALER_MIMIC_THRESHOLD: u32 = 17;
const NEVER_BUST_THRESHOLD: u32 = 12;
const AGGRESSIVE_THRESHOLD: u32 = 19;

const fn hit_below(score: u32, threshold: u32) -> Action {
    if score < threshold {
        Action::Hit
    } else {
        Action::Stand
    }
}

const fn basic_hard(score: u32, upcard: u8) -> Action {
    match (score, upcard) {
        (17.., _) | (13..=16, 2..=6) | (12, 4..=6) => Action::Stand,
        _ => Action::Hit,
    }
}

const fn cautious(score: u32, upcard: u8) -> Action {
    let threshold = match upcard {
        2..=6 => 12,
        7.. => 17,
        _ => 15,
    };
    hit_below(score, threshold)
}

impl Strategy {
    /// All strategies, in simulation order.
    pub const ALL: [Self; 5] = [
        Self::DealerMimic,
        Self::NeverBust,
        Self::BasicHard,
        Self::Cautious,
        Self::Aggressive,
    ];

    /// Decides whether to hit or stand.
    #[must_use]
    pub const fn decide(self, score: u32, dealer_upcard: u8) -> Action {
        match self {
            Self::DealerMimic => hit_below(score, DEALER_MIMIC_THRESHOLD),
            Self::NeverBust => hit_below(score, NEVER_BUST_THRESHOLD),
            Self::BasicHard => basic_hard(score, dealer_upcard),
            Self::Cautious => cautious(score, dealer_upcard),
            Self::Aggressive => hit_below(score, AGGRESSIVE_THRESHOLD),
        }
    }

    /// Canonical upper-snake-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DealerMimic => "DEALER_MIMIC",
            Self::NeverBust => "NEVER_BUST",
            Self::BasicHard => "BASIC_HARD",
            Self::Cautious => "CAUTIOUS",
            Self::Aggressive => "AGGRESSIVE",
        }
    }

    /// Parses a strategy name, falling back to [`Strategy::DealerMimic`] for
    /// names that are not recognized.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown strategy {name:?}, defaulting to {}", Self::DealerMimic);
            Self::DealerMimic
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Accepts the canonical names case-insensitively, with `-` or `_` as the
    /// word separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| {
                let name = strategy.name();
                name.len() == s.len()
                    && name.bytes().zip(s.bytes()).all(|(expected, got)| {
                        let got = if got == b'-' { b'_' } else { got };
                        expected == got.to_ascii_uppercase()
                    })
            })
            .ok_or(ParseStrategyError)
    }
}
