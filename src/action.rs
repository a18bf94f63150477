//! Player decisions as a closed set.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseActionError;
use crate::hand::Hand;

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current total.
    Stand,
    /// Double the bet, take exactly one card, and end the hand.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Forfeit half the bet and end the hand.
    Surrender,
}

impl Action {
    /// All actions, in the order they are offered.
    pub const ALL: [Self; 5] = [
        Self::Hit,
        Self::Stand,
        Self::Double,
        Self::Split,
        Self::Surrender,
    ];

    /// Returns the lowercase name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
            Self::Surrender => "surrender",
        }
    }

    const fn short(self) -> &'static str {
        match self {
            Self::Hit => "h",
            Self::Stand => "s",
            Self::Double => "d",
            Self::Split => "p",
            Self::Surrender => "r",
        }
    }

    /// Returns whether the action is legal on the given hand.
    ///
    /// Hit and stand are always offered; the others follow the hand's
    /// predicates.
    #[must_use]
    pub fn is_legal(self, hand: &Hand) -> bool {
        match self {
            Self::Hit | Self::Stand => true,
            Self::Double => hand.can_double(),
            Self::Split => hand.can_split(),
            Self::Surrender => hand.can_surrender(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses an action name, ignoring case and surrounding whitespace.
    ///
    /// Short forms `h`, `s`, `d`, `p`, and `r` are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|action| {
                s.eq_ignore_ascii_case(action.as_str())
                    || s.eq_ignore_ascii_case(action.short())
            })
            .ok_or(ParseActionError)
    }
}

/// Returns the actions available on a hand.
#[must_use]
pub fn legal_actions(hand: &Hand) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| action.is_legal(hand))
        .collect()
}

/// Returns `action` if it is legal on the hand, otherwise [`Action::Stand`].
#[must_use]
pub fn validate(hand: &Hand, action: Action) -> Action {
    if action.is_legal(hand) {
        action
    } else {
        Action::Stand
    }
}
