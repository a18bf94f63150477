//! Settlement outcomes and cumulative statistics.

use crate::hand::Hand;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
    /// Player surrendered.
    Surrender,
}

impl HandOutcome {
    /// Returns the lowercase name of the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Push => "push",
            Self::Blackjack => "blackjack",
            Self::Surrender => "surrender",
        }
    }

    /// Returns the balance change in units of the base bet.
    ///
    /// Wins and losses are doubled on a doubled hand. Blackjack pays 3:2 and
    /// surrender forfeits half the bet regardless.
    #[must_use]
    pub const fn balance_delta(self, doubled: bool) -> f64 {
        let multiplier = if doubled { 2.0 } else { 1.0 };
        match self {
            Self::Win => multiplier,
            Self::Lose => -multiplier,
            Self::Push => 0.0,
            Self::Blackjack => 1.5,
            Self::Surrender => -0.5,
        }
    }
}

impl core::fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores one player hand against the dealer's final hand.
///
/// The first matching rule wins: surrender, player bust, both naturals,
/// dealer natural, player natural, dealer bust, then the higher total.
#[must_use]
pub fn settle_hand(hand: &Hand, dealer: &Hand) -> HandOutcome {
    if hand.is_surrendered() {
        return HandOutcome::Surrender;
    }
    if hand.is_busted() {
        return HandOutcome::Lose;
    }

    match (hand.is_blackjack(), dealer.is_blackjack()) {
        (true, true) => return HandOutcome::Push,
        (false, true) => return HandOutcome::Lose,
        (true, false) => return HandOutcome::Blackjack,
        (false, false) => {}
    }

    if dealer.is_busted() {
        return HandOutcome::Win;
    }

    match hand.value().cmp(&dealer.value()) {
        core::cmp::Ordering::Greater => HandOutcome::Win,
        core::cmp::Ordering::Less => HandOutcome::Lose,
        core::cmp::Ordering::Equal => HandOutcome::Push,
    }
}

/// Result for a single settled hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The hand as it stood at settlement.
    pub hand: Hand,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Change applied to the running balance.
    pub balance_delta: f64,
}

/// Cumulative statistics for a game, kept across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    /// Net result in units of the base bet.
    pub balance: f64,
    /// Number of hands settled.
    pub hands_played: u32,
}

impl Stats {
    pub(crate) fn record(&mut self, delta: f64) {
        self.balance += delta;
        self.hands_played += 1;
    }
}
