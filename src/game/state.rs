//! Game state types.

use alloc::vec::Vec;

use crate::action::Action;
use crate::card::Card;
use crate::hand::Hand;
use crate::strategy;

/// Game state.
///
/// `Dealing` and `DealerTurn` only exist inside a call; between calls a game
/// is idle, waiting on the player, or settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been dealt yet.
    Idle,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and results are available.
    Settled,
}

/// Snapshot of the decision facing the player.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    /// The hand awaiting a decision.
    pub hand: &'a Hand,
    /// Index of that hand among the player's hands.
    pub hand_index: usize,
    /// The dealer's up card.
    pub up_card: Option<Card>,
    /// Actions available on the hand.
    pub legal: Vec<Action>,
}

impl TableView<'_> {
    /// Returns the book play for this decision.
    #[must_use]
    pub fn optimal(&self) -> Action {
        strategy::optimal_play_against(self.hand, self.up_card)
    }

    /// Returns whether `action` is available.
    #[must_use]
    pub fn is_legal(&self, action: Action) -> bool {
        self.legal.contains(&action)
    }
}
