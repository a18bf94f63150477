//! Round engine and state management.

use alloc::vec::Vec;

use crate::action::{self, Action};
use crate::card::Card;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{HandResult, Stats};
use crate::shoe::Shoe;
use crate::strategy;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::{GameState, TableView};

/// A blackjack round engine for a single player seat.
///
/// The game owns the shoe, the player's hands (two after a split), the
/// dealer's hand, and the cumulative [`Stats`]. It is a plain owned value:
/// callers that share one across threads wrap it in a lock, as
/// [`Sessions`](crate::Sessions) does.
///
/// Every mutator returns a `Result`. A rejected call leaves the game exactly
/// as it was.
///
/// # Example
///
/// ```
/// use bjcoach::{Game, GameOptions};
///
/// let mut game = Game::new(GameOptions::default().with_seed(42));
/// game.deal().unwrap();
/// while game.round_active() {
///     game.stand().unwrap();
/// }
/// assert_eq!(game.stats().hands_played, game.round_results().len() as u32);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Player hands, in play order.
    player_hands: Vec<Hand>,
    /// Dealer's hand.
    dealer_hand: Hand,
    /// Index of the hand awaiting a decision.
    current_hand_index: usize,
    /// Results of the last settled round.
    round_results: Vec<HandResult>,
    /// Running totals across rounds.
    stats: Stats,
}

impl Game {
    /// Creates a new game and shuffles its shoe.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self {
            shoe: Shoe::new(options.decks, options.seed),
            options,
            state: GameState::Idle,
            player_hands: Vec::new(),
            dealer_hand: Hand::new(),
            current_hand_index: 0,
            round_results: Vec::new(),
            stats: Stats::default(),
        }
    }

    /// Moves the cursor to the next hand, settling the round once every hand
    /// has been played.
    fn advance(&mut self) {
        self.current_hand_index += 1;
        if self.current_hand_index >= self.player_hands.len() {
            self.settle();
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether a round is waiting on player decisions.
    #[must_use]
    pub fn round_active(&self) -> bool {
        self.state == GameState::PlayerTurn
    }

    /// Returns the hand awaiting a decision.
    ///
    /// Returns `None` before the first deal and once the round has settled.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        if self.round_active() {
            self.player_hands.get(self.current_hand_index)
        } else {
            None
        }
    }

    /// Returns the index of the hand awaiting a decision.
    #[must_use]
    pub const fn current_hand_index(&self) -> usize {
        self.current_hand_index
    }

    /// Returns the player's hands for the current or last round.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the results of the last settled round.
    ///
    /// Empty while a round is in progress.
    #[must_use]
    pub fn round_results(&self) -> &[HandResult] {
        &self.round_results
    }

    /// Returns the cumulative statistics.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to [`arrange`](Shoe::arrange) the next
    /// cards.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the dealer's up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer_hand.up_card()
    }

    /// Returns the actions available on the current hand.
    ///
    /// Empty when no hand is awaiting a decision.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.current_hand()
            .map(action::legal_actions)
            .unwrap_or_default()
    }

    /// Returns the book play for the current hand.
    #[must_use]
    pub fn optimal_play(&self) -> Option<Action> {
        self.current_hand()
            .map(|hand| strategy::optimal_play(hand, &self.dealer_hand))
    }

    /// Returns what a player sees when deciding: the current hand, the
    /// dealer's up card, and the legal actions.
    ///
    /// Returns `None` when no round is active.
    #[must_use]
    pub fn view(&self) -> Option<TableView<'_>> {
        self.current_hand().map(|hand| TableView {
            hand,
            hand_index: self.current_hand_index,
            up_card: self.dealer_hand.up_card(),
            legal: action::legal_actions(hand),
        })
    }
}

#[cfg(feature = "std")]
impl Default for Game {
    /// Six unseeded decks.
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}
