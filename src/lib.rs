//! A blackjack round engine that grades every decision against basic strategy.
//!
//! The crate provides a [`Game`] type that plays one player seat through
//! complete rounds (deal, hit, stand, double, split, surrender, dealer play,
//! and settlement) under a fixed house rule set, and a strategy lookup,
//! [`optimal_play`], that gives the book play for any hand.
//!
//! # Example
//!
//! ```
//! use bjcoach::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default().with_seed(42));
//! game.deal().unwrap();
//!
//! while let Some(action) = game.optimal_play() {
//!     game.apply(action).unwrap();
//! }
//!
//! assert!(!game.round_active());
//! assert!(!game.round_results().is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
pub mod shoe;
pub mod simulate;
pub mod strategy;
mod sync;

// Re-export main types
pub use action::{Action, legal_actions, validate};
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "parallel")]
pub use error::SimulateError;
pub use error::{ActionError, DealError, ParseActionError, SessionError};
pub use game::{Game, GameState, TableView};
pub use hand::Hand;
pub use options::{DEFAULT_DECKS, GameOptions};
pub use result::{HandOutcome, HandResult, Stats, settle_hand};
pub use session::{SessionId, Sessions};
pub use shoe::{RESHUFFLE_THRESHOLD, Shoe};
#[cfg(feature = "parallel")]
pub use simulate::run_benchmark;
pub use simulate::{
    AlwaysHit, AlwaysStand, BasicStrategy, DEFAULT_CONCURRENCY, DecisionRecord, Policy, Summary,
    play_round,
};
pub use strategy::{is_correct, optimal_play, optimal_play_against};
