//! Error types for game operations.
//!
//! A rejected operation never changes game state, so callers that only care
//! about the happy path may ignore these errors.

use thiserror::Error;

/// Errors that can occur when dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No hand is awaiting a decision.
    #[error("no hand is awaiting a decision")]
    NoActiveHand,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Cannot surrender this hand.
    #[error("cannot surrender this hand")]
    CannotSurrender,
}

/// Error returned when parsing an unknown action name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown action")]
pub struct ParseActionError;

/// Errors that can occur when addressing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No game is registered under the session id.
    #[error("session not found")]
    NotFound,
}

/// Errors that can occur when running a benchmark.
#[cfg(feature = "parallel")]
#[derive(Debug, Error)]
pub enum SimulateError {
    /// The worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
