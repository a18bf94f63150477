//! Caller-owned store of independent games.
//!
//! Front ends that serve many players keep one [`Game`] per session instead
//! of a single shared game. Each game sits behind its own lock, so rounds in
//! different sessions never contend with each other.

extern crate alloc;

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::SessionError;
use crate::game::Game;
use crate::options::GameOptions;
use crate::sync::{self, Mutex, Shared};

/// Identifier of a game in a [`Sessions`] store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// A store of independent games keyed by [`SessionId`].
///
/// # Example
///
/// ```
/// use bjcoach::{GameOptions, Sessions};
///
/// let sessions = Sessions::new();
/// let id = sessions.open(GameOptions::default().with_seed(3));
/// let dealt = sessions.with_game(id, |game| game.deal()).unwrap();
/// assert!(dealt.is_ok());
/// assert!(sessions.close(id));
/// ```
pub struct Sessions {
    /// Next session id to assign.
    next_id: AtomicU64,
    /// Live games.
    games: Mutex<HashMap<SessionId, Shared<Game>>>,
}

impl Sessions {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            games: Mutex::new(HashMap::new()),
        }
    }

    /// Starts a new game and returns its session id.
    pub fn open(&self, options: GameOptions) -> SessionId {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.games
            .lock()
            .insert(id, sync::shared(Game::new(options)));
        tracing::debug!(session = %id, decks = options.decks, "session opened");
        id
    }

    /// Discards a game. Returns `false` if the session did not exist.
    pub fn close(&self, id: SessionId) -> bool {
        let removed = self.games.lock().remove(&id).is_some();
        if removed {
            tracing::debug!(session = %id, "session closed");
        }
        removed
    }

    /// Returns whether the session exists.
    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        self.games.lock().contains_key(&id)
    }

    /// Returns the number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    /// Returns whether there are no live sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }

    /// Runs `f` with exclusive access to a session's game.
    ///
    /// Only that game is locked while `f` runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist.
    pub fn with_game<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Game) -> R,
    ) -> Result<R, SessionError> {
        let game = self
            .games
            .lock()
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound)?;
        let mut game = game.lock();
        Ok(f(&mut game))
    }
}

impl Default for Sessions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_independent() {
        let sessions = Sessions::new();
        let a = sessions.open(GameOptions::default().with_seed(1));
        let b = sessions.open(GameOptions::default().with_seed(1));
        assert_ne!(a, b);
        assert_eq!(sessions.len(), 2);

        sessions.with_game(a, |game| game.deal()).unwrap().unwrap();
        let b_state = sessions.with_game(b, |game| game.state()).unwrap();
        assert_eq!(b_state, crate::GameState::Idle);
    }

    #[test]
    fn closed_session_is_not_found() {
        let sessions = Sessions::new();
        let id = sessions.open(GameOptions::default());
        assert!(sessions.close(id));
        assert!(!sessions.close(id));
        assert!(!sessions.contains(id));
        assert_eq!(
            sessions.with_game(id, |game| game.state()),
            Err(SessionError::NotFound)
        );
        assert!(sessions.is_empty());
    }
}
