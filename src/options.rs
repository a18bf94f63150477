//! Game configuration options.
//!
//! The house rules are fixed: the dealer stands on every 17, one split per
//! hand, split aces take one card, and surrender is offered on any unsplit
//! two-card hand. Only the shoe is configurable.

/// Default number of decks in the shoe.
pub const DEFAULT_DECKS: u8 = 6;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcoach::GameOptions;
///
/// let options = GameOptions::default().with_decks(8).with_seed(7);
/// assert_eq!(options.decks, 8);
/// assert_eq!(options.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks. Zero is treated as one.
    pub decks: u8,
    /// Shuffle seed. `None` shuffles from entropy.
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            seed: None,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the shuffle seed, making every draw reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(42);
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
