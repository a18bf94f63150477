//! Multi-deck shoe with penetration-based reshuffling.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Remaining-card count below which the shoe is reshuffled before a draw.
pub const RESHUFFLE_THRESHOLD: usize = 20;

/// Seed used for unseeded shoes when no entropy source is available.
#[cfg(not(feature = "std"))]
const FALLBACK_SEED: u64 = 0x6a09_e667_f3bc_c908;

/// The drawable supply of cards, built from `num_decks` concatenated decks.
///
/// A seeded shoe produces the same sequence of draws, including every
/// reshuffle, for the lifetime of the shoe. The seed starts one random stream
/// and every reshuffle continues it, so successive shoes are different
/// permutations. Re-seeding on each reshuffle would instead deal the same
/// shoe over and over.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    num_decks: u8,
    seed: Option<u64>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates and shuffles a shoe.
    ///
    /// `num_decks` is clamped to at least one deck. Without a seed the shoe is
    /// shuffled from OS entropy. Without the `std` feature there is no entropy
    /// source and a fixed seed is used instead.
    #[must_use]
    pub fn new(num_decks: u8, seed: Option<u64>) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            num_decks: num_decks.max(1),
            seed,
            rng: Self::rng_for(seed),
        };
        shoe.reshuffle();
        shoe
    }

    fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
        match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            #[cfg(feature = "std")]
            None => ChaCha8Rng::from_os_rng(),
            #[cfg(not(feature = "std"))]
            None => ChaCha8Rng::seed_from_u64(FALLBACK_SEED),
        }
    }

    /// Rebuilds the full multi-deck population and shuffles it.
    pub fn reshuffle(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.total());

        for _ in 0..self.num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(rank, suit));
                }
            }
        }

        self.cards.shuffle(&mut self.rng);
        tracing::trace!(cards = self.cards.len(), "shoe reshuffled");
    }

    /// Draws the top card, reshuffling first if fewer than
    /// [`RESHUFFLE_THRESHOLD`] cards remain.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a reshuffled shoe always holds at least one deck"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.len() < RESHUFFLE_THRESHOLD {
            self.reshuffle();
        }
        let card = self
            .cards
            .pop()
            .expect("a reshuffled shoe holds at least one full deck");
        tracing::trace!(%card, remaining = self.cards.len(), "card drawn");
        card
    }

    /// Moves the given cards to the top of the shoe, to be drawn in order.
    ///
    /// One matching card is taken out of the rest of the shoe for each card
    /// placed on top, so the population is unchanged whenever the cards are
    /// present. Cards the shoe does not hold are added.
    pub fn arrange(&mut self, top: &[Card]) {
        for card in top {
            if let Some(pos) = self.cards.iter().position(|c| c == card) {
                self.cards.remove(pos);
            }
        }
        self.cards.extend(top.iter().rev());
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Returns the seed the shoe was built with.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the size of a full shoe.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.num_decks as usize * DECK_SIZE
    }
}
