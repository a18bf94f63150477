//! Player and dealer hand representation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.points());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    // An ace still counted as 11 makes the hand soft.
    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// A hand of cards plus the flags the round engine sets on it.
///
/// All blackjack properties are derived from the cards and flags; none of
/// them is stored. The same type serves the dealer, whose flags stay unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    is_split: bool,
    is_doubled: bool,
    is_standing: bool,
    is_surrendered: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            is_split: false,
            is_doubled: false,
            is_standing: false,
            is_surrendered: false,
        }
    }

    /// Creates an unsplit hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            ..Self::new()
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
            is_split: true,
            ..Self::new()
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card, which for the dealer is the up card.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 and folded down to 1, one at a time, while the
    /// total exceeds 21.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: two cards worth 21 that did not
    /// come from a split.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21 && !self.is_split
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand came from splitting aces.
    ///
    /// Split aces take exactly one card each and no further decision.
    #[must_use]
    pub fn is_split_aces(&self) -> bool {
        self.is_split && self.cards.first().is_some_and(|c| c.rank.is_ace())
    }

    /// Returns whether the hand holds two cards of equal point value.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].points() == self.cards[1].points()
    }

    /// Returns whether the hand can be split.
    ///
    /// Ten-valued cards of different ranks (K+Q) count as a pair. A hand
    /// that already came from a split never splits again.
    #[must_use]
    pub fn can_split(&self) -> bool {
        !self.is_split && self.is_pair()
    }

    /// Returns whether the hand can double down.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.cards.len() == 2 && !self.is_doubled
    }

    /// Returns whether the hand can surrender.
    #[must_use]
    pub fn can_surrender(&self) -> bool {
        self.cards.len() == 2 && !self.is_split
    }

    /// Returns whether the hand is finished and takes no further action.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.is_standing
            || self.is_doubled
            || self.is_surrendered
            || self.is_busted()
            || self.is_split_aces()
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.is_split
    }

    /// Returns whether the hand was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.is_doubled
    }

    /// Returns whether the player stood on the hand.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.is_standing
    }

    /// Returns whether the hand was surrendered.
    #[must_use]
    pub const fn is_surrendered(&self) -> bool {
        self.is_surrendered
    }

    pub(crate) const fn mark_split(&mut self) {
        self.is_split = true;
    }

    pub(crate) const fn mark_doubled(&mut self) {
        self.is_doubled = true;
    }

    pub(crate) const fn mark_standing(&mut self) {
        self.is_standing = true;
    }

    pub(crate) const fn mark_surrendered(&mut self) {
        self.is_surrendered = true;
    }

    /// Removes and returns the second card (for splitting).
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
