use crate::action::Action;
use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

use super::{Game, GameState};

impl Game {
    /// Returns the index of the hand awaiting a decision.
    ///
    /// Every action that finishes a hand moves the cursor on, so the hand at
    /// this index is never done.
    fn active_index(&self) -> Result<usize, ActionError> {
        if self.state != GameState::PlayerTurn || self.current_hand_index >= self.player_hands.len()
        {
            return Err(ActionError::NoActiveHand);
        }
        Ok(self.current_hand_index)
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the hand and moves on to the next one; otherwise the same
    /// hand stays current.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is awaiting a decision.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let index = self.active_index()?;
        let card = self.shoe.draw();
        let hand = &mut self.player_hands[index];
        hand.add_card(card);

        if hand.is_busted() {
            tracing::debug!(hand_index = index, value = hand.value(), "hand busted");
            self.advance();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is awaiting a decision.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let index = self.active_index()?;
        self.player_hands[index].mark_standing();
        self.advance();
        Ok(())
    }

    /// Player action: Double down (receive exactly one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is awaiting a decision or the hand cannot
    /// double.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        let index = self.active_index()?;
        let hand = &mut self.player_hands[index];
        if !hand.can_double() {
            return Err(ActionError::CannotDouble);
        }

        hand.mark_doubled();
        let card = self.shoe.draw();
        hand.add_card(card);
        self.advance();

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves to a new hand right after the current one and
    /// each hand draws one card. Split aces take no further decision, so the
    /// round settles straight away.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is awaiting a decision or the hand cannot
    /// be split.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let index = self.active_index()?;
        let hand = &mut self.player_hands[index];
        if !hand.can_split() {
            return Err(ActionError::CannotSplit);
        }

        let is_aces = hand.cards().first().is_some_and(|c| c.rank.is_ace());
        let split_card = hand.take_split_card().ok_or(ActionError::CannotSplit)?;
        hand.mark_split();

        let mut new_hand = Hand::from_split(split_card);
        hand.add_card(self.shoe.draw());
        new_hand.add_card(self.shoe.draw());
        self.player_hands.insert(index + 1, new_hand);

        tracing::debug!(hand_index = index, aces = is_aces, "hand split");

        if is_aces {
            self.current_hand_index = self.player_hands.len();
            self.settle();
        }

        Ok(())
    }

    /// Player action: Surrender (forfeit half the bet).
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is awaiting a decision or the hand cannot
    /// surrender.
    pub fn surrender(&mut self) -> Result<(), ActionError> {
        let index = self.active_index()?;
        let hand = &mut self.player_hands[index];
        if !hand.can_surrender() {
            return Err(ActionError::CannotSurrender);
        }

        hand.mark_surrendered();
        self.advance();
        Ok(())
    }

    /// Applies a player action to the current hand.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action.
    pub fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Hit => self.hit().map(|_| ()),
            Action::Stand => self.stand(),
            Action::Double => self.double_down().map(|_| ()),
            Action::Split => self.split(),
            Action::Surrender => self.surrender(),
        }
    }
}
