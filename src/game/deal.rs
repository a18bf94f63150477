use crate::error::DealError;
use crate::hand::Hand;

use super::{Game, GameState};

impl Game {
    /// Deals a new round: player, dealer, player, dealer.
    ///
    /// The hands and results of the previous round are cleared; the shoe and
    /// the stats carry over. If either side is dealt a natural the round
    /// settles immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state == GameState::PlayerTurn {
            return Err(DealError::RoundInProgress);
        }

        self.state = GameState::Dealing;
        self.player_hands.clear();
        self.player_hands.push(Hand::new());
        self.dealer_hand = Hand::new();
        self.current_hand_index = 0;
        self.round_results.clear();

        for _ in 0..2 {
            let card = self.shoe.draw();
            self.player_hands[0].add_card(card);
            let card = self.shoe.draw();
            self.dealer_hand.add_card(card);
        }

        self.state = GameState::PlayerTurn;

        let player = &self.player_hands[0];
        tracing::debug!(
            player = %player,
            player_value = player.value(),
            up_card = ?self.dealer_hand.up_card(),
            "round dealt"
        );

        if player.is_blackjack() || self.dealer_hand.is_blackjack() {
            tracing::debug!(
                player_natural = player.is_blackjack(),
                dealer_natural = self.dealer_hand.is_blackjack(),
                "natural dealt"
            );
            self.settle();
        }

        Ok(())
    }
}
