use crate::result::{HandResult, settle_hand};

use super::{Game, GameState};

/// The dealer draws while below this total.
const DEALER_STANDS_ON: u8 = 17;

impl Game {
    /// Dealer draws until reaching 17 or more.
    ///
    /// The dealer compares the folded value, so every 17 stands, soft or
    /// hard. Returns the number of cards drawn.
    fn dealer_play(&mut self) -> usize {
        let mut drawn = 0;
        while self.dealer_hand.value() < DEALER_STANDS_ON {
            let card = self.shoe.draw();
            self.dealer_hand.add_card(card);
            drawn += 1;
        }
        drawn
    }

    /// Plays out the dealer and scores every player hand.
    pub(super) fn settle(&mut self) {
        self.state = GameState::DealerTurn;
        let drawn = self.dealer_play();

        for (hand_index, hand) in self.player_hands.iter().enumerate() {
            let outcome = settle_hand(hand, &self.dealer_hand);
            let balance_delta = outcome.balance_delta(hand.is_doubled());
            self.stats.record(balance_delta);

            tracing::trace!(
                hand_index,
                value = hand.value(),
                outcome = %outcome,
                balance_delta,
                "hand settled"
            );

            self.round_results.push(HandResult {
                hand_index,
                hand: hand.clone(),
                outcome,
                balance_delta,
            });
        }

        self.state = GameState::Settled;
        tracing::debug!(
            dealer = %self.dealer_hand,
            dealer_value = self.dealer_hand.value(),
            dealer_drew = drawn,
            hands = self.round_results.len(),
            balance = self.stats.balance,
            "round settled"
        );
    }
}
