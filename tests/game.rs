//! Game integration tests.

#![allow(clippy::float_cmp)]

use bjcoach::{
    Action, ActionError, Card, DECK_SIZE, DealError, Game, GameOptions, GameState, Hand,
    HandOutcome, RESHUFFLE_THRESHOLD, Rank, Shoe, Suit, settle_hand,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// A six-deck game whose next draws are `draws`, in order.
fn game_with_draws(draws: &[Card]) -> Game {
    let mut game = Game::new(GameOptions::default().with_seed(7));
    game.shoe_mut().arrange(draws);
    game
}

fn outcomes(game: &Game) -> Vec<HandOutcome> {
    game.round_results().iter().map(|r| r.outcome).collect()
}

#[test]
fn basic_round_flow() {
    let mut game = game_with_draws(&[
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Four, Suit::Hearts), // hit
        card(Rank::Five, Suit::Clubs),  // dealer draws to 21
    ]);

    assert_eq!(game.state(), GameState::Idle);
    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.current_hand().map(Hand::value), Some(15));
    assert_eq!(game.dealer_up_card(), Some(card(Rank::Six, Suit::Clubs)));

    let hit_card = game.hit().unwrap();
    assert_eq!(hit_card.rank, Rank::Four);
    assert!(game.round_active());
    assert_eq!(game.current_hand().map(Hand::value), Some(19));

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.dealer_hand().value(), 21);
    assert_eq!(outcomes(&game), [HandOutcome::Lose]);
    assert_eq!(game.stats().balance, -1.0);
    assert_eq!(game.stats().hands_played, 1);
}

#[test]
fn deal_then_stand_settles_exactly_one_hand() {
    let mut game = game_with_draws(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Eight, Suit::Spades),
    ]);

    game.deal().unwrap();
    assert!(game.round_active());
    assert!(game.round_results().is_empty());

    game.apply(Action::Stand).unwrap();
    assert!(!game.round_active());
    assert_eq!(game.round_results().len(), 1);
    assert_eq!(outcomes(&game), [HandOutcome::Push]);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn player_natural_settles_on_the_deal() {
    let mut game = game_with_draws(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::King, Suit::Hearts),
        card(Rank::Seven, Suit::Diamonds),
    ]);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::Settled);
    assert!(game.current_hand().is_none());
    assert_eq!(outcomes(&game), [HandOutcome::Blackjack]);
    assert_eq!(game.stats().balance, 1.5);
}

#[test]
fn dealer_natural_beats_player() {
    let mut game = game_with_draws(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::King, Suit::Diamonds),
    ]);

    game.deal().unwrap();
    assert!(!game.round_active());
    assert_eq!(outcomes(&game), [HandOutcome::Lose]);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.stats().balance, -1.0);
}

#[test]
fn both_naturals_push() {
    let mut game = game_with_draws(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Diamonds),
    ]);

    game.deal().unwrap();
    assert_eq!(outcomes(&game), [HandOutcome::Push]);
    assert_eq!(game.stats().balance, 0.0);
    assert_eq!(game.stats().hands_played, 1);
}

#[test]
fn bust_advances_and_settles() {
    let mut game = game_with_draws(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Six, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::King, Suit::Spades),
    ]);

    game.deal().unwrap();
    game.hit().unwrap();

    assert_eq!(game.state(), GameState::Settled);
    assert!(game.player_hands()[0].is_busted());
    assert_eq!(game.dealer_hand().value(), 17);
    assert_eq!(outcomes(&game), [HandOutcome::Lose]);
}

#[test]
fn rejected_calls_leave_state_untouched() {
    let mut game = game_with_draws(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Six, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::King, Suit::Spades),
    ]);

    assert_eq!(game.hit(), Err(ActionError::NoActiveHand));
    assert_eq!(game.stand(), Err(ActionError::NoActiveHand));

    game.deal().unwrap();
    game.hit().unwrap();

    let hands = game.player_hands().to_vec();
    let remaining = game.cards_remaining();

    assert_eq!(game.hit(), Err(ActionError::NoActiveHand));
    assert_eq!(game.double_down(), Err(ActionError::NoActiveHand));
    assert_eq!(game.split(), Err(ActionError::NoActiveHand));
    assert_eq!(game.surrender(), Err(ActionError::NoActiveHand));
    assert_eq!(game.player_hands(), hands.as_slice());
    assert_eq!(game.cards_remaining(), remaining);
    assert_eq!(game.stats().hands_played, 1);
}

#[test]
fn queries_never_fail_outside_a_round() {
    let game = Game::new(GameOptions::default().with_seed(1));
    assert!(game.current_hand().is_none());
    assert!(game.view().is_none());
    assert!(game.legal_actions().is_empty());
    assert!(game.optimal_play().is_none());
    assert!(game.dealer_hand().is_empty());
    assert!(game.player_hands().is_empty());
}

#[test]
fn deal_rejected_while_round_in_progress() {
    let mut game = game_with_draws(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Six, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
    ]);

    game.deal().unwrap();
    let hands = game.player_hands().to_vec();
    assert_eq!(game.deal(), Err(DealError::RoundInProgress));
    assert_eq!(game.player_hands(), hands.as_slice());
}

#[test]
fn double_down_draws_one_card_and_doubles_the_stake() {
    let mut game = game_with_draws(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Hearts), // double draw
        card(Rank::Nine, Suit::Clubs), // dealer busts
    ]);

    game.deal().unwrap();
    assert_eq!(game.optimal_play(), Some(Action::Double));
    let drawn = game.double_down().unwrap();
    assert_eq!(drawn.rank, Rank::Ten);

    let hand = &game.player_hands()[0];
    assert!(hand.is_doubled());
    assert_eq!(hand.len(), 3);
    assert_eq!(outcomes(&game), [HandOutcome::Win]);
    assert_eq!(game.stats().balance, 2.0);
}

#[test]
fn double_rejected_on_three_cards() {
    let mut game = game_with_draws(&[
        card(Rank::Two, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Four, Suit::Hearts),
    ]);

    game.deal().unwrap();
    game.hit().unwrap();

    assert_eq!(game.double_down(), Err(ActionError::CannotDouble));
    assert_eq!(game.surrender(), Err(ActionError::CannotSurrender));
    assert_eq!(game.legal_actions(), [Action::Hit, Action::Stand]);
    assert_eq!(game.current_hand().map(Hand::len), Some(3));
}

#[test]
fn split_plays_each_hand_in_turn() {
    let mut game = game_with_draws(&[
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Three, Suit::Clubs),  // first hand
        card(Rank::Ten, Suit::Hearts),   // second hand
        card(Rank::Ten, Suit::Diamonds), // dealer busts
    ]);

    game.deal().unwrap();
    assert_eq!(game.optimal_play(), Some(Action::Split));
    game.split().unwrap();

    let hands = game.player_hands();
    assert_eq!(hands.len(), 2);
    assert!(hands.iter().all(Hand::is_split));
    assert_eq!(hands[0].value(), 11);
    assert_eq!(hands[1].value(), 18);
    assert_eq!(game.current_hand_index(), 0);

    game.stand().unwrap();
    assert_eq!(game.current_hand_index(), 1);
    assert!(game.round_active());

    game.stand().unwrap();
    assert!(!game.round_active());
    assert_eq!(outcomes(&game), [HandOutcome::Win, HandOutcome::Win]);
    assert_eq!(game.stats().balance, 2.0);
    assert_eq!(game.stats().hands_played, 2);
}

#[test]
fn split_hands_never_split_again() {
    let mut game = game_with_draws(&[
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Eight, Suit::Clubs),
        card(Rank::Two, Suit::Hearts),
    ]);

    game.deal().unwrap();
    game.split().unwrap();

    let current = game.current_hand().unwrap();
    assert!(current.is_pair());
    assert!(!current.can_split());
    assert_eq!(game.split(), Err(ActionError::CannotSplit));
    assert_eq!(game.surrender(), Err(ActionError::CannotSurrender));
    assert_eq!(game.optimal_play(), Some(Action::Stand));
    assert_eq!(game.player_hands().len(), 2);
}

#[test]
fn split_aces_take_one_card_and_settle() {
    let mut game = game_with_draws(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
        card(Rank::King, Suit::Clubs),   // first hand
        card(Rank::Five, Suit::Hearts),  // second hand
        card(Rank::Two, Suit::Diamonds), // dealer to 18
    ]);

    game.deal().unwrap();
    game.split().unwrap();

    assert_eq!(game.state(), GameState::Settled);
    let hands = game.player_hands();
    assert_eq!(hands.len(), 2);
    for hand in hands {
        assert_eq!(hand.len(), 2);
        assert!(hand.is_split_aces());
        assert!(hand.is_done());
        assert!(!hand.is_blackjack());
    }

    assert_eq!(game.dealer_hand().value(), 18);
    assert_eq!(outcomes(&game), [HandOutcome::Win, HandOutcome::Lose]);
    assert_eq!(game.stats().balance, 0.0);
    assert_eq!(game.hit(), Err(ActionError::NoActiveHand));
}

#[test]
fn surrender_forfeits_half() {
    let mut game = game_with_draws(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Seven, Suit::Diamonds),
    ]);

    game.deal().unwrap();
    assert_eq!(game.optimal_play(), Some(Action::Surrender));
    game.surrender().unwrap();

    assert!(game.player_hands()[0].is_surrendered());
    assert_eq!(outcomes(&game), [HandOutcome::Surrender]);
    assert_eq!(game.stats().balance, -0.5);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut game = game_with_draws(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();

    let dealer = game.dealer_hand();
    assert_eq!(dealer.len(), 2);
    assert!(dealer.is_soft());
    assert_eq!(dealer.value(), 17);
    assert_eq!(outcomes(&game), [HandOutcome::Win]);
    assert_eq!(game.stats().balance, 1.0);
}

#[test]
fn dealer_draws_out_after_every_hand_busts() {
    let mut game = game_with_draws(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::King, Suit::Hearts), // player busts
        card(Rank::Four, Suit::Clubs),
        card(Rank::Queen, Suit::Diamonds),
    ]);

    game.deal().unwrap();
    game.hit().unwrap();

    let dealer = game.dealer_hand();
    assert_eq!(
        dealer.cards(),
        [
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Clubs),
            card(Rank::Queen, Suit::Diamonds),
        ]
    );
    assert_eq!(dealer.value(), 19);
    assert_eq!(outcomes(&game), [HandOutcome::Lose]);
}

#[test]
fn stats_carry_across_rounds() {
    let mut game = game_with_draws(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Seven, Suit::Diamonds),
    ]);

    game.deal().unwrap();
    game.surrender().unwrap();

    game.shoe_mut().arrange(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::King, Suit::Hearts),
        card(Rank::Seven, Suit::Diamonds),
    ]);
    game.deal().unwrap();

    assert_eq!(outcomes(&game), [HandOutcome::Blackjack]);
    assert_eq!(game.stats().balance, 1.0);
    assert_eq!(game.stats().hands_played, 2);
}

#[test]
fn settlement_follows_precedence() {
    let c = |rank| card(rank, Suit::Clubs);
    let dealer = Hand::from_cards([c(Rank::Ten), c(Rank::Seven)]);
    let hands = [
        Hand::from_cards([c(Rank::Ten), c(Rank::Five), c(Rank::Seven)]),
        Hand::from_cards([c(Rank::Nine), c(Rank::Eight)]),
        Hand::from_cards([c(Rank::King), c(Rank::Queen)]),
        Hand::from_cards([c(Rank::Ace), c(Rank::Jack)]),
    ];

    let results: Vec<(HandOutcome, f64)> = hands
        .iter()
        .map(|hand| {
            let outcome = settle_hand(hand, &dealer);
            (outcome, outcome.balance_delta(hand.is_doubled()))
        })
        .collect();

    assert_eq!(
        results,
        [
            (HandOutcome::Lose, -1.0),
            (HandOutcome::Push, 0.0),
            (HandOutcome::Win, 1.0),
            (HandOutcome::Blackjack, 1.5),
        ]
    );
}

#[test]
fn reshuffle_below_threshold_restores_full_shoe() {
    let mut shoe = Shoe::new(2, Some(11));
    while shoe.remaining() >= RESHUFFLE_THRESHOLD {
        shoe.draw();
    }

    shoe.draw();
    assert_eq!(shoe.remaining(), 2 * DECK_SIZE - 1);
}

#[test]
fn many_rounds_keep_books_balanced() {
    let mut game = Game::new(GameOptions::default().with_decks(1).with_seed(2024));
    let mut balance = 0.0;
    let mut hands = 0;

    for _ in 0..300 {
        game.deal().unwrap();
        while let Some(action) = game.optimal_play() {
            game.apply(action).unwrap();
            assert!(game.current_hand().is_none_or(|hand| !hand.is_done()));
        }
        assert!(game.current_hand().is_none());
        assert!(game.cards_remaining() < DECK_SIZE);

        for result in game.round_results() {
            balance += result.balance_delta;
            hands += 1;
        }
    }

    assert_eq!(game.stats().balance, balance);
    assert_eq!(game.stats().hands_played, hands);
}
