//! Automated play for grading decision policies against basic strategy.
//!
//! A [`Policy`] plays complete rounds on seeded games. Every decision is
//! recorded next to the book play, and the round's outcome is attached to the
//! last record, so policies can be compared on both accuracy and balance.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::action::{self, Action};
use crate::card::Card;
use crate::game::{Game, TableView};
use crate::options::GameOptions;
use crate::result::HandOutcome;

/// Default number of rounds played at once by [`run_benchmark`].
pub const DEFAULT_CONCURRENCY: usize = 10;

/// A decision maker for the player seat.
pub trait Policy: Sync {
    /// Short name used to label records.
    fn name(&self) -> &'static str;

    /// Chooses an action for the decision in `view`.
    ///
    /// The choice may be illegal; it is then replaced by a stand.
    fn decide(&self, view: &TableView<'_>) -> Action;
}

/// Plays the book.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl Policy for BasicStrategy {
    fn name(&self) -> &'static str {
        "optimal"
    }

    fn decide(&self, view: &TableView<'_>) -> Action {
        view.optimal()
    }
}

/// Hits every hand until it busts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysHit;

impl Policy for AlwaysHit {
    fn name(&self) -> &'static str {
        "always_hit"
    }

    fn decide(&self, _view: &TableView<'_>) -> Action {
        Action::Hit
    }
}

/// Stands on every hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysStand;

impl Policy for AlwaysStand {
    fn name(&self) -> &'static str {
        "always_stand"
    }

    fn decide(&self, _view: &TableView<'_>) -> Action {
        Action::Stand
    }
}

/// One decision taken during a simulated round.
///
/// With the `serde` feature a record serializes as one flat row: cards are
/// written as text (`"A♥ 10♠"`) and outcomes as a space-separated list, so
/// records can go straight into a CSV file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecisionRecord {
    /// Round number.
    #[cfg_attr(feature = "serde", serde(rename = "hand_id"))]
    pub round_id: u64,
    /// Shoe seed of the round.
    pub seed: u64,
    /// Name of the policy that played.
    #[cfg_attr(feature = "serde", serde(rename = "strategy"))]
    pub policy: &'static str,
    /// Position of the decision within the round.
    pub decision_num: usize,
    /// Cards of the hand being decided.
    #[cfg_attr(feature = "serde", serde(serialize_with = "row::cards"))]
    pub player_cards: Vec<Card>,
    /// Value of the hand being decided.
    pub player_value: u8,
    /// Dealer's up card.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "dealer_upcard", serialize_with = "row::up_card")
    )]
    pub dealer_up: Option<Card>,
    /// Action taken, after legality checks. `None` when the round was
    /// settled on the deal.
    pub action: Option<Action>,
    /// Book play for the decision.
    #[cfg_attr(feature = "serde", serde(rename = "optimal_action"))]
    pub optimal: Option<Action>,
    /// Outcomes of every hand. Only set on the last record of a round.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "result", serialize_with = "row::outcomes")
    )]
    pub outcomes: Vec<HandOutcome>,
    /// Balance change of the whole round. Only set on the last record.
    pub balance_change: Option<f64>,
}

impl DecisionRecord {
    /// Returns whether the action taken matches the book play.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.action.is_some() && self.action == self.optimal
    }
}

/// Plays one round with a fresh six-deck shoe seeded with `seed`.
///
/// Returns one record per decision. A round settled on the deal (a natural
/// on either side) yields a single record without an action.
pub fn play_round(seed: u64, round_id: u64, policy: &dyn Policy) -> Vec<DecisionRecord> {
    let mut game = Game::new(GameOptions::default().with_seed(seed));
    let mut records = Vec::new();

    let Ok(()) = game.deal() else {
        return records;
    };

    loop {
        let action = {
            let Some(view) = game.view() else {
                break;
            };
            let action = action::validate(view.hand, policy.decide(&view));
            records.push(DecisionRecord {
                round_id,
                seed,
                policy: policy.name(),
                decision_num: records.len(),
                player_cards: view.hand.cards().to_vec(),
                player_value: view.hand.value(),
                dealer_up: view.up_card,
                action: Some(action),
                optimal: Some(view.optimal()),
                outcomes: Vec::new(),
                balance_change: None,
            });
            action
        };

        if let Err(err) = game.apply(action) {
            tracing::warn!(%err, %action, round_id, "validated action rejected");
            break;
        }
    }

    let outcomes: Vec<HandOutcome> = game.round_results().iter().map(|r| r.outcome).collect();
    let balance_change: f64 = game.round_results().iter().map(|r| r.balance_delta).sum();

    if let Some(last) = records.last_mut() {
        last.outcomes = outcomes;
        last.balance_change = Some(balance_change);
    } else {
        let first = game.player_hands().first();
        records.push(DecisionRecord {
            round_id,
            seed,
            policy: policy.name(),
            decision_num: 0,
            player_cards: first.map(|h| h.cards().to_vec()).unwrap_or_default(),
            player_value: first.map_or(0, crate::hand::Hand::value),
            dealer_up: game.dealer_up_card(),
            action: None,
            optimal: None,
            outcomes,
            balance_change: Some(balance_change),
        });
    }

    records
}

/// Flat text forms of the list-valued record fields.
#[cfg(feature = "serde")]
mod row {
    use core::fmt;

    use serde::Serializer;

    use crate::card::Card;
    use crate::result::HandOutcome;

    /// Displays items separated by single spaces.
    struct Spaced<'a, T>(&'a [T]);

    impl<T: fmt::Display> fmt::Display for Spaced<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for (i, item) in self.0.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }

    pub fn cards<S: Serializer>(cards: &[Card], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&Spaced(cards))
    }

    pub fn up_card<S: Serializer>(card: &Option<Card>, serializer: S) -> Result<S::Ok, S::Error> {
        match card {
            Some(card) => serializer.collect_str(card),
            None => serializer.serialize_none(),
        }
    }

    pub fn outcomes<S: Serializer>(
        outcomes: &[HandOutcome],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&Spaced(outcomes))
    }
}

/// Aggregate results of one policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    /// Policy name.
    pub policy: &'static str,
    /// Rounds played.
    pub rounds: usize,
    /// Sum of round balance changes.
    pub total_balance: f64,
    /// Decisions taken.
    pub decisions: usize,
    /// Decisions that matched the book.
    pub optimal_decisions: usize,
}

impl Summary {
    /// Summarizes records per policy, ordered by policy name.
    #[must_use]
    pub fn from_records(records: &[DecisionRecord]) -> Vec<Self> {
        let mut by_policy: BTreeMap<&'static str, Self> = BTreeMap::new();

        for record in records {
            let summary = by_policy.entry(record.policy).or_insert_with(|| Self {
                policy: record.policy,
                rounds: 0,
                total_balance: 0.0,
                decisions: 0,
                optimal_decisions: 0,
            });

            if let Some(change) = record.balance_change {
                summary.rounds += 1;
                summary.total_balance += change;
            }
            if record.action.is_some() {
                summary.decisions += 1;
                if record.is_optimal() {
                    summary.optimal_decisions += 1;
                }
            }
        }

        by_policy.into_values().collect()
    }

    /// Returns the average balance change per round.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for round counts"
    )]
    pub fn average(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_balance / self.rounds as f64
        }
    }

    /// Returns the share of decisions that matched the book, in percent.
    ///
    /// Rounds settled on the deal have no decision and are left out, so they
    /// count neither for nor against the policy.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for decision counts"
    )]
    pub fn accuracy(&self) -> f64 {
        if self.decisions == 0 {
            0.0
        } else {
            self.optimal_decisions as f64 / self.decisions as f64 * 100.0
        }
    }
}

/// Plays every round in `rounds` with every policy on a pool of
/// `concurrency` worker threads.
///
/// Round `n` is seeded with `n`, so all policies face the same shoe. Records
/// come back in round order, and within a round in policy order.
///
/// # Errors
///
/// Returns an error if the worker pool cannot be built.
#[cfg(feature = "parallel")]
pub fn run_benchmark(
    rounds: core::ops::Range<u64>,
    policies: &[&dyn Policy],
    concurrency: usize,
) -> Result<Vec<DecisionRecord>, crate::error::SimulateError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(concurrency)
        .build()?;

    tracing::info!(
        rounds = rounds.end.saturating_sub(rounds.start),
        policies = policies.len(),
        concurrency,
        "benchmark started"
    );

    let records: Vec<DecisionRecord> = pool.install(|| {
        rounds
            .into_par_iter()
            .flat_map_iter(|round_id| {
                policies
                    .iter()
                    .flat_map(move |policy| play_round(round_id, round_id, *policy))
            })
            .collect()
    });

    tracing::info!(records = records.len(), "benchmark finished");
    Ok(records)
}
