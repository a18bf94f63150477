//! Basic strategy lookup.
//!
//! The tables cover a multi-deck shoe where the dealer stands on 17, pairs
//! split once, and doubling after a split is not part of the book play. Each
//! row lists the play against dealer up cards 2 through 10 and then the ace:
//!
//! | code | play      |
//! |------|-----------|
//! | `H`  | hit       |
//! | `S`  | stand     |
//! | `D`  | double    |
//! | `P`  | split     |
//! | `R`  | surrender |

use crate::action::Action;
use crate::card::{Card, Rank};
use crate::hand::Hand;

/// Number of dealer up-card columns (2 through 10, then the ace).
const COLUMNS: usize = 10;

type Row = [Action; COLUMNS];

const fn row(codes: &[u8; COLUMNS]) -> Row {
    let mut out = [Action::Hit; COLUMNS];
    let mut i = 0;
    while i < COLUMNS {
        out[i] = match codes[i] {
            b'H' => Action::Hit,
            b'S' => Action::Stand,
            b'D' => Action::Double,
            b'P' => Action::Split,
            b'R' => Action::Surrender,
            _ => panic!("unknown strategy code"),
        };
        i += 1;
    }
    out
}

/// Lowest hard total in [`HARD`].
const HARD_MIN: u8 = 5;

/// Hard totals 5 through 21.
static HARD: [Row; 17] = [
    row(b"HHHHHHHHHH"), // 5
    row(b"HHHHHHHHHH"), // 6
    row(b"HHHHHHHHHH"), // 7
    row(b"HHHHHHHHHH"), // 8
    row(b"HDDDDHHHHH"), // 9
    row(b"DDDDDDDDHH"), // 10
    row(b"DDDDDDDDDD"), // 11
    row(b"HHSSSHHHHH"), // 12
    row(b"SSSSSHHHHH"), // 13
    row(b"SSSSSHHHHH"), // 14
    row(b"SSSSSHHHRH"), // 15
    row(b"SSSSSHHRRR"), // 16
    row(b"SSSSSSSSSS"), // 17
    row(b"SSSSSSSSSS"), // 18
    row(b"SSSSSSSSSS"), // 19
    row(b"SSSSSSSSSS"), // 20
    row(b"SSSSSSSSSS"), // 21
];

/// Lowest soft total in [`SOFT`].
const SOFT_MIN: u8 = 13;

/// Soft totals 13 through 21.
static SOFT: [Row; 9] = [
    row(b"HHHDDHHHHH"), // 13
    row(b"HHHDDHHHHH"), // 14
    row(b"HHDDDHHHHH"), // 15
    row(b"HHDDDHHHHH"), // 16
    row(b"HDDDDHHHHH"), // 17
    row(b"SDDDDSSHHH"), // 18
    row(b"SSSSSSSSSS"), // 19
    row(b"SSSSSSSSSS"), // 20
    row(b"SSSSSSSSSS"), // 21
];

/// Pair rows, with every ten-valued rank sharing one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairRow {
    Aces,
    Tens,
    Nines,
    Eights,
    Sevens,
    Sixes,
    Fives,
    Fours,
    Threes,
    Twos,
}

impl PairRow {
    const fn from_rank(rank: Rank) -> Self {
        match rank {
            Rank::Ace => Self::Aces,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => Self::Tens,
            Rank::Nine => Self::Nines,
            Rank::Eight => Self::Eights,
            Rank::Seven => Self::Sevens,
            Rank::Six => Self::Sixes,
            Rank::Five => Self::Fives,
            Rank::Four => Self::Fours,
            Rank::Three => Self::Threes,
            Rank::Two => Self::Twos,
        }
    }

    fn row(self) -> &'static Row {
        &PAIRS[self as usize]
    }
}

/// Pair rows in [`PairRow`] order.
static PAIRS: [Row; 10] = [
    row(b"PPPPPPPPPP"), // A,A
    row(b"SSSSSSSSSS"), // T,T
    row(b"PPPPPSPPSS"), // 9,9
    row(b"PPPPPPPPPP"), // 8,8
    row(b"PPPPPPHHHH"), // 7,7
    row(b"PPPPPHHHHH"), // 6,6
    row(b"DDDDDDDDHH"), // 5,5
    row(b"HHHPPHHHHH"), // 4,4
    row(b"PPPPPPHHHH"), // 3,3
    row(b"PPPPPPHHHH"), // 2,2
];

/// Maps a dealer up card to its table column. The ace, or a missing card,
/// is the last column.
fn dealer_column(up_card: Option<Card>) -> usize {
    match up_card.map(Card::points) {
        Some(points @ 2..=10) => usize::from(points - 2),
        _ => COLUMNS - 1,
    }
}

fn lookup<const N: usize>(table: &[Row; N], min: u8, total: u8) -> Option<&Row> {
    total
        .checked_sub(min)
        .and_then(|index| table.get(usize::from(index)))
}

/// Returns the book play for a player hand against the dealer's hand.
///
/// Only the dealer's first card is consulted.
///
/// # Example
///
/// ```
/// use bjcoach::{Action, Card, Hand, Rank, Suit, optimal_play};
///
/// let player = Hand::from_cards([
///     Card::new(Rank::Eight, Suit::Hearts),
///     Card::new(Rank::Eight, Suit::Spades),
/// ]);
/// let dealer = Hand::from_cards([Card::new(Rank::Ace, Suit::Clubs)]);
/// assert_eq!(optimal_play(&player, &dealer), Action::Split);
/// ```
#[must_use]
pub fn optimal_play(player: &Hand, dealer: &Hand) -> Action {
    optimal_play_against(player, dealer.up_card())
}

/// Returns the book play for a player hand against a dealer up card.
///
/// Pairs are looked up first, then soft totals, then hard totals. A double
/// the hand cannot take becomes a hit (a stand on soft 18 and above), and an
/// unavailable surrender becomes a hit. Totals outside every table stand on
/// 17 or more and hit otherwise.
#[must_use]
pub fn optimal_play_against(player: &Hand, up_card: Option<Card>) -> Action {
    let column = dealer_column(up_card);
    let value = player.value();

    if player.is_pair() && !player.is_split() {
        let rank = player.cards()[0].rank;
        return PairRow::from_rank(rank).row()[column];
    }

    if player.is_soft() {
        if let Some(row) = lookup(&SOFT, SOFT_MIN, value) {
            return match row[column] {
                Action::Double if !player.can_double() => {
                    if value <= 17 {
                        Action::Hit
                    } else {
                        Action::Stand
                    }
                }
                action => action,
            };
        }
    }

    if let Some(row) = lookup(&HARD, HARD_MIN, value) {
        return match row[column] {
            Action::Double if !player.can_double() => Action::Hit,
            Action::Surrender if !player.can_surrender() => Action::Hit,
            action => action,
        };
    }

    if value >= 17 {
        Action::Stand
    } else {
        Action::Hit
    }
}

/// Returns whether `action` matches the book play.
#[must_use]
pub fn is_correct(player: &Hand, dealer: &Hand, action: Action) -> bool {
    optimal_play(player, dealer) == action
}
