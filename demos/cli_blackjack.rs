//! CLI blackjack trainer example.
//!
//! Plays rounds against the dealer and grades every decision against basic
//! strategy. Pass a number as the first argument to seed the shoe, and
//! `-v` to log engine events.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use bjcoach::{Action, Card, Game, GameOptions, Hand, Suit};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let level = if args.iter().any(|arg| arg == "-v") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let seed = args.iter().find_map(|arg| arg.parse::<u64>().ok());
    let options = seed.map_or_else(GameOptions::default, |seed| {
        GameOptions::default().with_seed(seed)
    });
    let mut game = Game::new(options);

    println!("Blackjack trainer (type 'q' to quit)");

    let mut decisions = 0_u32;
    let mut correct = 0_u32;

    loop {
        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            break;
        }

        while let Some(optimal) = game.optimal_play() {
            print_table(&game);

            let legal = game.legal_actions();
            println!("{}", format_actions(&legal));

            let input = prompt_line("Action: ");
            if input == "q" || input == "quit" {
                print_accuracy(decisions, correct);
                return;
            }

            let action = match input.parse::<Action>() {
                Ok(action) => action,
                Err(err) => {
                    println!("{err}: {input}");
                    continue;
                }
            };

            if !legal.contains(&action) {
                println!("{action} is not allowed on this hand.");
                continue;
            }

            decisions += 1;
            if action == optimal {
                correct += 1;
                println!("{}", colorize("Correct.", "32"));
            } else {
                println!(
                    "{}",
                    colorize(&format!("Book play was {optimal}."), "33")
                );
            }

            if let Err(err) = game.apply(action) {
                println!("Action error: {err}");
            }
        }

        print_settlement(&game);
        print_accuracy(decisions, correct);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_table(game: &Game) {
    let remaining = game.cards_remaining();
    println!("\nShoe: {remaining} cards remaining");

    match game.dealer_up_card() {
        Some(card) => println!("Dealer: {} ??", format_card(card)),
        None => println!("Dealer: (no cards)"),
    }

    for (index, hand) in game.player_hands().iter().enumerate() {
        let marker = if index == game.current_hand_index() {
            "*"
        } else {
            " "
        };
        println!(
            "{} Hand {}: {} | value {}{}",
            marker,
            index,
            format_hand(hand),
            hand.value(),
            if hand.is_soft() { " (soft)" } else { "" }
        );
    }
    println!();
}

fn print_settlement(game: &Game) {
    let dealer = game.dealer_hand();
    println!(
        "\nDealer: {} (value {})",
        format_hand(dealer),
        dealer.value()
    );

    for result in game.round_results() {
        println!(
            "Hand {}: {} | value {} | {} ({:+})",
            result.hand_index,
            format_hand(&result.hand),
            result.hand.value(),
            result.outcome,
            result.balance_delta
        );
    }

    let stats = game.stats();
    println!(
        "Balance: {:+} over {} hands",
        stats.balance, stats.hands_played
    );
}

fn print_accuracy(decisions: u32, correct: u32) {
    if decisions > 0 {
        println!(
            "Decisions: {correct}/{decisions} correct ({:.1}%)",
            f64::from(correct) / f64::from(decisions) * 100.0
        );
    }
}

fn format_actions(legal: &[Action]) -> String {
    let parts: Vec<String> = Action::ALL
        .iter()
        .map(|action| {
            let text = format!("[{}]{}", action_key(*action), action);
            if legal.contains(action) {
                colorize(&text, "32")
            } else {
                colorize(&text, "90")
            }
        })
        .collect();
    format!("Actions: {}", parts.join(" "))
}

const fn action_key(action: Action) -> char {
    match action {
        Action::Hit => 'h',
        Action::Stand => 's',
        Action::Double => 'd',
        Action::Split => 'p',
        Action::Surrender => 'r',
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
