//! Strategy benchmark example.
//!
//! Plays the same seeded rounds with each policy, writes every decision to a
//! CSV file, and prints a summary per policy.
//!
//! ```sh
//! cargo run --example benchmark --features parallel,serde -- -n 1000 -o results.csv
//! ```

#![allow(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use bjcoach::{
    AlwaysHit, AlwaysStand, BasicStrategy, DEFAULT_CONCURRENCY, DecisionRecord, Policy, Summary,
    run_benchmark,
};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(about = "Blackjack strategy benchmark")]
struct Args {
    /// Number of rounds to play
    #[arg(short = 'n', long, default_value_t = 10)]
    num_hands: u64,

    /// First round id; each round is seeded with its id
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Policies to benchmark
    #[arg(
        short,
        long,
        value_enum,
        num_args = 1..,
        default_values = ["optimal", "always_hit", "always_stand"]
    )]
    strategies: Vec<PolicyName>,

    /// Output CSV file
    #[arg(short, long, default_value = "benchmark_results.csv")]
    output: PathBuf,

    /// Worker threads
    #[arg(short = 'j', long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PolicyName {
    #[value(name = "optimal")]
    Optimal,
    #[value(name = "always_hit")]
    AlwaysHit,
    #[value(name = "always_stand")]
    AlwaysStand,
}

impl PolicyName {
    fn policy(self) -> &'static dyn Policy {
        match self {
            Self::Optimal => &BasicStrategy,
            Self::AlwaysHit => &AlwaysHit,
            Self::AlwaysStand => &AlwaysStand,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut names = args.strategies.clone();
    names.dedup();
    let policies: Vec<&dyn Policy> = names.iter().map(|name| name.policy()).collect();

    println!(
        "Running benchmark with {} hands (starting at {})",
        args.num_hands, args.start
    );
    println!(
        "Strategies: {}",
        policies
            .iter()
            .map(|policy| policy.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let rounds = args.start..args.start.saturating_add(args.num_hands);
    let records = run_benchmark(rounds, &policies, args.concurrency)?;

    save_to_csv(&records, &args.output)?;
    println!("\nResults saved to {}", args.output.display());

    print_summary(&records);
    Ok(())
}

fn save_to_csv(records: &[DecisionRecord], path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_summary(records: &[DecisionRecord]) {
    println!("\n{}", "=".repeat(50));
    println!("BENCHMARK SUMMARY");
    println!("{}", "=".repeat(50));

    for summary in Summary::from_records(records) {
        println!("\n{}", summary.policy.to_uppercase());
        println!("  Hands played: {}", summary.rounds);
        println!("  Total balance: {:+.2}", summary.total_balance);
        println!("  Avg per hand: {:+.4}", summary.average());
        println!(
            "  Decision accuracy: {:.1}% ({}/{})",
            summary.accuracy(),
            summary.optimal_decisions,
            summary.decisions
        );
    }
}
