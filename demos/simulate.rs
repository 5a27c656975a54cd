//! Strategy simulation demo.
//!
//! Plays every strategy for a number of rounds at the default bet, prints one
//! CSV row per round to stdout and a summary per strategy to stderr.
//!
//! Usage: `cargo run --example simulate -- [ROUNDS] [SEED]`

use bjsim::{GameOptions, RoundRecord, Strategy, Summary, simulation};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let rounds = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let options = GameOptions::default();
    let bet = options.default_bet;
    let records = simulation::simulate_all(rounds, bet, &options, seed);

    println!("{}", RoundRecord::CSV_HEADER);
    for record in &records {
        println!("{}", record.to_csv_row());
    }

    for strategy in Strategy::ALL {
        let played: Vec<RoundRecord> = records
            .iter()
            .filter(|record| record.strategy == strategy)
            .copied()
            .collect();
        let summary = Summary::from_records(&played);
        eprintln!(
            "{strategy:>13}: {} rounds, {} wins, {} losses, {} pushes, net {:+}, win rate {:.1}%",
            summary.rounds,
            summary.wins,
            summary.losses,
            summary.pushes,
            summary.net,
            summary.win_rate() * 100.0
        );
    }
}
