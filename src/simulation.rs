//! Batch simulation of automated play.
//!
//! Runs a fresh [`Game`] per strategy for a number of rounds at a flat bet
//! and records each round, so strategies can be compared on the same terms.
//!
//! ```
//! use bjsim::{GameOptions, Strategy, Summary, simulation};
//!
//! let records = simulation::simulate(Strategy::NeverBust, 20, 50, GameOptions::default(), 7);
//! let summary = Summary::from_records(&records);
//! assert_eq!(summary.rounds, records.len());
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::game::Game;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::strategy::Strategy;

/// Outcome of a simulated round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordOutcome {
    /// The player won.
    Win,
    /// The player lost.
    Loss,
    /// Tie.
    Push,
}

impl RecordOutcome {
    /// Lowercase label used in CSV output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Push => "push",
        }
    }
}

impl From<&RoundResult> for RecordOutcome {
    fn from(result: &RoundResult) -> Self {
        if result.outcome.is_win() {
            Self::Win
        } else if result.outcome.is_loss() {
            Self::Loss
        } else {
            Self::Push
        }
    }
}

/// One simulated round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub round: usize,
    /// Strategy that played the round.
    pub strategy: Strategy,
    /// Stake for the round.
    pub bet: i64,
    /// Balance before the round.
    pub old_balance: i64,
    /// Balance after the round.
    pub new_balance: i64,
    /// Round outcome.
    pub result: RecordOutcome,
}

impl RoundRecord {
    /// Header line matching [`to_csv_row`](Self::to_csv_row).
    pub const CSV_HEADER: &'static str = "round,ai_strategy,bet,old_balance,new_balance,result";

    /// Formats the record as a CSV row without a trailing newline.
    #[must_use]
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.round,
            self.strategy,
            self.bet,
            self.old_balance,
            self.new_balance,
            self.result.as_str()
        )
    }
}

/// Aggregate counts over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Rounds played.
    pub rounds: usize,
    /// Rounds won.
    pub wins: usize,
    /// Rounds lost.
    pub losses: usize,
    /// Rounds tied.
    pub pushes: usize,
    /// Sum of balance changes.
    pub net: i64,
}

impl Summary {
    /// Tallies the given records.
    #[must_use]
    pub fn from_records(records: &[RoundRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            summary.rounds += 1;
            match record.result {
                RecordOutcome::Win => summary.wins += 1,
                RecordOutcome::Loss => summary.losses += 1,
                RecordOutcome::Push => summary.pushes += 1,
            }
            summary.net = summary
                .net
                .saturating_add(record.new_balance.saturating_sub(record.old_balance));
            summary
        })
    }

    /// Fraction of rounds won, 0 when no rounds were played.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for round counts"
    )]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64
    }
}

/// Plays up to `rounds` rounds with `strategy` at a flat `bet`.
///
/// The strategy in `options` is replaced by `strategy`. Stops early once the
/// balance can no longer cover the bet, or if a round fails.
#[must_use]
pub fn simulate(
    strategy: Strategy,
    rounds: usize,
    bet: i64,
    options: GameOptions,
    seed: u64,
) -> Vec<RoundRecord> {
    let mut game = Game::new(options.with_strategy(Some(strategy)), seed);
    let mut records = Vec::with_capacity(rounds);

    for round in 1..=rounds {
        if game.balance() < bet {
            log::warn!("insufficient funds for {strategy} at round {round}, ending simulation");
            break;
        }

        let result = match game.play_round(bet) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("round {round} failed for {strategy}: {err}");
                break;
            }
        };

        records.push(RoundRecord {
            round,
            strategy,
            bet,
            old_balance: result.balance_before,
            new_balance: result.balance_after,
            result: RecordOutcome::from(&result),
        });

        game.reset_round();
    }

    records
}

/// Runs [`simulate`] for every strategy in [`Strategy::ALL`] and concatenates
/// the records.
#[must_use]
pub fn simulate_all(rounds: usize, bet: i64, options: &GameOptions, seed: u64) -> Vec<RoundRecord> {
    Strategy::ALL
        .into_iter()
        .flat_map(|strategy| {
            log::info!("simulating strategy: {strategy}");
            simulate(strategy, rounds, bet, options.clone(), seed)
        })
        .collect()
}
