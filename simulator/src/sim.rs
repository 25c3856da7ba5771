//! Batch spin simulator.
//!
//! Runs a large number of spin transactions against scratch profiles and
//! merges the tallies into one report. Rounds are split across a fixed
//! number of independently seeded workers, so a given (seed, workers)
//! pair always reproduces the same report regardless of thread count.

use rayon::prelude::*;
use reelhouse_execution::{
    slots::{GameRng, SpinError},
    Session,
};
use reelhouse_types::{MachineType, Profile};
use serde::Serialize;

/// Parameters for one batch run.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    pub machine: MachineType,
    pub spins: u64,
    pub bet: u64,
    pub lines: u8,
    pub seed: u64,
    pub workers: u64,
}

/// Aggregated tallies from a batch run.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SimReport {
    pub spins: u64,
    pub wins: u64,
    pub total_staked: u64,
    pub total_returned: u64,
    pub biggest_win: u64,
}

impl SimReport {
    /// Fraction of spins that won anything.
    pub fn hit_rate(&self) -> f64 {
        if self.spins == 0 {
            return 0.0;
        }
        self.wins as f64 / self.spins as f64
    }

    /// Return to player: winnings as a fraction of total stake.
    pub fn rtp(&self) -> f64 {
        if self.total_staked == 0 {
            return 0.0;
        }
        self.total_returned as f64 / self.total_staked as f64
    }

    fn merge(self, other: Self) -> Self {
        Self {
            spins: self.spins + other.spins,
            wins: self.wins + other.wins,
            total_staked: self.total_staked + other.total_staked,
            total_returned: self.total_returned + other.total_returned,
            biggest_win: self.biggest_win.max(other.biggest_win),
        }
    }
}

/// Run the batch. The first invalid spin (bad bet or line count) aborts
/// the whole run with its error.
pub fn run(config: &SimConfig) -> Result<SimReport, SpinError> {
    let workers = config.workers.max(1);
    let base = config.spins / workers;
    let remainder = config.spins % workers;

    (0..workers)
        .into_par_iter()
        .map(|worker| {
            let rounds = base + u64::from(worker < remainder);
            run_worker(config, config.seed.wrapping_add(worker), rounds)
        })
        .try_reduce(SimReport::default, |left, right| Ok(left.merge(right)))
}

fn run_worker(config: &SimConfig, seed: u64, rounds: u64) -> Result<SimReport, SpinError> {
    // Scratch bankroll large enough that affordability never gates the run.
    let profile = Profile {
        balance: u64::MAX / 2,
        ..Profile::new()
    };
    let mut session = Session::new(config.machine, profile, GameRng::from_seed(seed));

    let mut report = SimReport::default();
    for _ in 0..rounds {
        let receipt = session.spin(config.bet, config.lines)?;
        report.spins += 1;
        report.total_staked += receipt.stake;
        report.total_returned += receipt.result.winnings;
        if receipt.result.winnings > 0 {
            report.wins += 1;
            report.biggest_win = report.biggest_win.max(receipt.result.winnings);
        }
    }
    Ok(report)
}
