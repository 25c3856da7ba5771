use crate::STARTING_BALANCE;
use serde::{Deserialize, Serialize};

/// Session-scoped player state.
///
/// A single value object holding the balance, cumulative counters, and the
/// hardcore flag. The execution layer is the only writer; front ends read
/// it and never mutate fields directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub balance: u64,
    pub spins: u64,
    pub wins: u64,
    pub biggest_win: u64,
    pub total_deposited: u64,
    pub hardcore: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            balance: STARTING_BALANCE,
            spins: 0,
            wins: 0,
            biggest_win: 0,
            total_deposited: 0,
            hardcore: false,
        }
    }
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of spins that returned a non-zero win. Zero before the
    /// first spin.
    pub fn win_rate(&self) -> f64 {
        if self.spins == 0 {
            return 0.0;
        }
        (self.wins as f64 / self.spins as f64) * 100.0
    }

    /// Re-apply the hardcore invariant: while the flag is set, the balance
    /// is pinned to the fixed starting value and deposit history is wiped.
    pub fn apply_hardcore_pin(&mut self) {
        if self.hardcore {
            self.balance = STARTING_BALANCE;
            self.total_deposited = 0;
        }
    }
}
