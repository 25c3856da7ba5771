//! Slot machine execution module.
//!
//! This module contains the reel generators and payout resolvers for both
//! machines:
//! - MultiLine (weighted 3×3 grid, horizontal paylines)
//! - Classic (three uniform reels, exact-combination paytable)
//!
//! Machines are pure aside from consuming randomness; balance accounting
//! lives in the session layer.

pub mod classic;
pub mod multi_line;

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reelhouse_types::{Emblem, MachineType, Symbol};
use thiserror::Error;

/// Random number generator driving the reels.
///
/// ChaCha-backed and seedable, so replays and batch simulations are
/// exactly reproducible; interactive play seeds from OS entropy.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create an RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create an RNG from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Get a uniform value in range [0, max).
    pub fn next_bounded(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..max)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Draw a uniformly random element from the pool without replacement.
    pub fn draw<T>(&mut self, pool: &mut Vec<T>) -> Option<T> {
        if pool.is_empty() {
            return None;
        }
        let idx = self.next_bounded(pool.len());
        Some(pool.swap_remove(idx))
    }
}

/// Error during spin execution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpinError {
    /// Bet outside the configured bounds.
    #[error("invalid bet {bet}: must be between {min} and {max}")]
    InvalidBet { bet: u64, min: u64, max: u64 },
    /// Line count outside the configured bounds.
    #[error("invalid lines {lines}: must be between 1 and {max}")]
    InvalidLines { lines: u8, max: u8 },
    /// Stake exceeds the current balance.
    #[error("insufficient balance: stake {stake} exceeds balance {balance}")]
    InsufficientBalance { stake: u64, balance: u64 },
    /// More rows requested than the reel strip holds.
    #[error("reel strip exhausted: cannot draw {rows} rows from {population} symbols")]
    ReelExhausted { rows: usize, population: usize },
}

/// Symbols produced by one spin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reels {
    /// Multi-line grid, indexed `[column][row]`.
    Grid(Vec<Vec<Symbol>>),
    /// Classic three-reel line.
    Line([Emblem; 3]),
}

/// Outcome of one resolved spin: the symbols drawn, total winnings, and
/// the 1-indexed paylines that won (always empty on the classic machine,
/// which pays on the whole line).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinResult {
    pub reels: Reels,
    pub winnings: u64,
    pub win_lines: Vec<u8>,
}

/// Trait for slot machine implementations.
pub trait SlotMachine {
    /// Generate symbols and resolve winnings for one spin.
    fn play(bet: u64, lines: u8, rng: &mut GameRng) -> Result<SpinResult, SpinError>;
}

/// Dispatch a spin to the appropriate machine module.
pub fn play_machine(
    machine: MachineType,
    bet: u64,
    lines: u8,
    rng: &mut GameRng,
) -> Result<SpinResult, SpinError> {
    match machine {
        MachineType::MultiLine => multi_line::MultiLine::play(bet, lines, rng),
        MachineType::Classic => classic::Classic::play(bet, lines, rng),
    }
}

/// Total stake a spin deducts up front: bet × lines on the multi-line
/// machine, the bare bet on the classic machine.
pub fn stake(machine: MachineType, bet: u64, lines: u8) -> u64 {
    match machine {
        MachineType::MultiLine => bet.saturating_mul(lines as u64),
        MachineType::Classic => bet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_rng_deterministic() {
        let mut rng1 = GameRng::from_seed(7);
        let mut rng2 = GameRng::from_seed(7);

        for _ in 0..100 {
            assert_eq!(rng1.next_bounded(52), rng2.next_bounded(52));
        }
    }

    #[test]
    fn test_game_rng_different_seeds() {
        let mut rng1 = GameRng::from_seed(1);
        let mut rng2 = GameRng::from_seed(2);

        let seq1: Vec<usize> = (0..10).map(|_| rng1.next_bounded(1_000)).collect();
        let seq2: Vec<usize> = (0..10).map(|_| rng2.next_bounded(1_000)).collect();
        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_game_rng_bounded() {
        let mut rng = GameRng::from_seed(42);
        for _ in 0..1000 {
            assert!(rng.next_bounded(20) < 20);
        }
    }

    #[test]
    fn test_game_rng_draw_consumes() {
        let mut rng = GameRng::from_seed(42);
        let mut pool: Vec<u8> = (0..20).collect();

        let mut drawn = Vec::new();
        while let Some(value) = rng.draw(&mut pool) {
            drawn.push(value);
        }

        // Every element drawn exactly once.
        assert!(pool.is_empty());
        drawn.sort_unstable();
        assert_eq!(drawn, (0..20).collect::<Vec<u8>>());

        // Empty pool yields nothing.
        assert_eq!(rng.draw(&mut pool), None);
    }

    #[test]
    fn test_game_rng_shuffle_preserves_elements() {
        let mut rng = GameRng::from_seed(9);
        let mut values: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_stake() {
        assert_eq!(stake(MachineType::MultiLine, 10, 3), 30);
        assert_eq!(stake(MachineType::Classic, 10, 3), 10);
    }
}
