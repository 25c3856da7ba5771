//! Classic three-reel machine.
//!
//! Each reel is an independent uniform draw over the emblem alphabet.
//! Payouts are exact-combination lookups; combinations missing from the
//! table fall through to a flat pair rule.

use super::{GameRng, Reels, SlotMachine, SpinError, SpinResult};
use reelhouse_types::{Emblem, CLASSIC_REELS, PAIR_MULTIPLIER};

/// Exact-combination payout table, checked in order. Keys are distinct, so
/// at most one entry can match.
const PAYTABLE: [([Emblem; CLASSIC_REELS], u64); 5] = [
    ([Emblem::Seven, Emblem::Seven, Emblem::Seven], 50),
    ([Emblem::Star, Emblem::Star, Emblem::Star], 25),
    ([Emblem::Bell, Emblem::Bell, Emblem::Bell], 15),
    ([Emblem::Lemon, Emblem::Lemon, Emblem::Lemon], 10),
    ([Emblem::Cherry, Emblem::Cherry, Emblem::Cherry], 8),
];

/// Spin the three reels, with replacement.
pub fn spin_reels(rng: &mut GameRng) -> [Emblem; CLASSIC_REELS] {
    let mut reels = [Emblem::Cherry; CLASSIC_REELS];
    for slot in reels.iter_mut() {
        *slot = Emblem::ALL[rng.next_bounded(Emblem::ALL.len())];
    }
    reels
}

/// Count distinct emblems among the reels.
fn distinct(reels: &[Emblem; CLASSIC_REELS]) -> usize {
    let mut seen: Vec<Emblem> = Vec::with_capacity(CLASSIC_REELS);
    for &emblem in reels {
        if !seen.contains(&emblem) {
            seen.push(emblem);
        }
    }
    seen.len()
}

/// Payout multiplier for a reel combination.
///
/// The exact table takes precedence; the pair rule applies only when no
/// exact combination matched and the reels hold precisely one repeated
/// pair — not three of a kind and not three distinct emblems.
pub fn payout_multiplier(reels: &[Emblem; CLASSIC_REELS]) -> u64 {
    for (combo, multiplier) in PAYTABLE {
        if combo == *reels {
            return multiplier;
        }
    }
    if distinct(reels) == 2 {
        return PAIR_MULTIPLIER;
    }
    0
}

pub struct Classic;

impl SlotMachine for Classic {
    fn play(bet: u64, _lines: u8, rng: &mut GameRng) -> Result<SpinResult, SpinError> {
        let reels = spin_reels(rng);
        let winnings = payout_multiplier(&reels) * bet;
        Ok(SpinResult {
            reels: Reels::Line(reels),
            winnings,
            win_lines: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelhouse_types::Emblem::{Bell, Cherry, Lemon, Seven, Star};

    #[test]
    fn test_jackpot_combinations() {
        assert_eq!(payout_multiplier(&[Seven, Seven, Seven]), 50);
        assert_eq!(payout_multiplier(&[Star, Star, Star]), 25);
        assert_eq!(payout_multiplier(&[Bell, Bell, Bell]), 15);
        assert_eq!(payout_multiplier(&[Lemon, Lemon, Lemon]), 10);
        assert_eq!(payout_multiplier(&[Cherry, Cherry, Cherry]), 8);
    }

    #[test]
    fn test_pair_rule() {
        // Exactly two distinct emblems, in any arrangement.
        assert_eq!(payout_multiplier(&[Cherry, Lemon, Cherry]), 2);
        assert_eq!(payout_multiplier(&[Cherry, Cherry, Lemon]), 2);
        assert_eq!(payout_multiplier(&[Lemon, Cherry, Cherry]), 2);
    }

    #[test]
    fn test_three_distinct_pay_nothing() {
        assert_eq!(payout_multiplier(&[Cherry, Lemon, Bell]), 0);
        assert_eq!(payout_multiplier(&[Seven, Star, Bell]), 0);
    }

    #[test]
    fn test_documented_payouts_at_bet_five() {
        // (reels, bet 5) => winnings
        assert_eq!(payout_multiplier(&[Seven, Seven, Seven]) * 5, 250);
        assert_eq!(payout_multiplier(&[Cherry, Lemon, Cherry]) * 5, 10);
        assert_eq!(payout_multiplier(&[Cherry, Lemon, Bell]) * 5, 0);
    }

    #[test]
    fn test_lookup_is_pure() {
        let reels = [Star, Star, Cherry];
        let first = payout_multiplier(&reels);
        for _ in 0..10 {
            assert_eq!(payout_multiplier(&reels), first);
        }
    }

    #[test]
    fn test_spin_covers_alphabet() {
        let mut rng = GameRng::from_seed(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1_000 {
            for emblem in spin_reels(&mut rng) {
                seen.insert(emblem);
            }
        }
        // With replacement and a thousand spins, every emblem shows up.
        assert_eq!(seen.len(), Emblem::ALL.len());
    }

    #[test]
    fn test_play_reports_line() {
        let mut rng = GameRng::from_seed(6);
        let result = Classic::play(5, 1, &mut rng).unwrap();
        match result.reels {
            Reels::Line(reels) => {
                assert_eq!(result.winnings, payout_multiplier(&reels) * 5);
            }
            Reels::Grid(_) => panic!("classic machine produced a grid"),
        }
        assert!(result.win_lines.is_empty());
    }
}
