use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot machine variants.
///
/// `MultiLine` is the grid machine: a 3×3 board drawn deck-style from a
/// weighted strip, paying on horizontal lines. `Classic` is the three-reel
/// machine: independent uniform draws paying on exact combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineType {
    MultiLine,
    Classic,
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineType::MultiLine => write!(f, "multi-line"),
            MachineType::Classic => write!(f, "classic"),
        }
    }
}

/// Reel symbol on the multi-line machine.
///
/// The strip is deck-style: every column's working strip contains each
/// symbol `population()` times, and draws within a column consume it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    A,
    B,
    C,
    D,
}

impl Symbol {
    pub const ALL: [Symbol; 4] = [Symbol::A, Symbol::B, Symbol::C, Symbol::D];

    /// Copies of this symbol in a full reel strip. Rarer symbols pay more.
    pub const fn population(&self) -> usize {
        match self {
            Symbol::A => 2,
            Symbol::B => 4,
            Symbol::C => 6,
            Symbol::D => 8,
        }
    }

    /// Per-line payout value, multiplied by the per-line bet on a win.
    pub const fn line_value(&self) -> u64 {
        match self {
            Symbol::A => 5,
            Symbol::B => 4,
            Symbol::C => 3,
            Symbol::D => 2,
        }
    }
}

/// Total symbols in one full reel strip.
pub fn strip_population() -> usize {
    Symbol::ALL.iter().map(|s| s.population()).sum()
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::A => write!(f, "A"),
            Symbol::B => write!(f, "B"),
            Symbol::C => write!(f, "C"),
            Symbol::D => write!(f, "D"),
        }
    }
}

/// Reel emblem on the classic machine, drawn uniformly with replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emblem {
    Cherry,
    Lemon,
    Bell,
    Star,
    Seven,
}

impl Emblem {
    pub const ALL: [Emblem; 5] = [
        Emblem::Cherry,
        Emblem::Lemon,
        Emblem::Bell,
        Emblem::Star,
        Emblem::Seven,
    ];

    /// Display glyph, as rendered on the reels.
    pub const fn glyph(&self) -> &'static str {
        match self {
            Emblem::Cherry => "🍒",
            Emblem::Lemon => "🍋",
            Emblem::Bell => "🔔",
            Emblem::Star => "⭐",
            Emblem::Seven => "7️⃣",
        }
    }
}

impl fmt::Display for Emblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
