/// Minimum bet per line.
pub const MIN_BET: u64 = 1;

/// Maximum bet per line.
pub const MAX_BET: u64 = 100;

/// Maximum active paylines on the multi-line machine.
pub const MAX_LINES: u8 = 3;

/// Rows in the multi-line grid.
pub const ROWS: usize = 3;

/// Columns (reels) in the multi-line grid.
pub const COLS: usize = 3;

/// Reels on the classic machine.
pub const CLASSIC_REELS: usize = 3;

/// Balance granted to a fresh profile, and the value hardcore mode pins
/// the balance to whenever it is enabled or a save is loaded.
pub const STARTING_BALANCE: u64 = 100;

/// Balance restored by an explicit balance reset on the multi-line machine.
pub const RESET_BALANCE: u64 = 500;

/// Multiplier paid by the classic machine when the three reels contain
/// exactly one repeated pair.
pub const PAIR_MULTIPLIER: u64 = 2;

/// Default pause between auto-spin rounds in milliseconds.
pub const DEFAULT_SPIN_DELAY_MS: u64 = 350;
