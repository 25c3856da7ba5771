use crate::slots::{self, GameRng, SpinError, SpinResult};
use reelhouse_types::{
    MachineType, Profile, SaveData, MAX_BET, MAX_LINES, MIN_BET, RESET_BALANCE, STARTING_BALANCE,
};
use thiserror::Error;
use tracing::{debug, info};

/// Error from a session operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Spin(#[from] SpinError),
    /// Deposit amount failed validation.
    #[error("deposit must be a positive amount")]
    InvalidDeposit,
    /// The operation is disabled while hardcore mode is active.
    #[error("{0} is disabled in hardcore mode")]
    HardcoreBlocked(&'static str),
}

/// Receipt for one completed spin transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinReceipt {
    pub result: SpinResult,
    pub stake: u64,
    pub balance_after: u64,
}

/// A playing session: one profile bound to one machine and one RNG.
///
/// Every profile mutation flows through a handler here. The spin handler
/// is a single atomic transaction; on any validation failure it returns
/// before touching the profile, counters included.
pub struct Session {
    machine: MachineType,
    profile: Profile,
    rng: GameRng,
}

impl Session {
    pub fn new(machine: MachineType, profile: Profile, rng: GameRng) -> Self {
        Self {
            machine,
            profile,
            rng,
        }
    }

    /// Fresh profile on the given machine, entropy-seeded.
    pub fn fresh(machine: MachineType) -> Self {
        Self::new(machine, Profile::new(), GameRng::from_entropy())
    }

    pub fn machine(&self) -> MachineType {
        self.machine
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn into_profile(self) -> Profile {
        self.profile
    }

    /// Validate bet, lines, and affordability; returns the stake.
    fn validate(&self, bet: u64, lines: u8) -> Result<u64, SpinError> {
        if bet < MIN_BET || bet > MAX_BET {
            return Err(SpinError::InvalidBet {
                bet,
                min: MIN_BET,
                max: MAX_BET,
            });
        }
        if self.machine == MachineType::MultiLine && (lines < 1 || lines > MAX_LINES) {
            return Err(SpinError::InvalidLines {
                lines,
                max: MAX_LINES,
            });
        }
        let stake = slots::stake(self.machine, bet, lines);
        if stake > self.profile.balance {
            return Err(SpinError::InsufficientBalance {
                stake,
                balance: self.profile.balance,
            });
        }
        Ok(stake)
    }

    /// Whether a spin at this bet and line count would currently pass
    /// validation. Used as the auto-spin affordability gate.
    pub fn can_spin(&self, bet: u64, lines: u8) -> bool {
        self.validate(bet, lines).is_ok()
    }

    /// The spin transaction: validate → deduct stake → generate symbols →
    /// resolve winnings → credit winnings → update counters.
    pub fn spin(&mut self, bet: u64, lines: u8) -> Result<SpinReceipt, SpinError> {
        let stake = self.validate(bet, lines)?;
        let result = slots::play_machine(self.machine, bet, lines, &mut self.rng)?;

        // Validation guarantees stake ≤ balance.
        self.profile.balance = (self.profile.balance - stake).saturating_add(result.winnings);
        self.profile.spins += 1;
        if result.winnings > 0 {
            self.profile.wins += 1;
            self.profile.biggest_win = self.profile.biggest_win.max(result.winnings);
        }

        debug!(
            machine = %self.machine,
            bet,
            lines,
            stake,
            winnings = result.winnings,
            balance = self.profile.balance,
            "spin resolved"
        );

        Ok(SpinReceipt {
            result,
            stake,
            balance_after: self.profile.balance,
        })
    }

    /// Credit a deposit. Zero amounts are rejected with no state change.
    pub fn deposit(&mut self, amount: u64) -> Result<u64, SessionError> {
        if amount == 0 {
            return Err(SessionError::InvalidDeposit);
        }
        self.profile.balance = self.profile.balance.saturating_add(amount);
        self.profile.total_deposited = self.profile.total_deposited.saturating_add(amount);
        info!(amount, balance = self.profile.balance, "deposit");
        Ok(self.profile.balance)
    }

    /// Zero the cumulative counters. Blocked in hardcore mode.
    pub fn reset_stats(&mut self) -> Result<(), SessionError> {
        if self.profile.hardcore {
            return Err(SessionError::HardcoreBlocked("stat reset"));
        }
        self.profile.spins = 0;
        self.profile.wins = 0;
        self.profile.biggest_win = 0;
        Ok(())
    }

    /// Restore the balance to the machine's reset value. The classic
    /// machine treats this as the full reset: counters and deposit history
    /// are wiped with it. Blocked in hardcore mode.
    pub fn reset_balance(&mut self) -> Result<(), SessionError> {
        if self.profile.hardcore {
            return Err(SessionError::HardcoreBlocked("balance reset"));
        }
        match self.machine {
            MachineType::MultiLine => {
                self.profile.balance = RESET_BALANCE;
            }
            MachineType::Classic => {
                self.profile.spins = 0;
                self.profile.wins = 0;
                self.profile.biggest_win = 0;
                self.profile.balance = STARTING_BALANCE;
                self.profile.total_deposited = 0;
            }
        }
        info!(balance = self.profile.balance, "balance reset");
        Ok(())
    }

    /// Toggle hardcore mode. Enabling pins the balance to the fixed
    /// starting value immediately; disabling changes nothing else.
    pub fn set_hardcore(&mut self, enabled: bool) {
        self.profile.hardcore = enabled;
        self.profile.apply_hardcore_pin();
        info!(enabled, balance = self.profile.balance, "hardcore mode");
    }

    /// Export the profile as a save document.
    pub fn save(&self) -> SaveData {
        SaveData::from(&self.profile)
    }

    /// Replace the profile from a save document. The hardcore pin is
    /// re-applied as part of the load.
    pub fn load(&mut self, save: SaveData) {
        self.profile = save.into_profile();
    }
}
