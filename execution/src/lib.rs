//! Game logic for reelhouse: reel generation, payout resolution, and the
//! session layer that applies spins to a player profile as atomic
//! transactions.

pub mod slots;

mod autospin;
mod session;

pub use autospin::AutoSpin;
pub use session::{Session, SessionError, SpinReceipt};
