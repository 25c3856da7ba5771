use crate::session::{Session, SpinReceipt};
use reelhouse_types::DEFAULT_SPIN_DELAY_MS;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};
use tracing::debug;

/// Auto-spin driver.
///
/// Repeats the single-spin transaction up to a bounded number of rounds,
/// pausing between rounds on the driving thread. Each round is gated by
/// the remaining count, the stop flag, and stake affordability; the first
/// failed gate ends the run silently.
pub struct AutoSpin {
    rounds: u32,
    delay: Duration,
    stop: Arc<AtomicBool>,
}

impl AutoSpin {
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds,
            delay: Duration::from_millis(DEFAULT_SPIN_DELAY_MS),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handle for cancelling the run from another thread. The flag is
    /// checked at the top of each round; an in-flight spin always
    /// completes.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    /// Run the sequence on the calling thread, returning the receipts of
    /// the spins performed.
    pub fn run(&self, session: &mut Session, bet: u64, lines: u8) -> Vec<SpinReceipt> {
        let mut receipts = Vec::new();
        for round in 0..self.rounds {
            if self.stop.load(Ordering::Relaxed) {
                debug!(round, "auto-spin cancelled");
                break;
            }
            if !session.can_spin(bet, lines) {
                debug!(round, "auto-spin stopped: stake no longer affordable");
                break;
            }
            if round > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            match session.spin(bet, lines) {
                Ok(receipt) => receipts.push(receipt),
                Err(_) => break,
            }
        }
        receipts
    }

    /// Run the sequence on a worker thread, handing the session back when
    /// it finishes — the non-blocking front-end model.
    pub fn spawn(
        self,
        mut session: Session,
        bet: u64,
        lines: u8,
    ) -> thread::JoinHandle<(Session, Vec<SpinReceipt>)> {
        thread::spawn(move || {
            let receipts = self.run(&mut session, bet, lines);
            (session, receipts)
        })
    }
}
