//! One-second ticker background task

use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tracing::debug;

/// Interval between countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One elapsed second, tagged with the run that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// Owns the periodic tick task for one run of the countdown.
///
/// The task lives exactly as long as the handle; dropping it aborts the
/// task on every exit path.
#[derive(Debug)]
pub struct TickerHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Spawn a ticker whose first tick fires one period from now
    pub fn spawn(generation: u64, tick_tx: mpsc::UnboundedSender<Tick>) -> Self {
        debug!("Acquiring ticker for run {}", generation);

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                interval.tick().await;
                if tick_tx.send(Tick { generation }).is_err() {
                    debug!("Tick receiver closed, stopping ticker for run {}", generation);
                    break;
                }
            }
        });

        Self { generation, task }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        debug!("Releasing ticker for run {}", self.generation);
        self.task.abort();
    }
}
