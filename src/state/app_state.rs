//! Timer component state management

use chrono::{DateTime, Local};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use super::{TickOutcome, TimerState};
use crate::{
    services::Notifier,
    tasks::ticker::{Tick, TickerHandle},
    view::{Command, DisplaySnapshot},
};

/// The timer component: countdown state plus the resources its run owns.
///
/// All mutation goes through [`AppState::apply`] and [`AppState::on_tick`];
/// after each one the ticker is brought in line with `is_running` and a
/// fresh snapshot is published to subscribers.
pub struct AppState {
    timer: TimerState,
    notifier: Box<dyn Notifier>,
    /// Present exactly while the countdown is running
    ticker: Option<TickerHandle>,
    /// Run counter handed to each ticker so stale ticks can be told apart
    run_generation: u64,
    tick_tx: mpsc::UnboundedSender<Tick>,
    last_completed_at: Option<DateTime<Local>>,
    snapshot_tx: watch::Sender<DisplaySnapshot>,
}

impl AppState {
    /// Create the component in its start-of-process state
    pub fn new(notifier: Box<dyn Notifier>, tick_tx: mpsc::UnboundedSender<Tick>) -> Self {
        let timer = TimerState::new();
        let (snapshot_tx, _) = watch::channel(DisplaySnapshot::from_state(&timer, None));

        Self {
            timer,
            notifier,
            ticker: None,
            run_generation: 0,
            tick_tx,
            last_completed_at: None,
            snapshot_tx,
        }
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<DisplaySnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    /// Whether a ticker task is currently held
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn last_completed_at(&self) -> Option<DateTime<Local>> {
        self.last_completed_at
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::from_state(&self.timer, self.last_completed_at)
    }

    /// Apply a user command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ToggleRun => {
                self.timer.toggle_running();
                info!(
                    "Timer {} with {}s left",
                    if self.timer.is_running() { "started" } else { "paused" },
                    self.timer.time_left_seconds()
                );
            }
            Command::Reset => {
                self.timer.reset();
                info!("Timer reset to full {} session", self.timer.session_type().as_str());
            }
            Command::SwitchSession(target) => {
                self.timer.switch_session(target);
                info!("Switched to {} session", target.as_str());
            }
            Command::ToggleSound => {
                self.timer.toggle_sound();
                info!(
                    "Completion sound {}",
                    if self.timer.is_sound_enabled() { "enabled" } else { "disabled" }
                );
            }
        }

        self.sync_ticker();
        self.publish();
    }

    /// Handle one elapsed second from the ticker
    pub fn on_tick(&mut self, tick: Tick) {
        let current = self.ticker.as_ref().map(TickerHandle::generation);
        if current != Some(tick.generation) {
            debug!(
                "Dropping stale tick from run {} (current: {:?})",
                tick.generation, current
            );
            return;
        }

        match self.timer.tick() {
            TickOutcome::Ignored => return,
            TickOutcome::Counted { remaining } => {
                debug!("Tick: {}s left", remaining);
            }
            TickOutcome::Completed(completion) => {
                info!(
                    "{} session complete, {} session loaded ({} completed)",
                    completion.finished.as_str(),
                    completion.next.as_str(),
                    self.timer.completed_sessions()
                );
                if completion.notify {
                    self.notifier.notify(completion.finished);
                }
                self.last_completed_at = Some(Local::now());
            }
        }

        self.sync_ticker();
        self.publish();
    }

    /// Release the ticker when the component is torn down
    pub fn shutdown(&mut self) {
        self.ticker = None;
        if self.timer.is_running() {
            info!("Shutting down with a running timer, {}s left", self.timer.time_left_seconds());
        }
    }

    fn sync_ticker(&mut self) {
        match (self.timer.is_running(), self.ticker.is_some()) {
            (true, false) => {
                self.run_generation += 1;
                self.ticker = Some(TickerHandle::spawn(self.run_generation, self.tick_tx.clone()));
            }
            (false, true) => self.ticker = None,
            _ => {}
        }
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.snapshot());
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("timer", &self.timer)
            .field("ticker", &self.ticker)
            .field("run_generation", &self.run_generation)
            .field("last_completed_at", &self.last_completed_at)
            .finish_non_exhaustive()
    }
}
