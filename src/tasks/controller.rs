//! Controller background task

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{state::AppState, tasks::ticker::Tick, view::Command};

/// Serializes user commands and ticks into the single timer component.
///
/// Runs until every command sender is gone, then tears the component down
/// so the ticker is released.
pub async fn controller_task(
    mut state: AppState,
    mut commands: mpsc::UnboundedReceiver<Command>,
    mut ticks: mpsc::UnboundedReceiver<Tick>,
) -> AppState {
    info!("Starting timer controller task");

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => {
                    debug!("Controller received command: {}", command);
                    state.apply(command);
                }
                None => {
                    debug!("Command channel closed");
                    break;
                }
            },
            Some(tick) = ticks.recv() => state.on_tick(tick),
        }
    }

    state.shutdown();
    info!("Timer controller stopped");
    state
}
