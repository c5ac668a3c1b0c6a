//! Pomodoro Ring - A single-screen Pomodoro focus/break timer
//!
//! This is the main entry point for the pomodoro-ring application.

use std::{fs::OpenOptions, sync::Mutex};
use tokio::sync::mpsc;
use tracing::info;

use pomodoro_ring::{
    config::Config,
    controller_task,
    shutdown_signal,
    state::AppState,
    ui::{headless, run_terminal},
    utils::{block_on_with_grace, SHUTDOWN_GRACE},
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    block_on_with_grace(run(config), SHUTDOWN_GRACE)?
}

async fn run(config: Config) -> anyhow::Result<()> {
    // Logs go to a file so they never land on the screen the UI draws
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())?;
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_ring={}", config.log_level()))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting pomodoro-ring v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: headless={}, notifier={:?}",
        config.headless, config.notifier
    );

    let (tick_tx, tick_rx) = mpsc::unbounded_channel();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    // Create the timer component and start its controller
    let state = AppState::new(config.notifier.build(), tick_tx);
    let snapshots = state.subscribe();
    let controller = tokio::spawn(controller_task(state, command_rx, tick_rx));

    let frontend = async {
        if config.headless {
            headless::run(command_tx, snapshots).await
        } else {
            run_terminal(command_tx, snapshots).await
        }
    };

    // Dropping the front-end closes the command channel and stops the controller
    let result = tokio::select! {
        result = frontend => result,
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            Ok(())
        }
    };

    let final_state = controller.await?;
    info!(
        "Shutdown complete after {} completed sessions",
        final_state.timer().completed_sessions()
    );
    result
}
