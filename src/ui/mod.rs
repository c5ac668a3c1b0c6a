//! Front-ends module
//!
//! The terminal UI draws the timer with ratatui and maps key presses onto
//! commands; the headless front-end speaks JSON lines over stdio.

pub mod headless;
pub mod input;
pub mod render;
pub mod terminal_guard;

use std::io;

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::stream::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::view::{Command, DisplaySnapshot};
use input::Input;
use terminal_guard::TerminalGuard;

/// Configure the terminal, run the draw loop and put the terminal back
pub async fn run_terminal(
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<DisplaySnapshot>,
) -> Result<()> {
    let guard = TerminalGuard::new();
    guard.enable_raw_mode()?;
    let mut stdout = io::stdout();
    guard.enter_alt_screen(&mut stdout)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, commands, snapshots).await;

    drop(terminal);
    guard.restore();
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    commands: mpsc::UnboundedSender<Command>,
    mut snapshots: watch::Receiver<DisplaySnapshot>,
) -> Result<()> {
    info!("Terminal front-end started");
    let mut events = EventStream::new();

    loop {
        let snapshot = snapshots.borrow_and_update().clone();
        terminal.draw(|frame| render::draw(frame, &snapshot))?;

        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    debug!("Snapshot channel closed");
                    break;
                }
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    let Some(input) = input::map_key(key) else {
                        continue;
                    };
                    if input == Input::Quit {
                        info!("Quit requested");
                        break;
                    }
                    if let Some(command) = input::resolve(input, snapshot.session_type) {
                        if commands.send(command).is_err() {
                            break;
                        }
                    }
                }
                // resize and focus changes just redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(())
}
