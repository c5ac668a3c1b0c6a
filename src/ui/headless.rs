//! Line-based front-end: commands on stdin, JSON snapshots on stdout

use anyhow::Result;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader},
    sync::{mpsc, watch},
};
use tracing::{info, warn};

use crate::view::{Command, DisplaySnapshot};

/// Word that ends a headless session
pub const QUIT_WORD: &str = "quit";

/// Run the headless front-end on the process stdin and stdout
pub async fn run(
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<DisplaySnapshot>,
) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(stdin, stdout, commands, snapshots).await
}

/// Drive the timer from `input` lines and write every snapshot to `output`.
///
/// Returns when `input` reaches EOF, a `quit` line arrives or the
/// controller goes away.
pub async fn serve<R, W>(
    input: R,
    mut output: W,
    commands: mpsc::UnboundedSender<Command>,
    mut snapshots: watch::Receiver<DisplaySnapshot>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Headless front-end started");
    let mut lines = input.lines();

    let initial = snapshots.borrow_and_update().clone();
    emit(&mut output, &initial).await?;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                emit(&mut output, &snapshot).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Headless input closed");
                    break;
                };
                let word = line.trim();
                if word.is_empty() {
                    continue;
                }
                if word.eq_ignore_ascii_case(QUIT_WORD) {
                    info!("Quit requested");
                    break;
                }
                match word.parse::<Command>() {
                    Ok(command) => {
                        if commands.send(command).is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("{}", e),
                }
            }
        }
    }

    output.flush().await?;
    Ok(())
}

async fn emit<W: AsyncWrite + Unpin>(output: &mut W, snapshot: &DisplaySnapshot) -> Result<()> {
    let mut line = serde_json::to_vec(snapshot)?;
    line.push(b'\n');
    output.write_all(&line).await?;
    output.flush().await?;
    Ok(())
}
