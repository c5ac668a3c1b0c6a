//! Session completion notifiers

use std::io::{self, Write};
use tracing::debug;

use crate::state::SessionType;

/// Capability invoked when a session runs out with sound enabled.
///
/// Implementations are fire-and-forget: they must return promptly and
/// swallow their own failures.
pub trait Notifier: Send {
    fn notify(&self, finished: SessionType);
}

/// Rings the terminal bell on stderr, keeping stdout free for front-ends
#[derive(Debug, Default)]
pub struct BellNotifier;

impl Notifier for BellNotifier {
    fn notify(&self, finished: SessionType) {
        if let Err(e) = ring_bell() {
            debug!("Bell for finished {} session failed: {}", finished.as_str(), e);
        }
    }
}

fn ring_bell() -> Result<(), String> {
    let mut stderr = io::stderr();
    stderr
        .write_all(b"\x07")
        .and_then(|_| stderr.flush())
        .map_err(|e| format!("Failed to write bell: {}", e))
}

/// Does nothing, for environments where any sound is unwanted
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, finished: SessionType) {
        debug!("Silent notifier skipping {} completion", finished.as_str());
    }
}

