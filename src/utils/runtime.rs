//! Runtime setup with bounded shutdown

use std::{future::Future, time::Duration};

use tokio::runtime::Builder;
use tracing::debug;

/// How long shutdown waits for blocking work such as a pending notification
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Run `future` to completion on a single-threaded runtime.
///
/// Blocking tasks still running afterwards get at most `grace` before the
/// runtime is torn down, so a hung notification cannot stall quitting.
pub fn block_on_with_grace<F: Future>(future: F, grace: Duration) -> anyhow::Result<F::Output> {
    let runtime = Builder::new_current_thread().enable_all().build()?;
    let output = runtime.block_on(future);
    debug!("Shutting down runtime with {:?} grace", grace);
    runtime.shutdown_timeout(grace);
    Ok(output)
}
