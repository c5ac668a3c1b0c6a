//! Desktop notification with a sound hint

use notify_rust::{Notification, Timeout};
use tokio::runtime::Handle;
use tracing::debug;

use super::notifier::Notifier;
use crate::state::SessionType;

const APP_NAME: &str = "pomodoro-ring";
const SOUND_NAME: &str = "complete";

/// Shows a desktop notification through the platform notification service
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, finished: SessionType) {
        dispatch(finished);
    }
}

/// Hand the notification to the blocking pool; false when no runtime is running
fn dispatch(finished: SessionType) -> bool {
    let Ok(handle) = Handle::try_current() else {
        debug!("No runtime available, skipping desktop notification");
        return false;
    };

    // the platform call can block on its message bus
    handle.spawn_blocking(move || {
        if let Err(e) = show_notification(finished) {
            debug!("Desktop notification failed: {}", e);
        }
    });
    true
}

/// Summary and body for the notification that ends `finished`
pub fn notification_text(finished: SessionType) -> (&'static str, &'static str) {
    match finished {
        SessionType::Work => ("Focus session complete", "Time for a 5 minute break."),
        SessionType::Break => ("Break is over", "Ready for the next 25 minute focus session."),
    }
}

fn show_notification(finished: SessionType) -> Result<(), String> {
    let (summary, body) = notification_text(finished);
    Notification::new()
        .appname(APP_NAME)
        .summary(summary)
        .body(body)
        .sound_name(SOUND_NAME)
        .timeout(Timeout::Milliseconds(6000))
        .show()
        .map(|_| ())
        .map_err(|e| format!("Failed to show notification: {}", e))
}
