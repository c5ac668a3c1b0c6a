//! Display values derived from the timer state

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::state::{SessionType, TimerState};

/// Format a countdown as zero-padded `MM:SS`
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Share of the current session already elapsed, in `0.0..=100.0`
pub fn progress_percent(timer: &TimerState) -> f64 {
    let full = f64::from(timer.full_duration());
    let left = f64::from(timer.time_left_seconds());
    ((full - left) / full * 100.0).clamp(0.0, 100.0)
}

/// Human-readable label for the active session
pub fn session_label(session_type: SessionType) -> &'static str {
    match session_type {
        SessionType::Work => "Focus time",
        SessionType::Break => "Break time",
    }
}

/// Everything a front-end needs to draw one frame.
///
/// Built fresh from a [`TimerState`] on every change and never kept inside
/// it, so the derived values cannot drift from the countdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySnapshot {
    pub session_type: SessionType,
    pub session_label: &'static str,
    pub formatted_time: String,
    pub time_left_seconds: u32,
    pub progress_percent: f64,
    pub is_running: bool,
    pub completed_sessions: u32,
    pub is_sound_enabled: bool,
    pub last_completed_at: Option<DateTime<Local>>,
}

impl DisplaySnapshot {
    pub fn from_state(timer: &TimerState, last_completed_at: Option<DateTime<Local>>) -> Self {
        Self {
            session_type: timer.session_type(),
            session_label: session_label(timer.session_type()),
            formatted_time: format_time(timer.time_left_seconds()),
            time_left_seconds: timer.time_left_seconds(),
            progress_percent: progress_percent(timer),
            is_running: timer.is_running(),
            completed_sessions: timer.completed_sessions(),
            is_sound_enabled: timer.is_sound_enabled(),
            last_completed_at,
        }
    }
}

impl Default for DisplaySnapshot {
    fn default() -> Self {
        Self::from_state(&TimerState::new(), None)
    }
}
