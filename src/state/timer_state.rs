//! Timer state structure and session transitions

use serde::Serialize;

/// Length of a focus session in seconds (25 minutes)
pub const WORK_DURATION: u32 = 25 * 60;
/// Length of a break session in seconds (5 minutes)
pub const BREAK_DURATION: u32 = 5 * 60;

/// Which duration profile is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Work,
    Break,
}

impl SessionType {
    /// Full length of this session in seconds
    pub fn full_duration(self) -> u32 {
        match self {
            SessionType::Work => WORK_DURATION,
            SessionType::Break => BREAK_DURATION,
        }
    }

    /// The session that follows this one on natural completion
    pub fn other(self) -> Self {
        match self {
            SessionType::Work => SessionType::Break,
            SessionType::Break => SessionType::Work,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionType::Work => "work",
            SessionType::Break => "break",
        }
    }
}

/// What a single tick did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was paused, nothing changed
    Ignored,
    /// One second was taken off the countdown
    Counted { remaining: u32 },
    /// The countdown reached zero and the next session was loaded
    Completed(Completion),
}

/// Result of a session running out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub finished: SessionType,
    pub next: SessionType,
    /// Sound was enabled at the moment of completion
    pub notify: bool,
}

/// Countdown state for the focus/break cycle.
///
/// Fields are only reachable through the transition methods so that
/// `time_left_seconds` can never leave `0..=full_duration(session_type)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    session_type: SessionType,
    time_left_seconds: u32,
    is_running: bool,
    completed_sessions: u32,
    is_sound_enabled: bool,
}

impl TimerState {
    /// Create the start-of-process state: a full, paused work session
    pub fn new() -> Self {
        Self {
            session_type: SessionType::Work,
            time_left_seconds: WORK_DURATION,
            is_running: false,
            completed_sessions: 0,
            is_sound_enabled: true,
        }
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    pub fn time_left_seconds(&self) -> u32 {
        self.time_left_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    pub fn is_sound_enabled(&self) -> bool {
        self.is_sound_enabled
    }

    /// Full length of the current session in seconds
    pub fn full_duration(&self) -> u32 {
        self.session_type.full_duration()
    }

    /// Start or pause the countdown
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Advance the countdown by one elapsed second.
    ///
    /// The tick that brings the countdown to zero completes the session in
    /// the same step. A running timer already sitting at zero completes too,
    /// it is never decremented below zero.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Ignored;
        }

        if self.time_left_seconds > 1 {
            self.time_left_seconds -= 1;
            return TickOutcome::Counted {
                remaining: self.time_left_seconds,
            };
        }

        self.time_left_seconds = 0;
        TickOutcome::Completed(self.complete_session())
    }

    fn complete_session(&mut self) -> Completion {
        let finished = self.session_type;
        let notify = self.is_sound_enabled;

        if finished == SessionType::Work {
            self.completed_sessions += 1;
        }
        self.session_type = finished.other();
        self.time_left_seconds = self.session_type.full_duration();
        self.is_running = false;

        Completion {
            finished,
            next: self.session_type,
            notify,
        }
    }

    /// Stop and refill the current session
    pub fn reset(&mut self) {
        self.is_running = false;
        self.time_left_seconds = self.session_type.full_duration();
    }

    /// Stop and load a full session of `target`
    pub fn switch_session(&mut self, target: SessionType) {
        self.is_running = false;
        self.session_type = target;
        self.time_left_seconds = target.full_duration();
    }

    pub fn toggle_sound(&mut self) {
        self.is_sound_enabled = !self.is_sound_enabled;
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
