//! State management module
//!
//! This module contains the timer state machine and the controller that
//! owns it for the lifetime of the process.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use timer_state::{
    Completion, SessionType, TickOutcome, TimerState, BREAK_DURATION, WORK_DURATION,
};
