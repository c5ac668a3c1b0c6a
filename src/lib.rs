//! Pomodoro Ring - A single-screen Pomodoro focus/break timer
//!
//! This library provides the countdown state machine, the display values
//! derived from it and the terminal and headless front-ends that drive it.

pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, SessionType, TimerState};
pub use tasks::controller_task;
pub use utils::signals::shutdown_signal;
pub use view::{Command, DisplaySnapshot};
