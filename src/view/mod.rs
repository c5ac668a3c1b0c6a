//! Presentation adapter
//!
//! Pure display derivations and the command vocabulary that front-ends use
//! to drive the timer.

pub mod commands;
pub mod display;

pub use commands::Command;
pub use display::{format_time, progress_percent, session_label, DisplaySnapshot};
