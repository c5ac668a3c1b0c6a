//! Notification services module
//!
//! This module contains the notifier capability used on session completion
//! and its terminal and desktop implementations.

pub mod desktop;
pub mod notifier;

// Re-export main types
pub use desktop::DesktopNotifier;
pub use notifier::{BellNotifier, Notifier, SilentNotifier};
