//! Utility functions module
//!
//! This module contains utility functions used throughout the application.

pub mod runtime;
pub mod signals;

// Re-export main functions
pub use runtime::{block_on_with_grace, SHUTDOWN_GRACE};
pub use signals::shutdown_signal;
