//! Background tasks module
//!
//! This module contains the one-second ticker and the controller task that
//! feeds commands and ticks into the timer.

pub mod controller;
pub mod ticker;

// Re-export main items
pub use controller::controller_task;
pub use ticker::{Tick, TickerHandle, TICK_PERIOD};
