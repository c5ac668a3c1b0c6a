//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::services::{BellNotifier, DesktopNotifier, Notifier, SilentNotifier};

/// Default log file name, placed in the system temp directory
pub const DEFAULT_LOG_FILE: &str = "pomodoro-ring.log";

/// How session completion is announced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NotifierKind {
    /// Ring the terminal bell
    #[default]
    Bell,
    /// Show a desktop notification with a sound hint
    Desktop,
    /// Stay quiet even when sound is enabled
    Silent,
}

impl NotifierKind {
    /// Build the notifier this kind names
    pub fn build(self) -> Box<dyn Notifier> {
        match self {
            NotifierKind::Bell => Box::new(BellNotifier),
            NotifierKind::Desktop => Box::new(DesktopNotifier),
            NotifierKind::Silent => Box::new(SilentNotifier),
        }
    }
}

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "pomodoro-ring")]
#[command(about = "A single-screen Pomodoro focus/break timer for the terminal")]
#[command(version)]
pub struct Config {
    /// Read commands from stdin and print JSON snapshots instead of drawing a UI
    #[arg(long)]
    pub headless: bool,

    /// How to announce a finished session
    #[arg(short, long, value_enum, default_value_t = NotifierKind::Bell)]
    pub notifier: NotifierKind,

    /// Write logs to this file instead of the default in the temp directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Where log output goes; never the terminal the UI draws on
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }
}
