use crate::core::state::Level;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command line arguments for fmtlog
#[derive(Parser, Debug)]
#[command(
    name = "fmtlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Control the data-formatter diagnostic logging facility",
    long_about = "Controls the diagnostic logging facility of the debugger's data-formatter subsystem: enable or disable it and choose where it writes, without restarting the session. Without a subcommand an interactive session is started."
)]
pub struct Args {
    /// Enable verbose diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress diagnostics
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: ReportFormat,

    /// Command to execute; omit to start an interactive session
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enable logging
    Enable(EnableArgs),
    /// Disable logging
    Disable,
    /// Show the state of the logging facility
    State,
}

/// Arguments of the `enable` subcommand
#[derive(ClapArgs, Debug)]
pub struct EnableArgs {
    /// Logging level
    #[arg(short, long, value_enum)]
    pub level: Option<LevelArg>,

    /// Output file path; pass `-` to reset to the default destination
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Commands accepted inside an interactive session
#[derive(Parser, Debug)]
#[command(name = "fmtlog", no_binary_name = true, disable_version_flag = true)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session command set: the facility commands plus session control
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Enable logging
    Enable(EnableArgs),
    /// Disable logging
    Disable,
    /// Show the state of the logging facility
    State,
    /// Send a line through the facility logger, to verify the destination
    Write {
        /// Text to log
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Report format options
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum ReportFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// JSON report
    Json,
}

/// Positive logging level argument
///
/// `none` is deliberately absent: disabling goes through the `disable`
/// subcommand, so a disabled level can never be requested via `enable`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelArg {
    Fast,
    AutoFlush,
    CallerInfo,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Fast => Self::Fast,
            LevelArg::AutoFlush => Self::AutoFlush,
            LevelArg::CallerInfo => Self::CallerInfo,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
