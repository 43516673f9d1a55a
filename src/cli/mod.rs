// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod output;
pub mod session;

pub use args::{Args, Command, ReportFormat};
pub use commands::execute_command;
pub use output::OutputWriter;
