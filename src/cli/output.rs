use crate::cli::args::ReportFormat;
use crate::core::controller::StateReport;
use std::io;
use std::sync::{Mutex, PoisonError};

/// Output writer trait for the invocation's output and error sinks
pub trait OutputWriter {
    fn write_state(&self, report: &StateReport) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::FmtlogError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Render a state report in the requested format
pub fn render_state(report: &StateReport, format: ReportFormat) -> Result<String, OutputError> {
    match format {
        ReportFormat::Text => Ok(format!("level:  {}\noutput: {}", report.level, report.output)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: ReportFormat,
}

impl ConsoleWriter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_state(&self, report: &StateReport) -> Result<(), OutputError> {
        println!("{}", render_state(report, self.format)?);
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        match self.format {
            ReportFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            ReportFormat::Text => {
                println!("{}", message);
            }
        }
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        match self.format {
            ReportFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "level": "error"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            ReportFormat::Text => {
                eprintln!("Error: {}", error);
            }
        }
        Ok(())
    }
}

/// In-memory output writer, for hosts that capture command output
#[derive(Default)]
pub struct CaptureWriter {
    format: ReportFormat,
    output: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl CaptureWriter {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            output: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
        }
    }

    pub fn output(&self) -> Vec<String> {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OutputWriter for CaptureWriter {
    fn write_state(&self, report: &StateReport) -> Result<(), OutputError> {
        let rendered = render_state(report, self.format)?;
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(rendered);
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error.to_string());
        Ok(())
    }
}
