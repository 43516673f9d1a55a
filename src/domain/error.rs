use std::path::PathBuf;
use thiserror::Error;

/// Fmtlog unified error type
#[derive(Error, Debug)]
pub enum FmtlogError {
    #[error("Invalid logging level: {0}")]
    InvalidLevel(String),

    #[error("Cannot resolve path '{path}': {source}")]
    PathResolution {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Home directory is not available")]
    HomeDirUnavailable,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FmtlogResult<T> = Result<T, FmtlogError>;
