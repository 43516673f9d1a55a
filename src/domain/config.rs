use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fmtlog configuration
///
/// Configuration never pre-sets the facility's level or destination; a
/// session always starts disabled with the destination unset. It only
/// supplies the built-in fallback file name and the verbosity of the tool's
/// own diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FmtlogConfig {
    /// File name used when no output destination has been configured
    #[serde(default = "default_file")]
    pub default_file: PathBuf,
    /// Verbosity of the tool's own diagnostics (not the managed facility)
    #[serde(default = "default_trace_level")]
    pub trace_level: String,
}

// Default value functions
fn default_file() -> PathBuf {
    PathBuf::from("formatters.log")
}

fn default_trace_level() -> String {
    "info".to_string()
}

impl Default for FmtlogConfig {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            trace_level: default_trace_level(),
        }
    }
}
