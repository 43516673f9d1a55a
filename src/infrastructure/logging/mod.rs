// Logging module - The tool's own diagnostics, distinct from the managed facility
use crate::domain::config::FmtlogConfig;
use crate::domain::error::{FmtlogError, FmtlogResult};
use std::io;
use tracing_subscriber::EnvFilter;

/// Initialize the tool's diagnostic logging
///
/// Writes to stderr so reports on stdout stay clean. `RUST_LOG` overrides
/// the configured level; `verbose` forces debug.
pub fn init(config: &FmtlogConfig, verbose: bool) -> FmtlogResult<()> {
    let default_directive = if verbose {
        "fmtlog=debug".to_string()
    } else {
        format!("fmtlog={}", config.trace_level)
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| FmtlogError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })?;

    Ok(())
}
