use crate::core::state::{Destination, FacilityState, Level};
use crate::domain::error::FmtlogResult;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// The formatter-side consumer of the facility state
///
/// Re-reads level and destination on every write. `Level::None` means drop
/// the line; `Destination::Default` falls back to the built-in default file
/// name. `AutoFlush` and above flush after each write; `CallerInfo`
/// additionally records the call site per entry.
pub struct FacilityLogger {
    state: Arc<FacilityState>,
    default_file: PathBuf,
    sink: Mutex<Option<Sink>>,
    write_failed: AtomicBool,
}

struct Sink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FacilityLogger {
    pub fn new(state: Arc<FacilityState>) -> Self {
        Self {
            state,
            default_file: PathBuf::from("formatters.log"),
            sink: Mutex::new(None),
            write_failed: AtomicBool::new(false),
        }
    }

    /// Override the built-in default file name (normally from config)
    pub fn with_default_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_file = path.into();
        self
    }

    /// Append one line to the configured destination
    ///
    /// A no-op while the facility is disabled. Never panics; a failed write
    /// is warned about once per logger and returned to the caller.
    #[track_caller]
    pub fn write(&self, line: &str) -> FmtlogResult<()> {
        let level = self.state.level.get();
        if level == Level::None {
            return Ok(());
        }
        let caller = std::panic::Location::caller();

        let result = self.write_at(level, caller, line);
        if let Err(err) = &result {
            if !self.write_failed.swap(true, Ordering::Relaxed) {
                tracing::warn!(error = %err, "facility log write failed");
            }
        }
        result
    }

    /// Flush any buffered output
    pub fn flush(&self) -> FmtlogResult<()> {
        let mut guard = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(sink) = guard.as_mut() {
            sink.writer.flush()?;
        }
        Ok(())
    }

    fn write_at(
        &self,
        level: Level,
        caller: &std::panic::Location<'_>,
        line: &str,
    ) -> FmtlogResult<()> {
        let target = match self.state.output.get() {
            Destination::Path(path) => path,
            Destination::Default => self.default_file.clone(),
        };

        let mut guard = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let reopen = !matches!(guard.as_ref(), Some(sink) if sink.path == target);
        let sink = if reopen {
            if let Some(old) = guard.take() {
                // Flush what the previous destination already accepted.
                let mut writer = old.writer;
                let _ = writer.flush();
            }
            let file = OpenOptions::new().create(true).append(true).open(&target)?;
            guard.insert(Sink {
                path: target,
                writer: BufWriter::new(file),
            })
        } else {
            guard.as_mut().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "log sink unavailable")
            })?
        };
        if level >= Level::CallerInfo {
            writeln!(sink.writer, "{}:{}: {}", caller.file(), caller.line(), line)?;
        } else {
            writeln!(sink.writer, "{}", line)?;
        }
        if level >= Level::AutoFlush {
            sink.writer.flush()?;
        }
        Ok(())
    }
}
