use crate::core::state::{Destination, FacilityState, Level};
use crate::domain::error::{FmtlogError, FmtlogResult};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Parsed output intent of an `enable` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRequest {
    /// Reset to the facility's default destination
    Clear,
    /// Write to a concrete file (resolved at set-time)
    Path(PathBuf),
}

/// Snapshot of the facility state, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateReport {
    pub level: Level,
    pub output: Destination,
}

/// Command-facing API over the facility state
///
/// Translates user intents into reads and writes of the level and
/// destination holders. Commands arrive one at a time on the session's
/// control thread; the state itself may be read concurrently by the
/// formatter subsystem.
pub struct StateController {
    state: Arc<FacilityState>,
}

impl StateController {
    pub fn new(state: Arc<FacilityState>) -> Self {
        Self { state }
    }

    /// Turn logging on
    ///
    /// An explicit level wins unconditionally. Without one, a disabled
    /// facility comes up at `Fast`; an already-enabled facility keeps the
    /// operator's prior choice. The destination is handled independently:
    /// omitted leaves it untouched, `OutputRequest::Clear` resets it.
    /// `Level::None` is not an enable-able level and is rejected.
    pub fn enable(
        &self,
        level: Option<Level>,
        output: Option<OutputRequest>,
    ) -> FmtlogResult<()> {
        match level {
            Some(Level::None) => {
                return Err(FmtlogError::InvalidLevel(Level::None.to_string()));
            }
            Some(requested) => self.state.level.set(requested),
            None => {
                if self.state.level.get() == Level::None {
                    self.state.level.set(Level::Fast);
                }
            }
        }

        if let Some(request) = output {
            match request {
                OutputRequest::Clear => self.state.output.set(None)?,
                OutputRequest::Path(path) => self.state.output.set(Some(&path))?,
            }
        }

        tracing::debug!(
            level = %self.state.level.get(),
            output = %self.state.output.get(),
            "logging enabled"
        );
        Ok(())
    }

    /// Turn logging off
    ///
    /// The destination is left alone so a later enable picks it back up.
    /// Idempotent; always succeeds.
    pub fn disable(&self) {
        self.state.level.set(Level::None);
        tracing::debug!("logging disabled");
    }

    /// Read the current state for display; never mutates
    pub fn query(&self) -> StateReport {
        StateReport {
            level: self.state.level.get(),
            output: self.state.output.get(),
        }
    }
}
