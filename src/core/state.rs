use crate::domain::error::{FmtlogError, FmtlogResult};
use crate::infrastructure::paths;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{PoisonError, RwLock};

/// Verbosity level of the formatters logging facility
///
/// The numeric ordering is significant: consumers treat higher values as
/// "more verbose than". Exactly one level is active per facility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Level {
    /// Facility disabled; nothing is written
    None = 0,
    /// Minimal overhead logging
    Fast = 1,
    /// Like Fast, but output is flushed after every write
    AutoFlush = 2,
    /// Like AutoFlush, but caller context is recorded per entry
    CallerInfo = 3,
}

/// Canonical member list; the single source for the name<->value mapping.
const LEVELS: [(Level, &str); 4] = [
    (Level::None, "none"),
    (Level::Fast, "fast"),
    (Level::AutoFlush, "auto-flush"),
    (Level::CallerInfo, "caller-info"),
];

impl Level {
    /// Display name, lowercase-hyphenated
    pub fn name(self) -> &'static str {
        LEVELS[self as usize].1
    }

    pub fn from_u8(value: u8) -> Option<Level> {
        LEVELS.iter().map(|(level, _)| *level).find(|level| *level as u8 == value)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Level {
    type Err = FmtlogError;

    /// Accepts the display name (`auto-flush`) or the numeric value (`2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        if let Some((level, _)) = LEVELS.iter().find(|(_, name)| *name == token) {
            return Ok(*level);
        }
        token
            .parse::<u8>()
            .ok()
            .and_then(Level::from_u8)
            .ok_or_else(|| FmtlogError::InvalidLevel(s.to_string()))
    }
}

/// Current verbosity level of the facility
///
/// A single value-replace is atomic; readers on the formatter hot path may
/// load it concurrently with a command-driven store.
#[derive(Debug, Default)]
pub struct LevelState(AtomicU8);

impl LevelState {
    pub fn new() -> Self {
        Self(AtomicU8::new(Level::None as u8))
    }

    /// Current level, `Level::None` if never set
    pub fn get(&self) -> Level {
        Level::from_u8(self.0.load(Ordering::Relaxed)).unwrap_or(Level::None)
    }

    /// Store the level unconditionally
    pub fn set(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }
}

/// Output destination of the facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Use the facility's built-in default destination
    Default,
    /// An absolute, fully resolved path (never relative or `~`-prefixed)
    Path(PathBuf),
}

impl Destination {
    pub fn is_default(&self) -> bool {
        matches!(self, Destination::Default)
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Default => write!(f, "-"),
            Destination::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Serialize for Destination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Destination::Default => serializer.serialize_none(),
            Destination::Path(path) => serializer.serialize_some(&path.display().to_string()),
        }
    }
}

/// Current output destination of the facility
///
/// Paths are home-expanded and resolved to canonical absolute form at
/// set-time, so later reads stay deterministic even if the working directory
/// changes. Readers never observe a half-updated path.
#[derive(Debug, Default)]
pub struct DestinationState(RwLock<Option<PathBuf>>);

impl DestinationState {
    pub fn new() -> Self {
        Self(RwLock::new(None))
    }

    /// Current destination, `Destination::Default` if never set or cleared
    pub fn get(&self) -> Destination {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        match &*guard {
            None => Destination::Default,
            Some(path) => Destination::Path(path.clone()),
        }
    }

    /// Replace the destination
    ///
    /// `None` clears back to the default. A concrete path is resolved before
    /// the stored value is touched, so a resolution failure leaves the prior
    /// destination intact.
    pub fn set(&self, path: Option<&Path>) -> FmtlogResult<()> {
        let next = match path {
            None => None,
            Some(path) => Some(paths::resolve(path)?),
        };
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = next;
        Ok(())
    }
}

/// Process-wide state of the formatters logging facility
///
/// An explicit, injectable pair of state holders shared between the command
/// surface and the formatter subsystem's hot path, typically behind an
/// `Arc`. Both fields start at their defaults when the hosting session
/// begins and persist for the life of the session; there is no teardown.
/// No cross-field atomicity: a reader may observe a new level with the old
/// destination for one instant, which is fine because both values are
/// re-read on every log call.
#[derive(Debug, Default)]
pub struct FacilityState {
    pub level: LevelState,
    pub output: DestinationState,
}

impl FacilityState {
    pub fn new() -> Self {
        Self {
            level: LevelState::new(),
            output: DestinationState::new(),
        }
    }
}
