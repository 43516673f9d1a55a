//! Fmtlog Library
//!
//! Control surface for the diagnostic logging facility of a debugger's
//! data-formatter subsystem: a session-scoped state model (level and output
//! destination), the command-driven controller that mutates it, and the
//! formatter-side writer that consumes it.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::controller::{OutputRequest, StateController, StateReport};
pub use crate::core::logger::FacilityLogger;
pub use crate::core::state::{Destination, DestinationState, FacilityState, Level, LevelState};
pub use crate::domain::config::FmtlogConfig;
pub use crate::domain::error::{FmtlogError, FmtlogResult};
