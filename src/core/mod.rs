// Core module - Facility state model and its command-driven controller
pub mod controller;
pub mod logger;
pub mod state;

pub use controller::{OutputRequest, StateController, StateReport};
pub use logger::FacilityLogger;
pub use state::{Destination, DestinationState, FacilityState, Level, LevelState};
