// Infrastructure module - Filesystem, configuration and diagnostics adapters
pub mod config;
pub mod logging;
pub mod paths;
