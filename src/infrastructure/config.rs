use crate::domain::config::FmtlogConfig;
use crate::domain::error::{FmtlogError, FmtlogResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_NAME: &str = ".fmtlog.toml";

/// Configuration manager
///
/// Looks for a project-local `.fmtlog.toml` in the current directory or any
/// ancestor, falling back to the per-user config file. A project file wins
/// over the user file; missing files mean built-in defaults.
pub struct ConfigManager {
    user_config_path: Option<PathBuf>,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    pub fn new() -> FmtlogResult<Self> {
        Ok(Self {
            user_config_path: dirs::config_dir().map(|dir| dir.join("fmtlog").join("config.toml")),
            project_config_path: Self::find_project_config(),
        })
    }

    /// Load configuration from the discovered files
    pub fn load(&self) -> FmtlogResult<FmtlogConfig> {
        if let Some(path) = &self.project_config_path {
            return self.load_from_path(path);
        }
        if let Some(path) = &self.user_config_path {
            if path.exists() {
                return self.load_from_path(path);
            }
        }
        Ok(FmtlogConfig::default())
    }

    /// Load configuration from an explicit path
    pub fn load_from_path(&self, path: &Path) -> FmtlogResult<FmtlogConfig> {
        let content = fs::read_to_string(path).map_err(|e| FmtlogError::Config {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        toml::from_str(&content).map_err(|e| FmtlogError::Config {
            message: format!("Failed to parse config file '{}': {}", path.display(), e),
        })
    }

    fn find_project_config() -> Option<PathBuf> {
        let cwd = env::current_dir().ok()?;
        for dir in cwd.ancestors() {
            let candidate = dir.join(PROJECT_CONFIG_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }
}
