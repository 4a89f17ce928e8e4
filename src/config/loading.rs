//! Configuration loading functions.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

/// Project-level config file names, in search order.
pub const PROJECT_CONFIG_FILES: &[&str] = &[".lx.yaml", ".lx.yml", ".lx.json", ".lx.toml"];

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.display().to_string(),
                source: e,
            }),
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.display().to_string(),
                source: e,
            }),
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.display().to_string(),
                source: e,
            }),
            _ => Err(ConfigError::UnsupportedFormat(
                path.display().to_string(),
                ext,
            )),
        }
    }

    /// Load configuration from the scan root or the global config.
    ///
    /// Search order:
    /// 1. `.lx.yaml` / `.lx.yml` / `.lx.json` / `.lx.toml` in the scan root
    /// 2. `~/.config/lx/config.yaml`
    /// 3. Default configuration
    ///
    /// Files that exist but fail to parse are skipped with a warning.
    pub fn load(project_root: Option<&Path>) -> Self {
        if let Some(root) = project_root {
            for filename in PROJECT_CONFIG_FILES {
                let path = root.join(filename);
                if let Some(config) = Self::try_load(&path) {
                    return config;
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("lx").join("config.yaml");
            if let Some(config) = Self::try_load(&global_config) {
                return config;
            }
        }

        Self::default()
    }

    fn try_load(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        match Self::from_file(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config file");
                Some(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
                None
            }
        }
    }
}
