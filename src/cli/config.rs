//! Configuration discovery and loading
//!
//! This module handles the configuration discovery hierarchy:
//! 1. Current directory: ./tsched.toml or ./.tsched/config.toml
//! 2. User config: ~/.tsched/config.toml
//! 3. System config: /etc/tsched/config.toml
//! 4. Built-in defaults

use crate::env;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env as std_env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Front-end configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set
    pub filter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix listed tasks with their identity
    pub show_ids: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Priority used when the interactive prompt is left blank
    pub default_priority: Option<i64>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: env::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SchedulerConfig {
    /// Load from TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading configuration {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing configuration {}", path.display()))?;
        Ok(config)
    }

    /// Save to TOML file
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Configuration discovery system
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover and load configuration using the hierarchy
    pub fn discover_config() -> Result<SchedulerConfig> {
        if let Some(config_path) = Self::find_config_file() {
            info!("Loading configuration from: {:?}", config_path);
            return SchedulerConfig::from_toml_file(config_path);
        }

        info!("No configuration file found, using defaults");
        Ok(SchedulerConfig::default())
    }

    /// Load an explicit file when given, otherwise discover
    pub fn load(config_override: Option<&Path>) -> Result<SchedulerConfig> {
        match config_override {
            Some(path) => SchedulerConfig::from_toml_file(path),
            None => Self::discover_config(),
        }
    }

    /// Find configuration file using discovery hierarchy
    pub fn find_config_file() -> Option<PathBuf> {
        Self::first_existing(Self::get_config_candidates())
    }

    fn first_existing(candidates: Vec<PathBuf>) -> Option<PathBuf> {
        for candidate in candidates {
            debug!("Checking for config file: {:?}", candidate);
            if candidate.is_file() {
                debug!("Found config file: {:?}", candidate);
                return Some(candidate);
            }
        }

        debug!("No config file found in discovery hierarchy");
        None
    }

    /// Configuration file candidates in priority order
    pub fn get_config_candidates() -> Vec<PathBuf> {
        let current_dir = std_env::current_dir().ok();
        let home_dir = Self::get_home_dir();
        Self::candidates_for(current_dir.as_deref(), home_dir.as_deref())
    }

    fn candidates_for(current_dir: Option<&Path>, home_dir: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(current_dir) = current_dir {
            candidates.push(current_dir.join(env::LOCAL_CONFIG_FILE_NAME));
            candidates.push(env::local_config_file_path(current_dir));
        }

        if let Some(home_dir) = home_dir {
            candidates.push(env::user_config_file_path(home_dir));
        }

        #[cfg(unix)]
        candidates.push(PathBuf::from(env::SYSTEM_CONFIG_PATH));

        candidates
    }

    fn get_home_dir() -> Option<PathBuf> {
        std_env::var("HOME")
            .ok()
            .or_else(|| std_env::var("USERPROFILE").ok())
            .map(PathBuf::from)
    }

    /// Show configuration discovery information for debugging
    pub fn show_discovery_info() {
        println!("Configuration Discovery Hierarchy:");
        println!();

        for (i, candidate) in Self::get_config_candidates().iter().enumerate() {
            let status = if candidate.is_file() {
                "✓ EXISTS"
            } else if candidate.exists() {
                "✗ NOT A FILE"
            } else {
                "✗ NOT FOUND"
            };

            println!("  {}. {:?} - {}", i + 1, candidate, status);
        }

        println!();
        match Self::find_config_file() {
            Some(found) => println!("Active configuration: {:?}", found),
            None => println!("Active configuration: Built-in defaults"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SchedulerConfig::default();

        assert_eq!(config.logging.filter, "task_scheduler=info");
        assert!(!config.display.show_ids);
        assert_eq!(config.input.default_priority, None);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SchedulerConfig = toml::from_str("[display]\nshow_ids = true\n").unwrap();

        assert!(config.display.show_ids);
        assert_eq!(config.logging.filter, "task_scheduler=info");
    }

    #[test]
    fn test_config_file_operations() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tsched.toml");

        let mut original = SchedulerConfig::default();
        original.logging.filter = "task_scheduler=debug".to_string();
        original.input.default_priority = Some(5);

        original.to_toml_file(&config_path).unwrap();
        let loaded = SchedulerConfig::from_toml_file(&config_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tsched.toml");
        fs::write(&config_path, "[input]\ndefault_priority = \"high\"\n").unwrap();

        assert!(SchedulerConfig::from_toml_file(&config_path).is_err());
    }

    #[test]
    fn test_config_candidates_order() {
        let candidates =
            ConfigDiscovery::candidates_for(Some(Path::new("/work")), Some(Path::new("/home/me")));

        assert_eq!(candidates[0], PathBuf::from("/work/tsched.toml"));
        assert_eq!(candidates[1], PathBuf::from("/work/.tsched/config.toml"));
        assert_eq!(candidates[2], PathBuf::from("/home/me/.tsched/config.toml"));
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join("tsched.toml");
        let nested = env::local_config_file_path(temp_dir.path());
        fs::create_dir_all(nested.parent().unwrap()).unwrap();
        fs::write(&nested, "").unwrap();

        let candidates = ConfigDiscovery::candidates_for(Some(temp_dir.path()), None);
        assert_eq!(ConfigDiscovery::first_existing(candidates.clone()), Some(nested));

        fs::write(&local, "").unwrap();
        assert_eq!(ConfigDiscovery::first_existing(candidates), Some(local));
    }
}
