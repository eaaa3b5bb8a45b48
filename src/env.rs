//! Environment constants and path utilities for the task scheduler.
//!
//! This module centralizes the hardcoded paths and file names used by the
//! command-line front end.

use std::path::{Path, PathBuf};

/// Application directory name (hidden directory like .git, .vscode)
pub const APP_DIR_NAME: &str = ".tsched";

/// Configuration file name inside the application directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration file name looked up directly in the working directory
pub const LOCAL_CONFIG_FILE_NAME: &str = "tsched.toml";

/// System-wide configuration file (Unix-like systems)
pub const SYSTEM_CONFIG_PATH: &str = "/etc/tsched/config.toml";

/// Default tracing filter when neither config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_FILTER: &str = "task_scheduler=info";

/// Build the application directory path from a root directory
pub fn app_dir_path(root: &Path) -> PathBuf {
    root.join(APP_DIR_NAME)
}

/// ./.tsched/config.toml relative to a working directory
pub fn local_config_file_path(working_dir: &Path) -> PathBuf {
    app_dir_path(working_dir).join(CONFIG_FILE_NAME)
}

/// ~/.tsched/config.toml relative to a home directory
pub fn user_config_file_path(home_dir: &Path) -> PathBuf {
    app_dir_path(home_dir).join(CONFIG_FILE_NAME)
}
