//! Task list loading
//!
//! Task lists are TOML (`[[tasks]]` tables) or JSON (an array, or an object
//! with a `tasks` array). Each entry is a [`TaskSpec`]; deadlines use any
//! format [`Deadline`](crate::task::Deadline) accepts.

use crate::task::{SchedulerError, Task, TaskSpec};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("File '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("IO error reading '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Task parsing error in '{path}': {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Task {index} in '{path}' is invalid: {source}")]
    InvalidTask {
        path: PathBuf,
        index: usize,
        source: SchedulerError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListFormat {
    Toml,
    Json,
}

#[derive(Debug, Deserialize)]
struct TaskListFile {
    #[serde(default)]
    tasks: Vec<TaskSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonTaskList {
    Bare(Vec<TaskSpec>),
    Wrapped(TaskListFile),
}

/// Loads task specifications from files
pub struct TaskLoader;

impl TaskLoader {
    /// Pick the format from the file extension; anything but `.json` is TOML
    pub fn detect_format(path: &Path) -> TaskListFormat {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => TaskListFormat::Json,
            _ => TaskListFormat::Toml,
        }
    }

    /// Read and parse a task list into specifications
    pub fn load_specs<P: AsRef<Path>>(path: P) -> Result<Vec<TaskSpec>, FileError> {
        let path = path.as_ref().to_path_buf();
        debug!("Loading task list: {:?}", path);

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound { path: path.clone() },
            _ => FileError::IoError {
                path: path.clone(),
                source: e,
            },
        })?;

        let specs = Self::parse_specs(&content, Self::detect_format(&path))
            .map_err(|reason| FileError::ParseError {
                path: path.clone(),
                reason,
            })?;

        debug!("Loaded {} task specs from {:?}", specs.len(), path);
        Ok(specs)
    }

    /// Parse task list content in the given format
    pub fn parse_specs(content: &str, format: TaskListFormat) -> Result<Vec<TaskSpec>, String> {
        match format {
            TaskListFormat::Toml => toml::from_str::<TaskListFile>(content)
                .map(|file| file.tasks)
                .map_err(|e| e.to_string()),
            TaskListFormat::Json => serde_json::from_str::<JsonTaskList>(content)
                .map(|list| match list {
                    JsonTaskList::Bare(tasks) => tasks,
                    JsonTaskList::Wrapped(file) => file.tasks,
                })
                .map_err(|e| e.to_string()),
        }
    }

    /// Load a task list and validate every entry into a [`Task`]
    ///
    /// Fails on the first invalid entry; nothing is returned partially.
    pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, FileError> {
        let path = path.as_ref();
        Self::load_specs(path)?
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                Task::from_spec(spec).map_err(|source| FileError::InvalidTask {
                    path: path.to_path_buf(),
                    index: index + 1,
                    source,
                })
            })
            .collect()
    }
}
