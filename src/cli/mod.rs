//! CLI-specific functionality for the task scheduler
//!
//! This module contains all CLI-related code including argument parsing,
//! task list loading, configuration discovery and the interactive session.

pub mod args;
pub mod config;
pub mod interactive;
pub mod tasks;

pub use args::{Args, BatchConfig, ExecutionMode, InteractiveConfig};
pub use config::{ConfigDiscovery, SchedulerConfig};
pub use interactive::{Command, Session};
pub use tasks::{FileError, TaskListFormat, TaskLoader};
