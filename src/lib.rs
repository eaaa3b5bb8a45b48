//! # Task Scheduler
//!
//! A single-process, in-memory task scheduler. Tasks carry a description, an
//! integer priority and an optional deadline; the scheduler always exposes the
//! task with the highest priority, with the earliest deadline breaking ties and
//! deadline-less tasks coming after dated ones.
//!
//! ## Architecture Overview
//!
//! - **[`task`]**: the [`Task`] entity, the fully sorted [`PriorityQueue`] and the
//!   [`Scheduler`] façade with its remove, mutate, reinsert operations
//! - **[`cli`]**: the `tsched` front end: configuration discovery, task list
//!   loading and an interactive session with a name registry
//! - **[`env`]**: path and file name constants
//!
//! ## Quick Start
//!
//! ```rust
//! use task_scheduler::{Deadline, Scheduler, Task, TaskUpdate};
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.add_task(Task::new("Finish project", 3, None));
//! let groceries = scheduler.add_task(Task::new("Buy groceries", 1, None));
//!
//! let deadline = Deadline::from_ymd(2023, 5, 10).unwrap();
//! let outcome = scheduler.reorder_task(groceries, 4, Some(deadline));
//! assert!(matches!(outcome, TaskUpdate::Repositioned { position: 0, .. }));
//!
//! let top = scheduler.execute_task().unwrap();
//! assert_eq!(top.description(), "Buy groceries");
//! ```
//!
//! The scheduler is synchronous and unsynchronised. Hosts that share it across
//! threads wrap the whole [`Scheduler`] in a single lock.

/// Task model, ordered queue and scheduler.
pub mod task;

/// Command-line front end.
pub mod cli;

/// Environment constants and path utilities.
pub mod env;

pub use task::{
    Deadline, PriorityQueue, Scheduler, SchedulerError, Task, TaskId, TaskRegistry, TaskReport,
    TaskSpec, TaskUpdate,
};
