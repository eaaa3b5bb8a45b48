use crate::task::types::TaskId;
use std::collections::BTreeMap;
use tracing::debug;

/// Caller-side lookup table from user-chosen names to task identities
///
/// The scheduler has no notion of names. Front ends that let users refer to
/// tasks by name keep one of these next to their [`Scheduler`](crate::task::Scheduler).
/// A binding can outlive its task: once the task is executed the scheduler
/// reports it as not found.
#[derive(Debug, Default, Clone)]
pub struct TaskRegistry {
    names: BTreeMap<String, TaskId>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to a task, returning the previous binding if any
    pub fn register(&mut self, name: impl Into<String>, task_id: TaskId) -> Option<TaskId> {
        let name = name.into();
        debug!("Registering '{}' for task {}", name, task_id);
        self.names.insert(name, task_id)
    }

    pub fn resolve(&self, name: &str) -> Option<TaskId> {
        self.names.get(name).copied()
    }

    pub fn forget(&mut self, name: &str) -> Option<TaskId> {
        self.names.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
