use crate::task::queue::PriorityQueue;
use crate::task::types::*;
use std::fmt;
use tracing::{debug, info, warn};

/// Task scheduler façade over a single [`PriorityQueue`]
///
/// Mutating a queued task always goes remove, mutate, reinsert so the queue
/// re-sorts around the new values.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: PriorityQueue,
}

/// Result of a mutate-and-reposition request
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskUpdate {
    /// Task was found, changed and reinserted at `position`
    Repositioned { id: TaskId, position: usize },
    /// No queued task has this identity
    NotFound { id: TaskId },
}

/// Snapshot of the queue for display
#[derive(Debug)]
pub enum TaskReport<'a> {
    Empty,
    Current(&'a [Task]),
}

impl Scheduler {
    /// Create a scheduler with an empty queue
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
        }
    }

    /// Queue a task. Returns its identity for later reorder/update calls.
    pub fn add_task(&mut self, task: Task) -> TaskId {
        let task_id = task.id();
        let position = self.queue.add(task);
        info!("Added task {} at position {}", task_id, position);
        task_id
    }

    /// Build a task from an untyped specification and queue it
    pub fn add_task_from_spec(&mut self, spec: TaskSpec) -> Result<TaskId, SchedulerError> {
        let task = Task::from_spec(spec)?;
        Ok(self.add_task(task))
    }

    /// Remove and return the top task
    pub fn remove_task(&mut self) -> Option<Task> {
        self.queue.pop_highest()
    }

    pub fn peek_task(&self) -> Option<&Task> {
        self.queue.peek_highest()
    }

    pub fn get_task(&self, task_id: TaskId) -> Option<&Task> {
        self.queue.get(task_id)
    }

    /// Change a queued task's priority and deadline and reposition it
    pub fn reorder_task(
        &mut self,
        task_id: TaskId,
        new_priority: i64,
        new_deadline: Option<Deadline>,
    ) -> TaskUpdate {
        self.reposition(task_id, |task| {
            task.set_priority(new_priority);
            task.set_deadline(new_deadline);
        })
    }

    /// Parse textual priority/deadline first, then reorder.
    ///
    /// Invalid input fails before the task is taken out of the queue.
    pub fn reorder_task_from_input(
        &mut self,
        task_id: TaskId,
        new_priority: &str,
        new_deadline: &str,
    ) -> Result<TaskUpdate, SchedulerError> {
        let priority = parse_priority(new_priority)?;
        let deadline = parse_deadline(new_deadline)?;
        Ok(self.reorder_task(task_id, priority, deadline))
    }

    /// Change a queued task's description
    pub fn update_task_description(
        &mut self,
        task_id: TaskId,
        new_description: impl Into<String>,
    ) -> TaskUpdate {
        let new_description = new_description.into();
        self.reposition(task_id, move |task| task.set_description(new_description))
    }

    fn reposition(&mut self, task_id: TaskId, mutate: impl FnOnce(&mut Task)) -> TaskUpdate {
        let Some(mut task) = self.queue.remove_by_identity(task_id) else {
            warn!("There is no task {} in the queue", task_id);
            return TaskUpdate::NotFound { id: task_id };
        };

        mutate(&mut task);
        let position = self.queue.add(task);
        debug!("Repositioned task {} to {}", task_id, position);
        TaskUpdate::Repositioned {
            id: task_id,
            position,
        }
    }

    /// Pop the top task and report it as executed
    pub fn execute_task(&mut self) -> Option<Task> {
        match self.queue.pop_highest() {
            Some(task) => {
                info!("Executing task: {}", task);
                Some(task)
            }
            None => {
                info!("No tasks to execute");
                None
            }
        }
    }

    /// Execute every queued task in schedule order
    pub fn drain(&mut self) -> Vec<Task> {
        std::iter::from_fn(|| self.execute_task()).collect()
    }

    pub fn display_tasks(&self) -> TaskReport<'_> {
        match self.queue.list_all() {
            [] => TaskReport::Empty,
            tasks => TaskReport::Current(tasks),
        }
    }

    pub fn list_tasks(&self) -> &[Task] {
        self.queue.list_all()
    }

    pub fn size(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear_tasks(&mut self) {
        let dropped = self.queue.len();
        self.queue.clear();
        info!("Cleared {} tasks", dropped);
    }
}

impl TaskUpdate {
    pub fn is_found(&self) -> bool {
        matches!(self, TaskUpdate::Repositioned { .. })
    }

    pub fn task_id(&self) -> TaskId {
        match self {
            TaskUpdate::Repositioned { id, .. } | TaskUpdate::NotFound { id } => *id,
        }
    }
}

impl TaskReport<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, TaskReport::Empty)
    }

    pub fn tasks(&self) -> &[Task] {
        match self {
            TaskReport::Empty => &[],
            TaskReport::Current(tasks) => tasks,
        }
    }
}

impl fmt::Display for TaskReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskReport::Empty => write!(f, "No tasks"),
            TaskReport::Current(tasks) => {
                write!(f, "Current tasks:")?;
                for task in tasks.iter() {
                    write!(f, "\n{task}")?;
                }
                Ok(())
            }
        }
    }
}
