use crate::task::types::*;
use tracing::debug;

/// Tasks kept fully sorted in schedule order
///
/// The front of the sequence is always the top task: highest priority, then
/// earliest deadline, with deadline-less tasks after dated ones. Every
/// insertion re-sorts the whole sequence; the sort is stable, so ties keep
/// insertion order.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    tasks: Vec<Task>,
}

impl PriorityQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task and re-sort. Returns the position the task landed at.
    pub fn add(&mut self, task: Task) -> usize {
        let task_id = task.id();
        self.tasks.push(task);
        self.tasks.sort_by(schedule_order);

        let position = self.position_of(task_id).unwrap_or(self.tasks.len() - 1);
        debug!("Queued task {} at position {}", task_id, position);
        position
    }

    /// Remove and return the top task
    pub fn pop_highest(&mut self) -> Option<Task> {
        if self.tasks.is_empty() {
            return None;
        }
        Some(self.tasks.remove(0))
    }

    /// Top task without removing it
    pub fn peek_highest(&self) -> Option<&Task> {
        self.tasks.first()
    }

    /// Every queued task in schedule order
    pub fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Take a task out of the queue by identity
    pub fn remove_by_identity(&mut self, task_id: TaskId) -> Option<Task> {
        let position = self.position_of(task_id)?;
        Some(self.tasks.remove(position))
    }

    pub fn position_of(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    pub fn get(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    pub fn contains(&self, task_id: TaskId) -> bool {
        self.position_of(task_id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

impl<'a> IntoIterator for &'a PriorityQueue {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
