use std::sync::Arc;

use uuid::Uuid;

use super::task::Task;

/// The ordered, in-memory task list for the session.
///
/// The backing slice is never mutated in place: every change builds a new
/// slice and swaps it in, so a [`TaskStore::snapshot`] taken earlier keeps
/// showing the tasks exactly as they were.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Arc<[Task]>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Arc::from(Vec::new()),
        }
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Shared handle to the current task list
    pub fn snapshot(&self) -> Arc<[Task]> {
        Arc::clone(&self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.find(id).is_some()
    }

    /// Swap in a whole new task list
    pub(crate) fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = Arc::from(tasks);
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TaskStore {
    fn eq(&self, other: &Self) -> bool {
        self.tasks[..] == other.tasks[..]
    }
}

impl Eq for TaskStore {}

impl FromIterator<Task> for TaskStore {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        TaskStore {
            tasks: iter.into_iter().collect(),
        }
    }
}
