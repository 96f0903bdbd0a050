use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::store::TaskStore;
use crate::model::task::{Priority, Task};

/// Error type for task operations. The store is unchanged whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("task not found: {0}")]
    NotFound(Uuid),
}

/// Raw form input for a task, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// `yyyy-MM-dd`, or empty for no due date
    pub due_date: String,
    pub priority: Priority,
    /// Comma separated
    pub tags: String,
}

impl TaskDraft {
    /// Seed a draft from an existing task
    pub fn from_task(task: &Task) -> Self {
        TaskDraft {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task
                .due_date
                .map(format_due_date_input)
                .unwrap_or_default(),
            priority: task.priority,
            tags: task.tags.join(", "),
        }
    }

    fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

/// Split a comma separated tag field: each tag trimmed, empties dropped,
/// order and duplicates kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a `yyyy-MM-dd` date field. Empty or malformed input means no date.
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Format a date the way the date field expects it
pub fn format_due_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_description(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

// ---------------------------------------------------------------------------
// Store mutations
// ---------------------------------------------------------------------------

/// Append a new task built from `draft`. Returns the new task's id.
pub fn add_task(store: &mut TaskStore, draft: &TaskDraft) -> Result<Uuid, TaskError> {
    if !draft.has_title() {
        return Err(TaskError::EmptyTitle);
    }

    let mut task = Task::new(draft.title.clone());
    task.description = parse_description(&draft.description);
    task.due_date = parse_due_date(&draft.due_date);
    task.priority = draft.priority;
    task.tags = parse_tags(&draft.tags);
    let id = task.id;

    let mut tasks = store.tasks().to_vec();
    tasks.push(task);
    store.replace(tasks);

    tracing::info!(task_id = %id, "task added");
    Ok(id)
}

/// Flip the completed flag of a task. Returns the new value.
pub fn toggle_completion(store: &mut TaskStore, id: Uuid) -> Result<bool, TaskError> {
    let completed = store
        .find(id)
        .map(|t| !t.completed)
        .ok_or(TaskError::NotFound(id))?;

    let tasks = store
        .tasks()
        .iter()
        .map(|t| {
            if t.id == id {
                Task {
                    completed,
                    ..t.clone()
                }
            } else {
                t.clone()
            }
        })
        .collect();
    store.replace(tasks);

    tracing::info!(task_id = %id, completed, "task completion toggled");
    Ok(completed)
}

/// Remove a task from the store
pub fn delete_task(store: &mut TaskStore, id: Uuid) -> Result<(), TaskError> {
    if !store.contains(id) {
        return Err(TaskError::NotFound(id));
    }
    let tasks = store
        .tasks()
        .iter()
        .filter(|t| t.id != id)
        .cloned()
        .collect();
    store.replace(tasks);

    tracing::info!(task_id = %id, "task deleted");
    Ok(())
}

/// Replace a task's editable fields from `draft`. `completed` and
/// `subtasks` are left alone.
pub fn edit_task(store: &mut TaskStore, id: Uuid, draft: &TaskDraft) -> Result<(), TaskError> {
    if !draft.has_title() {
        return Err(TaskError::EmptyTitle);
    }
    if !store.contains(id) {
        return Err(TaskError::NotFound(id));
    }

    let tasks = store
        .tasks()
        .iter()
        .map(|t| {
            if t.id == id {
                Task {
                    title: draft.title.clone(),
                    description: parse_description(&draft.description),
                    due_date: parse_due_date(&draft.due_date),
                    priority: draft.priority,
                    tags: parse_tags(&draft.tags),
                    ..t.clone()
                }
            } else {
                t.clone()
            }
        })
        .collect();
    store.replace(tasks);

    tracing::info!(task_id = %id, "task edited");
    Ok(())
}
