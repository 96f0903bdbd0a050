use chrono::NaiveDate;
use uuid::Uuid;

/// Task priority, shown as the accent color of a task card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Label used by the priority selector
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Next option in selector order, wrapping around
    pub fn next(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous option in selector order, wrapping around
    pub fn prev(self) -> Priority {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

/// A nested checklist item. Nothing creates or toggles these; the UI only
/// renders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtask {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

/// A to-do item with scheduling and categorization metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Generated at creation, never changes
    pub id: Uuid,
    /// Never empty or whitespace-only
    pub title: String,
    pub description: Option<String>,
    /// Calendar date only, no time of day
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
    /// Trimmed, non-empty, in entry order (duplicates allowed)
    pub tags: Vec<String>,
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Create an incomplete task with a fresh id and no metadata
    pub fn new(title: String) -> Self {
        Task {
            id: Uuid::new_v4(),
            title,
            description: None,
            due_date: None,
            priority: Priority::default(),
            completed: false,
            tags: Vec::new(),
            subtasks: Vec::new(),
        }
    }
}
