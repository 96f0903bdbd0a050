use uuid::Uuid;

use crate::model::store::TaskStore;
use crate::model::task::{Priority, Task};
use crate::ops::task_ops::{self, TaskDraft, TaskError};

/// Whether a commit creates a new task or saves an existing one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(Uuid),
}

/// The editable fields of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    DueDate,
    Priority,
    Tags,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::DueDate,
        FormField::Priority,
        FormField::Tags,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::DueDate => "Due Date",
            FormField::Priority => "Priority",
            FormField::Tags => "Tags (comma separated)",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Title => "Task title",
            FormField::Description => "Task description",
            FormField::DueDate => "yyyy-mm-dd",
            FormField::Priority => "",
            FormField::Tags => "work, personal, urgent",
        }
    }

    pub fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::DueDate,
            FormField::DueDate => FormField::Priority,
            FormField::Priority => FormField::Tags,
            FormField::Tags => FormField::Title,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Title => FormField::Tags,
            FormField::Description => FormField::Title,
            FormField::DueDate => FormField::Description,
            FormField::Priority => FormField::DueDate,
            FormField::Tags => FormField::Priority,
        }
    }

    /// Priority is a selector, every other field is free text
    pub fn is_text(self) -> bool {
        self != FormField::Priority
    }
}

/// What a commit did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Added(Uuid),
    Saved(Uuid),
}

/// Form fields plus the create/edit mode.
///
/// The only way out of `Editing` is a commit whose title is non-empty.
/// There is no cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: TaskDraft,
    pub mode: FormMode,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Task id being edited, if any
    pub fn editing_id(&self) -> Option<Uuid> {
        match self.mode {
            FormMode::Creating => None,
            FormMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Switch to editing `task`, seeding every field from it
    pub fn start_editing(&mut self, task: &Task) {
        self.mode = FormMode::Editing(task.id);
        self.draft = TaskDraft::from_task(task);
        tracing::debug!(task_id = %task.id, "editing task");
    }

    /// Add or save depending on the mode. On success the fields are cleared
    /// and the form returns to `Creating`. On failure nothing changes.
    ///
    /// Saving a task that was deleted meanwhile still clears the form.
    pub fn commit(&mut self, store: &mut TaskStore) -> Result<Commit, TaskError> {
        let result = match self.mode {
            FormMode::Creating => task_ops::add_task(store, &self.draft).map(Commit::Added),
            FormMode::Editing(id) => match task_ops::edit_task(store, id, &self.draft) {
                Ok(()) => Ok(Commit::Saved(id)),
                Err(TaskError::NotFound(_)) => {
                    self.reset();
                    return Err(TaskError::NotFound(id));
                }
                Err(e) => Err(e),
            },
        };
        if result.is_ok() {
            self.reset();
        }
        result
    }

    /// Back to an empty `Creating` form
    fn reset(&mut self) {
        self.mode = FormMode::Creating;
        self.draft = TaskDraft::default();
    }

    /// Text of a free-text field
    pub fn field_text(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.draft.title,
            FormField::Description => &self.draft.description,
            FormField::DueDate => &self.draft.due_date,
            FormField::Priority => self.draft.priority.label(),
            FormField::Tags => &self.draft.tags,
        }
    }

    /// Mutable text of a free-text field; `None` for the priority selector
    pub fn field_text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.draft.title),
            FormField::Description => Some(&mut self.draft.description),
            FormField::DueDate => Some(&mut self.draft.due_date),
            FormField::Priority => None,
            FormField::Tags => Some(&mut self.draft.tags),
        }
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(form: &mut FormState, field: FormField, text: &str) {
        if let Some(s) = form.field_text_mut(field) {
            *s = text.to_string();
        }
    }

    #[test]
    fn test_commit_creating_adds_and_clears() {
        let mut store = TaskStore::new();
        let mut form = FormState::new();
        typed(&mut form, FormField::Title, "Buy milk");
        typed(&mut form, FormField::Tags, "home");
        form.set_priority(Priority::High);

        let commit = form.commit(&mut store).unwrap();
        let Commit::Added(id) = commit else {
            panic!("expected add, got {:?}", commit);
        };
        assert!(store.contains(id));
        assert_eq!(form, FormState::new());
        assert_eq!(form.draft.priority, Priority::Medium);
    }

    #[test]
    fn test_commit_creating_empty_title_keeps_fields() {
        let mut store = TaskStore::new();
        let mut form = FormState::new();
        typed(&mut form, FormField::Title, "   ");
        typed(&mut form, FormField::Description, "notes");

        assert_eq!(form.commit(&mut store), Err(TaskError::EmptyTitle));
        assert!(store.is_empty());
        assert_eq!(form.draft.description, "notes");
        assert_eq!(form.mode, FormMode::Creating);
    }

    #[test]
    fn test_start_editing_seeds_fields() {
        let mut store = TaskStore::new();
        let mut form = FormState::new();
        form.draft = TaskDraft {
            title: "Report".into(),
            description: String::new(),
            due_date: "2026-11-02".into(),
            priority: Priority::Low,
            tags: "work,,  q4".into(),
        };
        let Commit::Added(id) = form.commit(&mut store).unwrap() else {
            panic!("expected add");
        };

        form.start_editing(store.find(id).unwrap());
        assert_eq!(form.mode, FormMode::Editing(id));
        assert_eq!(form.field_text(FormField::Title), "Report");
        assert_eq!(form.field_text(FormField::DueDate), "2026-11-02");
        assert_eq!(form.field_text(FormField::Tags), "work, q4");
        assert_eq!(form.field_text(FormField::Priority), "Low");
    }

    #[test]
    fn test_commit_editing_saves_and_returns_to_creating() {
        let mut store = TaskStore::new();
        let mut form = FormState::new();
        typed(&mut form, FormField::Title, "Draft");
        form.commit(&mut store).unwrap();
        let id = store.tasks()[0].id;

        form.start_editing(store.find(id).unwrap());
        typed(&mut form, FormField::Title, "Final");
        assert_eq!(form.commit(&mut store), Ok(Commit::Saved(id)));
        assert_eq!(store.find(id).unwrap().title, "Final");
        assert_eq!(store.len(), 1);
        assert!(!form.is_editing());
        assert_eq!(form.draft, TaskDraft::default());
    }

    #[test]
    fn test_commit_editing_empty_title_stays_editing() {
        let mut store = TaskStore::new();
        let mut form = FormState::new();
        typed(&mut form, FormField::Title, "Keep");
        form.commit(&mut store).unwrap();
        let id = store.tasks()[0].id;

        form.start_editing(store.find(id).unwrap());
        typed(&mut form, FormField::Title, "");
        let before = store.clone();
        assert_eq!(form.commit(&mut store), Err(TaskError::EmptyTitle));
        assert_eq!(form.mode, FormMode::Editing(id));
        assert_eq!(store, before);
    }

    #[test]
    fn test_commit_editing_deleted_task_clears_form() {
        let mut store = TaskStore::new();
        let mut form = FormState::new();
        typed(&mut form, FormField::Title, "Gone soon");
        form.commit(&mut store).unwrap();
        let id = store.tasks()[0].id;

        form.start_editing(store.find(id).unwrap());
        task_ops::delete_task(&mut store, id).unwrap();
        assert_eq!(form.commit(&mut store), Err(TaskError::NotFound(id)));
        assert!(store.is_empty());
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn test_priority_field_is_not_text() {
        let mut form = FormState::new();
        assert!(form.field_text_mut(FormField::Priority).is_none());
        assert!(!FormField::Priority.is_text());
        for f in FormField::ALL {
            assert_eq!(f.next().prev(), f);
        }
    }
}
