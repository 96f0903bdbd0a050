use chrono::{Local, NaiveDate};

use crate::model::task::Task;
use crate::model::view::View;

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Tasks shown in `view` on `today`, in display order.
///
/// - `Today`: incomplete, due exactly today
/// - `Upcoming`: incomplete, due after today, ascending by due date
/// - `All`: incomplete, in insertion order
/// - `Completed`: completed, in insertion order
///
/// Tasks without a due date never show up in `Today` or `Upcoming`.
pub fn filter_tasks(tasks: &[Task], view: View, today: NaiveDate) -> Vec<&Task> {
    match view {
        View::Today => tasks
            .iter()
            .filter(|t| !t.completed && t.due_date == Some(today))
            .collect(),
        View::Upcoming => {
            let mut upcoming: Vec<&Task> = tasks
                .iter()
                .filter(|t| !t.completed && t.due_date.is_some_and(|d| d > today))
                .collect();
            // Stable: tasks due the same day keep insertion order
            upcoming.sort_by_key(|t| t.due_date);
            upcoming
        }
        View::All => tasks.iter().filter(|t| !t.completed).collect(),
        View::Completed => tasks.iter().filter(|t| t.completed).collect(),
    }
}

/// Number of tasks each view would show, in sidebar order
pub fn view_counts(tasks: &[Task], today: NaiveDate) -> [usize; 4] {
    View::ALL.map(|view| filter_tasks(tasks, view, today).len())
}
