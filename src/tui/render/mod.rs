pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod sidebar;
pub mod status_row;
pub mod task_form;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Width of the view selector column
pub const SIDEBAR_WIDTH: u16 = 18;
/// Width of the details form column
pub const FORM_WIDTH: u16 = 34;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // The date-based views can shrink between frames once the day changes
    app.clamp_cursor();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | body | status row (1 row)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + quick add, separator
            Constraint::Min(1),    // sidebar | tasks | form
            Constraint::Length(1), // status row
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Min(10),
            Constraint::Length(FORM_WIDTH),
        ])
        .split(rows[1]);

    header::render_header(frame, app, rows[0]);
    sidebar::render_sidebar(frame, app, columns[0]);
    task_list::render_task_list(frame, app, columns[1]);
    task_form::render_task_form(frame, app, columns[2]);
    status_row::render_status_row(frame, app, rows[2]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;
    use crate::model::View;

    #[test]
    fn full_screen_empty_state() {
        let mut app = test_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("TodoFlow"));
        assert!(output.contains("Today"));
        assert!(output.contains("No tasks found."));
        assert!(output.contains("Add Task Details"));
    }

    #[test]
    fn full_screen_with_tasks() {
        let mut app = app_with_tasks(SAMPLE_TASKS);
        app.view = View::All;
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("Buy milk"));
        assert!(output.contains("Pay rent"));
        assert!(!output.contains("No tasks found."));
    }

    fn one_week_later() -> chrono::NaiveDate {
        fixed_today() + chrono::Days::new(7)
    }

    #[test]
    fn cursor_follows_list_after_day_changes() {
        let mut app = app_with_tasks(SAMPLE_TASKS);
        app.set_view(View::Upcoming);
        app.cursor = 1;
        assert_eq!(app.selected_task().map(|t| t.title.as_str()), Some("Pay rent"));

        app.clock = one_week_later;
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(!output.contains("Call mom"));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected_task().map(|t| t.title.as_str()), Some("Pay rent"));
    }

    #[test]
    fn full_screen_help_overlay() {
        let mut app = test_app();
        app.show_help = true;
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("Key Bindings"));
    }
}
