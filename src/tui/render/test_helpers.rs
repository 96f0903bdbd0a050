use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, Priority};
use crate::ops::task_ops::{TaskDraft, add_task};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// The fixed "today" used by render tests: 2026-10-18
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// An App with default config, no tasks, and a fixed clock.
pub fn test_app() -> App {
    let mut app = App::new(&Config::default());
    app.clock = fixed_today;
    app
}

/// Build an App whose store holds one task per
/// `(title, description, due, priority, tags)` row.
pub fn app_with_tasks(rows: &[(&str, &str, &str, Priority, &str)]) -> App {
    let mut app = test_app();
    for (title, description, due, priority, tags) in rows {
        let draft = TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            due_date: due.to_string(),
            priority: *priority,
            tags: tags.to_string(),
        };
        add_task(&mut app.store, &draft).unwrap();
    }
    app
}

/// A few tasks spread across the views (relative to [`fixed_today`]).
pub const SAMPLE_TASKS: &[(&str, &str, &str, Priority, &str)] = &[
    ("Buy milk", "", "2026-10-18", Priority::High, "home"),
    ("Pay rent", "Transfer before noon", "2026-11-01", Priority::Medium, "home, bills"),
    ("Read book", "", "", Priority::Low, ""),
    ("Call mom", "", "2026-10-20", Priority::Medium, "personal"),
];
