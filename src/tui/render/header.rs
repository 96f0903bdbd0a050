use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::helpers::{input_spans, spans_width};
use crate::tui::app::{App, Focus};

const APP_NAME: &str = "TodoFlow";
const QUICK_ADD_PLACEHOLDER: &str = "Add a new task...";

/// Render the header: app name + quick-add input, with separator line below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title + input
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let focused = app.focus == Focus::QuickAdd;

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            APP_NAME,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            "+ ",
            Style::default()
                .fg(if focused { app.theme.highlight } else { app.theme.dim })
                .bg(bg),
        ),
    ];

    let input_width = (area.width as usize).saturating_sub(spans_width(&spans) + 1);
    let input_bg = if focused { app.theme.selection_bg } else { bg };
    spans.extend(input_spans(
        &app.form.draft.title,
        QUICK_ADD_PLACEHOLDER,
        focused.then_some(app.edit_cursor),
        input_width,
        Style::default().fg(app.theme.text_bright).bg(input_bg),
        Style::default().fg(app.theme.dim).bg(input_bg),
        Style::default().fg(app.theme.highlight).bg(input_bg),
    ));

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(header, chunks[0]);

    let separator = Paragraph::new(Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    frame.render_widget(separator, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_placeholder() {
        let app = test_app();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.starts_with(" TodoFlow  + Add a new task..."));
    }

    #[test]
    fn header_shares_title_with_form() {
        let mut app = test_app();
        app.form.draft.title = "Buy milk".into();
        app.set_focus(Focus::QuickAdd);
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains("+ Buy milk\u{258C}"));
    }
}
