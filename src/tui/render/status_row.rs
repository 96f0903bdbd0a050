use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::helpers::spans_width;
use crate::ops::form::FormField;
use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

/// Render the status row (bottom of screen): key hints on the left, form
/// mode on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mode = if app.form.is_editing() { "EDIT " } else { "" };
    let mode_width = mode.len();

    let mut spans: Vec<Span> = Vec::new();
    if app.show_key_hints {
        let hints = key_hints(app.focus);
        spans.push(Span::styled(
            truncate_to_width(hints, width.saturating_sub(mode_width + 1)),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let used = spans_width(&spans);
    if used + mode_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - mode_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(mode, Style::default().fg(app.theme.highlight).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::List => " a add  e edit  space done  d delete  1-4 view  ? help  q quit",
        Focus::Form(FormField::Priority) => {
            " \u{2190}\u{2192} priority  Tab next  Enter commit  Esc list"
        }
        Focus::QuickAdd | Focus::Form(_) => " Enter commit  Tab next field  Esc list",
    }
}
