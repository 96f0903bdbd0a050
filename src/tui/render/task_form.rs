use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::helpers::input_spans;
use crate::model::Priority;
use crate::ops::form::FormField;
use crate::tui::app::App;

/// Render the details form: every editable field of the task being added
/// or edited
pub fn render_task_form(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.form.is_editing();
    let title = if editing { " Edit Task " } else { " Add Task Details " };
    let focused_field = app.focused_field();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused_field.is_some() {
            app.theme.highlight
        } else {
            app.theme.dim
        }))
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for field in FormField::ALL {
        let focused = focused_field == Some(field);
        let label_style = if focused {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        lines.push(Line::from(Span::styled(format!(" {}", field.label()), label_style)));

        let input_bg = if focused { app.theme.selection_bg } else { bg };
        let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
        if field == FormField::Priority {
            spans.extend(priority_spans(app, app.form.draft.priority, input_bg));
        } else {
            spans.extend(input_spans(
                app.form.field_text(field),
                field.placeholder(),
                focused.then_some(app.edit_cursor),
                width,
                Style::default().fg(app.theme.text_bright).bg(input_bg),
                Style::default().fg(app.theme.dim).bg(input_bg),
                Style::default().fg(app.theme.highlight).bg(input_bg),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let action = if editing { "Save" } else { "Add Task" };
    lines.push(Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(action, Style::default().fg(app.theme.text).bg(bg)),
    ]));

    let form = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(form, inner);
}

/// "Low  [Medium]  High" with the current choice bracketed
fn priority_spans(
    app: &App,
    current: Priority,
    input_bg: ratatui::style::Color,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, p) in Priority::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default().bg(input_bg)));
        }
        if p == current {
            spans.push(Span::styled(
                format!("[{}]", p.label()),
                Style::default()
                    .fg(app.theme.priority_color(p))
                    .bg(input_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", p.label()),
                Style::default().fg(app.theme.dim).bg(input_bg),
            ));
        }
    }
    spans
}
