use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::helpers::{checkbox, format_due_date, spans_width};
use crate::model::Task;
use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

const EMPTY_STATE: &str = "No tasks found. Add a new task to get started!";
/// Indent of the lines under a card's title
const DETAIL_INDENT: &str = "      ";

/// Render the filtered tasks as cards, keeping the cursor card in view
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    if area.height < 3 {
        return;
    }

    let heading = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            app.view.label(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(heading).style(Style::default().bg(bg)),
        Rect { height: 1, ..area },
    );

    let list_area = Rect {
        y: area.y + 2,
        height: area.height - 2,
        ..area
    };
    let width = list_area.width as usize;

    let heights: Vec<usize> = app
        .visible_tasks()
        .iter()
        .map(|t| card_height(t))
        .collect();

    if heights.is_empty() {
        let empty = Paragraph::new(Span::styled(
            format!(" {}", EMPTY_STATE),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
        frame.render_widget(empty, list_area);
        return;
    }

    adjust_scroll(app, &heights, list_area.height as usize);

    let list_focused = app.focus == Focus::List;
    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in app.visible_tasks().into_iter().enumerate().skip(app.list_scroll) {
        if lines.len() >= list_area.height as usize {
            break;
        }
        let selected = list_focused && i == app.cursor;
        let editing = app.form.editing_id() == Some(task.id);
        lines.extend(card_lines(app, task, selected, editing, width));
        lines.push(Line::from(""));
    }

    let list = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(list, list_area);
}

/// Rows a card takes, including the blank row after it
fn card_height(task: &Task) -> usize {
    let mut h = 2; // title + spacer
    if task.description.is_some() {
        h += 1;
    }
    if task.due_date.is_some() || !task.tags.is_empty() {
        h += 1;
    }
    h + task.subtasks.len()
}

/// Scroll so the whole cursor card fits, when it can
fn adjust_scroll(app: &mut App, heights: &[usize], view_height: usize) {
    let cursor = app.cursor.min(heights.len() - 1);
    if cursor < app.list_scroll {
        app.list_scroll = cursor;
    }
    while app.list_scroll < cursor
        && heights[app.list_scroll..=cursor].iter().sum::<usize>() > view_height
    {
        app.list_scroll += 1;
    }
}

fn card_lines(
    app: &App,
    task: &Task,
    selected: bool,
    editing: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let row_bg = if selected { theme.selection_bg } else { theme.background };
    let accent = Span::styled(
        "\u{258C}", // ▌ priority bar
        Style::default().fg(theme.priority_color(task.priority)).bg(row_bg),
    );
    let pad = |spans: &mut Vec<Span<'static>>| {
        let used = spans_width(spans);
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
        }
    };

    let mut lines = Vec::new();

    // Title row
    let title_style = if task.completed {
        Style::default()
            .fg(theme.dim)
            .bg(row_bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if selected {
        Style::default().fg(theme.text_bright).bg(row_bg)
    } else {
        Style::default().fg(theme.text).bg(row_bg)
    };
    let mut spans = vec![
        accent.clone(),
        Span::styled(" ", Style::default().bg(row_bg)),
        Span::styled(
            checkbox(task.completed),
            Style::default().fg(theme.text).bg(row_bg),
        ),
        Span::styled(" ", Style::default().bg(row_bg)),
    ];
    let marker = if editing { " \u{270E}" } else { "" }; // ✎ being edited
    let title_room = width.saturating_sub(spans_width(&spans) + marker.chars().count());
    spans.push(Span::styled(
        truncate_to_width(&task.title, title_room),
        title_style,
    ));
    if editing {
        spans.push(Span::styled(
            marker,
            Style::default().fg(theme.highlight).bg(row_bg),
        ));
    }
    pad(&mut spans);
    lines.push(Line::from(spans));

    let detail_room = width.saturating_sub(1 + DETAIL_INDENT.len());

    // Description row
    if let Some(description) = &task.description {
        let mut spans = vec![
            accent.clone(),
            Span::styled(DETAIL_INDENT, Style::default().bg(row_bg)),
            Span::styled(
                truncate_to_width(description.lines().next().unwrap_or(""), detail_room),
                Style::default().fg(theme.dim).bg(row_bg),
            ),
        ];
        pad(&mut spans);
        lines.push(Line::from(spans));
    }

    // Meta row: due date and tags
    if task.due_date.is_some() || !task.tags.is_empty() {
        let mut spans = vec![
            accent.clone(),
            Span::styled(DETAIL_INDENT, Style::default().bg(row_bg)),
        ];
        let mut meta: Vec<Span<'static>> = Vec::new();
        if let Some(due) = task.due_date {
            meta.push(Span::styled(
                format_due_date(due),
                Style::default().fg(theme.yellow).bg(row_bg),
            ));
        }
        for tag in &task.tags {
            if !meta.is_empty() {
                meta.push(Span::styled(" ", Style::default().bg(row_bg)));
            }
            meta.push(Span::styled(
                format!("#{}", tag),
                Style::default().fg(theme.tag_color(tag)).bg(row_bg),
            ));
        }
        // Drop trailing tags that do not fit
        while spans_width(&meta) > detail_room && meta.len() > 1 {
            meta.pop();
        }
        spans.extend(meta);
        pad(&mut spans);
        lines.push(Line::from(spans));
    }

    // Subtasks: display only, nothing toggles them
    for subtask in &task.subtasks {
        let mut spans = vec![
            accent.clone(),
            Span::styled(DETAIL_INDENT, Style::default().bg(row_bg)),
            Span::styled(
                format!("{} ", checkbox(subtask.completed)),
                Style::default().fg(theme.dim).bg(row_bg),
            ),
            Span::styled(
                truncate_to_width(&subtask.title, detail_room.saturating_sub(4)),
                Style::default().fg(theme.text).bg(row_bg),
            ),
        ];
        pad(&mut spans);
        lines.push(Line::from(spans));
    }

    lines
}
