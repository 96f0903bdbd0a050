use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::View;
use crate::ops::filter::view_counts;
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the view selector with per-view task counts
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let counts = view_counts(app.store.tasks(), app.today());

    // Blank row ending in the vertical rule that separates the task list
    let rule_line = || {
        Line::from(vec![
            Span::styled(" ".repeat(width.saturating_sub(1)), Style::default().bg(bg)),
            Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg)),
        ])
    };

    let mut lines: Vec<Line> = vec![rule_line()];
    for (view, count) in View::ALL.into_iter().zip(counts) {
        let active = view == app.view;
        let row_bg = if active { app.theme.selection_bg } else { bg };
        let marker = if active { "\u{258E}" } else { " " }; // ▎ active bar

        let label_style = if active {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        // "▎ Today        3 "
        let count_text = if count > 0 { count.to_string() } else { String::new() };
        let label = truncate_to_width(view.label(), width.saturating_sub(6));
        let used = 2 + display_width(&label) + count_text.len() + 1;
        let padding = width.saturating_sub(used + 1);

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(label, label_style),
            Span::styled(" ".repeat(padding), Style::default().bg(row_bg)),
            Span::styled(count_text, Style::default().fg(app.theme.dim).bg(row_bg)),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg)),
        ]));
    }

    for _ in lines.len()..area.height as usize {
        lines.push(rule_line());
    }

    let sidebar = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(sidebar, area);
}
