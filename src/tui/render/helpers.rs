use chrono::NaiveDate;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::util::unicode::{self, tail_to_width, truncate_to_width};

/// Checkbox shown in front of tasks and subtasks
pub(super) fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Card date format, e.g. "Oct 18, 2026"
pub(super) fn format_due_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Spans for a one-line text input `width` cells wide.
///
/// Unfocused inputs show the start of the text (or the placeholder when
/// empty). Focused inputs scroll so the `▌` cursor at byte `cursor` stays
/// in view.
pub(super) fn input_spans(
    text: &str,
    placeholder: &str,
    cursor: Option<usize>,
    width: usize,
    text_style: Style,
    placeholder_style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    let Some(cursor) = cursor else {
        if text.is_empty() {
            return vec![Span::styled(
                truncate_to_width(placeholder, width),
                placeholder_style,
            )];
        }
        return vec![Span::styled(truncate_to_width(text, width), text_style)];
    };

    let cursor = cursor.min(text.len());
    let (before, after) = text.split_at(cursor);
    // One cell for the cursor itself
    let room = width.saturating_sub(1);
    let before = tail_to_width(before, room);
    let after_room = room.saturating_sub(unicode::display_width(before));

    let mut spans = vec![
        Span::styled(before.to_string(), text_style),
        Span::styled("\u{258C}", cursor_style), // ▌ cursor
    ];
    if after_room > 0 && !after.is_empty() {
        spans.push(Span::styled(truncate_to_width(after, after_room), text_style));
    }
    spans
}
