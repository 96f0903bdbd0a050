use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::form::FormField;
use crate::tui::app::{App, Focus};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Keys while the quick-add input or a form field has focus
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let Some(field) = app.focused_field() else {
        return;
    };

    match key.code {
        // Leaves the form but keeps its fields and mode
        KeyCode::Esc => app.set_focus(Focus::List),
        KeyCode::Enter => app.commit_form(),
        KeyCode::Tab | KeyCode::Down => app.set_focus(next_focus(app.focus)),
        KeyCode::BackTab | KeyCode::Up => app.set_focus(prev_focus(app.focus)),
        _ if field == FormField::Priority => handle_priority(app, key),
        _ => handle_text(app, field, key),
    }
}

fn next_focus(focus: Focus) -> Focus {
    match focus {
        Focus::QuickAdd => Focus::Form(FormField::Description),
        Focus::Form(field) => Focus::Form(field.next()),
        Focus::List => Focus::List,
    }
}

fn prev_focus(focus: Focus) -> Focus {
    match focus {
        Focus::QuickAdd => Focus::Form(FormField::Tags),
        Focus::Form(field) => Focus::Form(field.prev()),
        Focus::List => Focus::List,
    }
}

fn handle_priority(app: &mut App, key: KeyEvent) {
    let priority = app.form.draft.priority;
    match key.code {
        KeyCode::Left => app.form.set_priority(priority.prev()),
        KeyCode::Right | KeyCode::Char(' ') => app.form.set_priority(priority.next()),
        // First letter of the label picks it directly
        KeyCode::Char(c) => {
            if let Some(p) = crate::model::Priority::ALL
                .into_iter()
                .find(|p| p.label().starts_with(c.to_ascii_uppercase()))
            {
                app.form.set_priority(p);
            }
        }
        _ => {}
    }
}

fn handle_text(app: &mut App, field: FormField, key: KeyEvent) {
    let cursor = app.edit_cursor;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let Some(text) = app.form.field_text_mut(field) else {
        return;
    };
    let cursor = cursor.min(text.len());

    let new_cursor = match key.code {
        KeyCode::Char('a') if ctrl => 0,
        KeyCode::Char('e') if ctrl => text.len(),
        KeyCode::Char('u') if ctrl => {
            text.replace_range(..cursor, "");
            0
        }
        KeyCode::Char(_) if ctrl => cursor,
        KeyCode::Char(c) => {
            text.insert(cursor, c);
            cursor + c.len_utf8()
        }
        KeyCode::Backspace => match prev_grapheme_boundary(text, cursor) {
            Some(prev) => {
                text.replace_range(prev..cursor, "");
                prev
            }
            None => cursor,
        },
        KeyCode::Delete => {
            if let Some(next) = next_grapheme_boundary(text, cursor) {
                text.replace_range(cursor..next, "");
            }
            cursor
        }
        KeyCode::Left => prev_grapheme_boundary(text, cursor).unwrap_or(cursor),
        KeyCode::Right => next_grapheme_boundary(text, cursor).unwrap_or(cursor),
        KeyCode::Home => 0,
        KeyCode::End => text.len(),
        _ => cursor,
    };
    app.edit_cursor = new_cursor;
}
