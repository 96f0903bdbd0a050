use crossterm::event::{KeyCode, KeyEvent};

use crate::model::View;
use crate::ops::form::FormField;
use crate::tui::app::{App, Focus};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_tasks().len();
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible_tasks().len().saturating_sub(1);
        }

        // Views
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            app.set_view(View::ALL[idx]);
        }
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => app.set_view(app.view.next()),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => app.set_view(app.view.prev()),

        // Task actions
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),

        // Form
        KeyCode::Char('a') => app.set_focus(Focus::QuickAdd),
        KeyCode::Char('i') | KeyCode::Char('f') => app.set_focus(Focus::Form(FormField::Title)),

        _ => {}
    }
}
