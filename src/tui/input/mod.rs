mod form;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use form::handle_form;
use navigate::handle_navigate;

/// Handle a key event for the current focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows everything until dismissed
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.focus {
        Focus::List => handle_navigate(app, key),
        Focus::QuickAdd | Focus::Form(_) => handle_form(app, key),
    }
}


#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::model::Config;

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut app = App::new(&Config::default());
        app.set_focus(Focus::QuickAdd);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.focus, Focus::List);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }
}
