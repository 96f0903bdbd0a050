use std::io;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, Task, TaskStore, View};
use crate::ops::filter::{self, filter_tasks};
use crate::ops::form::{FormField, FormState};
use crate::ops::task_ops;

use super::input;
use super::render;
use super::theme::Theme;

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The task list
    List,
    /// The quick-add input in the header (edits the title field)
    QuickAdd,
    /// A field of the details form
    Form(FormField),
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub form: FormState,
    pub view: View,
    pub focus: Focus,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Cursor index into the visible (filtered) tasks
    pub cursor: usize,
    /// Index of the first visible task card
    pub list_scroll: usize,
    /// Byte offset of the text cursor in the focused field
    pub edit_cursor: usize,
    /// Source of "today"; asked on every render, never cached
    pub clock: fn() -> NaiveDate,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: TaskStore::new(),
            form: FormState::new(),
            view: config.ui.default_view,
            focus: Focus::List,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            cursor: 0,
            list_scroll: 0,
            edit_cursor: 0,
            clock: filter::today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Tasks in the current view, in display order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter_tasks(self.store.tasks(), self.view, self.today())
    }

    /// Task under the list cursor
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.cursor).copied()
    }

    /// Keep the cursor inside the visible list after it shrinks
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_tasks().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.list_scroll = self.list_scroll.min(self.cursor);
    }

    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.cursor = 0;
            self.list_scroll = 0;
        }
    }

    /// Form field receiving text input, if any
    pub fn focused_field(&self) -> Option<FormField> {
        match self.focus {
            Focus::List => None,
            Focus::QuickAdd => Some(FormField::Title),
            Focus::Form(field) => Some(field),
        }
    }

    /// Move focus, parking the text cursor at the end of the new field
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.edit_cursor = self
            .focused_field()
            .map_or(0, |field| self.form.field_text(field).len());
    }

    /// Add or save from the form. Rejections are dropped without feedback.
    pub fn commit_form(&mut self) {
        match self.form.commit(&mut self.store) {
            Ok(commit) => tracing::debug!(?commit, "form committed"),
            Err(e) => tracing::debug!(error = %e, "form commit ignored"),
        }
        // Fields may have been cleared under the text cursor
        self.set_focus(self.focus);
        self.clamp_cursor();
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        if let Err(e) = task_ops::toggle_completion(&mut self.store, id) {
            tracing::debug!(error = %e, "toggle ignored");
        }
        self.clamp_cursor();
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        if let Err(e) = task_ops::delete_task(&mut self.store, id) {
            tracing::debug!(error = %e, "delete ignored");
        }
        self.clamp_cursor();
    }

    /// Load the selected task into the form and focus its title
    pub fn edit_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        self.form.start_editing(&task);
        self.set_focus(Focus::Form(FormField::Title));
    }
}

/// Run the TUI application
pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!(view = %app.view, "session started");
    let result = run_event_loop(&mut terminal, &mut app);
    tracing::info!(tasks = app.store.len(), "session ended, tasks discarded");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Redraw on a timer too, so the Today view follows midnight
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
