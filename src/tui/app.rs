use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::lock::FileLock;
use crate::io::store::Store;
use crate::model::{Config, ListKind, Lists, Todo};
use crate::ops::completed::{find_authoritative, recompute_displayed};
use crate::ops::list_ops::InsertPosition;

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Current interaction mode. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Adding {
        position: InsertPosition,
        input: TextInput,
    },
    Renaming {
        input: TextInput,
    },
    /// `index` is the note being rewritten; `None` adds a new note
    EditingNote {
        index: Option<usize>,
        input: TextInput,
    },
    ConfirmingDelete,
    ConfirmingNoteDelete {
        index: usize,
    },
    NavigatingNotes {
        index: usize,
    },
}

impl Mode {
    /// Buffer of the text modes
    pub fn input(&self) -> Option<&TextInput> {
        match self {
            Mode::Adding { input, .. }
            | Mode::Renaming { input }
            | Mode::EditingNote { input, .. } => Some(input),
            _ => None,
        }
    }

    pub fn input_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            Mode::Adding { input, .. }
            | Mode::Renaming { input }
            | Mode::EditingNote { input, .. } => Some(input),
            _ => None,
        }
    }

    /// Note highlighted under the cursor, if the mode selects one
    pub fn note_index(&self) -> Option<usize> {
        match self {
            Mode::NavigatingNotes { index } | Mode::ConfirmingNoteDelete { index } => Some(*index),
            Mode::EditingNote { index, .. } => *index,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Transient feedback line under the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application state
pub struct App {
    pub lists: Lists,
    pub store: Store,
    pub view: ListKind,
    /// Index into the list the current view shows
    pub cursor: usize,
    pub mode: Mode,
    /// Most recent completions, derived from `lists.completed`
    pub displayed_completed: Vec<Todo>,
    pub completed_limit: usize,
    /// Whether `a` inserts at the top instead of the bottom
    pub add_to_top: bool,
    /// Notes of the todo under the cursor are expanded
    pub show_note: bool,
    pub show_all_notes: bool,
    pub show_help: bool,
    /// Week/day grouped rendering of the Completed tab
    pub prettify: bool,
    pub status: Option<StatusMessage>,
    pub theme: Theme,
    /// First visible row of the list area, kept by the renderer
    pub scroll: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Store, lists: Lists, config: &Config) -> Self {
        let completed_limit = config.display.completed_limit;
        let displayed_completed = recompute_displayed(&lists.completed, completed_limit);
        App {
            lists,
            store,
            view: ListKind::Ready,
            cursor: 0,
            mode: Mode::Idle,
            displayed_completed,
            completed_limit,
            add_to_top: config.display.add_to_top,
            show_note: false,
            show_all_notes: false,
            show_help: false,
            prettify: false,
            status: None,
            theme: Theme::from_config(&config.ui),
            scroll: 0,
            should_quit: false,
        }
    }

    /// The list the current view shows (the projection for Completed)
    pub fn current_list(&self) -> &[Todo] {
        match self.view {
            ListKind::Completed => &self.displayed_completed,
            kind => self.lists.get(kind),
        }
    }

    pub fn current_todo(&self) -> Option<&Todo> {
        self.current_list().get(self.cursor)
    }

    /// Map the cursor to the authoritative list and index of its todo.
    ///
    /// In the Completed tab the cursor indexes the projection, so the record
    /// is looked up in the completed list.
    pub fn locate_cursor(&self) -> Option<(ListKind, usize)> {
        let todo = self.current_todo()?;
        let index = match self.view {
            ListKind::Completed => find_authoritative(todo, &self.lists.completed)?,
            _ => self.cursor,
        };
        Some((self.view, index))
    }

    /// Authoritative record under the cursor
    pub fn cursor_todo_mut(&mut self) -> Option<&mut Todo> {
        let (kind, index) = self.locate_cursor()?;
        self.lists.get_mut(kind).get_mut(index)
    }

    pub fn recompute_displayed(&mut self) {
        self.displayed_completed = recompute_displayed(&self.lists.completed, self.completed_limit);
    }

    /// Persist the given lists. On failure the in-memory change stays and the
    /// error becomes the status line; returns whether every save succeeded.
    pub fn save(&mut self, kinds: &[ListKind]) -> bool {
        let mut ok = true;
        for &kind in kinds {
            if let Err(e) = self.store.save(kind, self.lists.get(kind)) {
                if ok {
                    self.set_status(StatusKind::Error, format!("Save failed: {e}"));
                }
                ok = false;
            }
        }
        ok
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Drop out of note navigation and hide the single-note view
    pub fn reset_note_state(&mut self) {
        self.show_note = false;
        if matches!(
            self.mode,
            Mode::NavigatingNotes { .. } | Mode::ConfirmingNoteDelete { .. }
        ) {
            self.mode = Mode::Idle;
        }
    }

    /// Clamp the cursor into the current list's bounds
    pub fn clamp_cursor(&mut self) {
        self.cursor = crate::ops::list_ops::clamp_cursor(self.cursor, self.current_list().len());
    }

    /// Switch tabs, resetting cursor, status and note state
    pub fn switch_view(&mut self, view: ListKind) {
        self.view = view;
        if view == ListKind::Completed {
            self.recompute_displayed();
        } else {
            self.prettify = false;
        }
        self.cursor = 0;
        self.scroll = 0;
        self.clear_status();
        self.reset_note_state();
    }

    /// Where `a` inserts; `A` does the opposite
    pub fn add_position(&self, alternate: bool) -> InsertPosition {
        if self.add_to_top != alternate {
            InsertPosition::Top
        } else {
            InsertPosition::Bottom
        }
    }
}

/// Restore the last tab and the all-notes toggle from `.stint_state.json`
pub fn restore_ui_state(app: &mut App) {
    use crate::io::state::read_ui_state;

    let Some(ui_state) = read_ui_state(app.store.dir()) else {
        return;
    };
    if let Some(view) = ListKind::from_name(&ui_state.view) {
        app.switch_view(view);
    }
    app.show_all_notes = ui_state.show_all_notes;
}

pub fn save_ui_state(app: &App) {
    use crate::io::state::{UiState, write_ui_state};

    let ui_state = UiState {
        view: app.view.store_suffix().to_string(),
        show_all_notes: app.show_all_notes,
    };
    if let Err(e) = write_ui_state(app.store.dir(), &ui_state) {
        tracing::warn!(error = %e, "could not save UI state");
    }
}

/// Open the data directory and run the TUI until the user quits
pub fn run(data_dir: &Path, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;

    let store = Store::new(data_dir, &config.store);
    let lists = store.load_all(Local::now())?;
    tracing::info!(
        dir = %data_dir.display(),
        backlog = lists.backlog.len(),
        ready = lists.ready.len(),
        completed = lists.completed.len(),
        "loaded lists"
    );

    let mut app = App::new(store, lists, &config);
    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StoreConfig;
    use chrono::{Duration as ChronoDuration, TimeZone};
    use tempfile::TempDir;

    fn todo(text: &str) -> Todo {
        Todo::new(text.into(), Local.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap())
    }

    fn app_with(dir: &TempDir, lists: Lists) -> App {
        let store = Store::new(dir.path(), &StoreConfig::default());
        App::new(store, lists, &Config::default())
    }

    #[test]
    fn starts_idle_on_ready() {
        let dir = TempDir::new().unwrap();
        let app = app_with(&dir, Lists::default());
        assert_eq!(app.view, ListKind::Ready);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.mode, Mode::Idle);
        assert!(app.current_todo().is_none());
    }

    #[test]
    fn completed_cursor_maps_through_projection() {
        let dir = TempDir::new().unwrap();
        let base = Local.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap();
        let mut lists = Lists::default();
        for (i, name) in ["First", "Second", "Third"].iter().enumerate() {
            let mut t = todo(name);
            t.completed_at = Some(base + ChronoDuration::hours(i as i64));
            lists.completed.push(t);
        }
        let mut app = app_with(&dir, lists);
        app.switch_view(ListKind::Completed);

        // Projection is newest first; the authoritative list is oldest first
        assert_eq!(app.current_todo().unwrap().text, "Third");
        assert_eq!(app.locate_cursor(), Some((ListKind::Completed, 2)));

        app.cursor = 2;
        app.cursor_todo_mut().unwrap().text = "Renamed".into();
        assert_eq!(app.lists.completed[0].text, "Renamed");
    }

    #[test]
    fn save_failure_keeps_change_and_reports() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("missing"), &StoreConfig::default());
        let mut app = App::new(store, Lists::default(), &Config::default());
        app.lists.backlog.push(todo("Kept"));

        assert!(!app.save(&[ListKind::Backlog]));
        assert_eq!(app.lists.backlog.len(), 1);
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.starts_with("Save failed:"));
    }

    #[test]
    fn switching_view_resets_transient_state() {
        let dir = TempDir::new().unwrap();
        let mut lists = Lists::default();
        lists.ready = vec![todo("A"), todo("B")];
        let mut app = app_with(&dir, lists);
        app.cursor = 1;
        app.show_note = true;
        app.mode = Mode::NavigatingNotes { index: 0 };
        app.set_status(StatusKind::Info, "hello");

        app.switch_view(ListKind::Backlog);
        assert_eq!(app.cursor, 0);
        assert!(!app.show_note);
        assert_eq!(app.mode, Mode::Idle);
        assert!(app.status.is_none());
    }

    #[test]
    fn ui_state_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, Lists::default());
        app.switch_view(ListKind::Completed);
        app.show_all_notes = true;
        save_ui_state(&app);

        let mut restored = app_with(&dir, Lists::default());
        restore_ui_state(&mut restored);
        assert_eq!(restored.view, ListKind::Completed);
        assert!(restored.show_all_notes);
    }

    #[test]
    fn add_position_follows_config() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, Lists::default());
        assert_eq!(app.add_position(false), InsertPosition::Bottom);
        assert_eq!(app.add_position(true), InsertPosition::Top);
        app.add_to_top = true;
        assert_eq!(app.add_position(false), InsertPosition::Top);
        assert_eq!(app.add_position(true), InsertPosition::Bottom);
    }
}
