use chrono::{DateTime, Local, TimeZone};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::store::Store;
use crate::model::{Config, Lists, StoreConfig, Todo};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A store in a temporary directory that lives as long as the fixture
pub struct AppFixture {
    pub dir: TempDir,
}

impl AppFixture {
    pub fn new() -> Self {
        AppFixture {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn app(&self) -> App {
        self.app_with(Lists::default())
    }

    pub fn app_with(&self, lists: Lists) -> App {
        let store = Store::new(self.dir.path(), &StoreConfig::default());
        App::new(store, lists, &Config::default())
    }
}

/// Fixed creation time: Jan 2 2025, 15:04 local
pub fn created() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 1, 2, 15, 4, 0).unwrap()
}

pub fn todo(text: &str) -> Todo {
    Todo::new(text.into(), created())
}

pub fn completed_todo(text: &str, at: DateTime<Local>) -> Todo {
    let mut t = todo(text);
    t.completed_at = Some(at);
    t
}
