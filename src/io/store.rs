use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use tempfile::NamedTempFile;

use crate::model::config::StoreConfig;
use crate::model::list::{ListKind, Lists};
use crate::model::todo::Todo;
use crate::parse::{parse_records, serialize_records};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("could not encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Newline-delimited JSON stores, one file per list, rooted at a data directory.
///
/// The store never keeps a copy of the lists; callers pass the list to save.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
    prefix: String,
    extension: String,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>, config: &StoreConfig) -> Self {
        Store {
            dir: dir.into(),
            prefix: config.prefix.clone(),
            extension: config.extension.clone(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding a list, e.g. `todo_ready.txt`
    pub fn path_for(&self, kind: ListKind) -> PathBuf {
        self.dir.join(format!(
            "{}_{}.{}",
            self.prefix,
            kind.store_suffix(),
            self.extension
        ))
    }

    fn backup_prefix(&self) -> String {
        format!(
            "{}_{}_backup_",
            self.prefix,
            ListKind::Completed.store_suffix()
        )
    }

    /// Backup file name for a given day and record count
    pub fn backup_path(&self, day: NaiveDate, count: usize) -> PathBuf {
        self.dir.join(format!(
            "{}{}_{}.{}",
            self.backup_prefix(),
            day.format("%Y-%m-%d"),
            count,
            self.extension
        ))
    }

    /// Markdown export file for a given day
    pub fn export_path(&self, day: NaiveDate) -> PathBuf {
        self.dir.join(format!(
            "{}_{}_export_{}.md",
            self.prefix,
            ListKind::Completed.store_suffix(),
            day.format("%Y-%m-%d")
        ))
    }

    /// Load one list. A missing store is an empty list.
    pub fn load(&self, kind: ListKind, now: DateTime<Local>) -> Result<Vec<Todo>, StoreError> {
        load_path(&self.path_for(kind), now)
    }

    /// Load all three lists.
    pub fn load_all(&self, now: DateTime<Local>) -> Result<Lists, StoreError> {
        Ok(Lists {
            backlog: self.load(ListKind::Backlog, now)?,
            ready: self.load(ListKind::Ready, now)?,
            completed: self.load(ListKind::Completed, now)?,
        })
    }

    /// Replace a list's store with the given contents, atomically.
    pub fn save(&self, kind: ListKind, todos: &[Todo]) -> Result<(), StoreError> {
        save_path(&self.path_for(kind), todos)
    }

    /// Archive a list to a dated backup store. Returns the backup's path.
    ///
    /// The same day and count map to the same file, which is overwritten.
    pub fn backup(&self, todos: &[Todo], today: NaiveDate) -> Result<PathBuf, StoreError> {
        let path = self.backup_path(today, todos.len());
        if path.exists() {
            tracing::warn!(path = %path.display(), "overwriting existing backup");
        }
        save_path(&path, todos)?;
        tracing::info!(path = %path.display(), count = todos.len(), "backed up completed todos");
        Ok(path)
    }

    /// All backup stores in the data directory, sorted by name.
    pub fn backup_paths(&self) -> Result<Vec<PathBuf>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.dir.clone(),
                    source: e,
                });
            }
        };

        let prefix = self.backup_prefix();
        let suffix = format!(".{}", self.extension);
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix) && n.ends_with(&suffix))
            })
            .collect();
        paths.sort();
        Ok(paths)
    }

    /// Every record from every backup store, in file order.
    pub fn load_backups(&self, now: DateTime<Local>) -> Result<Vec<Todo>, StoreError> {
        let mut todos = Vec::new();
        for path in self.backup_paths()? {
            todos.extend(load_path(&path, now)?);
        }
        Ok(todos)
    }
}

fn load_path(path: &Path, now: DateTime<Local>) -> Result<Vec<Todo>, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store missing, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let content = String::from_utf8_lossy(&bytes);
    if matches!(content, Cow::Owned(_)) {
        tracing::warn!(path = %path.display(), "store is not valid UTF-8, replaced bad bytes");
    }

    let (todos, plain) = parse_records(&content, now);
    if !plain.is_empty() {
        tracing::warn!(
            path = %path.display(),
            lines = ?plain,
            "read lines as plain-text todos"
        );
    }
    tracing::debug!(path = %path.display(), count = todos.len(), "loaded store");
    Ok(todos)
}

fn save_path(path: &Path, todos: &[Todo]) -> Result<(), StoreError> {
    let content = serialize_records(todos)?;
    atomic_write(path, content.as_bytes()).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "store write failed");
        StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    tracing::debug!(path = %path.display(), count = todos.len(), "saved store");
    Ok(())
}
