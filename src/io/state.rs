use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

const STATE_FILE: &str = ".stint_state.json";

/// Persisted TUI state (written to .stint_state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Which tab is showing ("backlog", "ready", "completed")
    pub view: String,
    /// Whether notes are expanded under every todo
    #[serde(default)]
    pub show_all_notes: bool,
}

/// Read the UI state from the data directory. Missing or malformed is `None`.
pub fn read_ui_state(data_dir: &Path) -> Option<UiState> {
    let path = data_dir.join(STATE_FILE);
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write the UI state to the data directory
pub fn write_ui_state(data_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = data_dir.join(STATE_FILE);
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
