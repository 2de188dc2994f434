/// Demo harness state
///
/// Selection toggling and the bounded event log behind the demo page.
/// Kept separate from the view so the rules are plain data in, data
/// out.

use chrono::{DateTime, Local};
use nodedeck_ui::CardKind;

/// Maximum number of entries the event log keeps.
pub const LOG_CAPACITY: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarnessState {
    selected: Option<usize>,
    log: Vec<String>,
}

impl HarnessState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the selected card, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Log entries, most recent first.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Records an activation of the card at `index`: toggles its
    /// selection and prepends a log entry, dropping the oldest entry
    /// once the log is full.
    pub fn activate(&mut self, index: usize, kind: CardKind, title: &str, at: DateTime<Local>) {
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        self.log.insert(0, log_entry(at, title, kind));
        self.log.truncate(LOG_CAPACITY);
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// One formatted log line, e.g. `[09:30:05] Clicked: 3 new nodes (info)`.
pub fn log_entry(at: DateTime<Local>, title: &str, kind: CardKind) -> String {
    format!("[{}] Clicked: {} ({})", at.format("%H:%M:%S"), title, kind)
}
