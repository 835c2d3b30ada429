//! Progress reporting

use crate::types::SyncEvent;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Spinner showing the running file count while the template is copied
pub struct ProgressReporter {
    copy_bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new_spinner())
    }

    /// Reporter that never draws, for tests and non-interactive use
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(copy_bar: ProgressBar) -> Self {
        if let Ok(style) = ProgressStyle::with_template("  {spinner} {msg}") {
            copy_bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        Self { copy_bar }
    }

    /// React to a synchronizer event
    pub fn handle(&self, event: &SyncEvent) {
        match event {
            SyncEvent::Copying { .. } => self.start_copy(),
            SyncEvent::FileCopied { path, count } => self.file_copied(path, *count),
            SyncEvent::ClearingDestination { .. } | SyncEvent::UpdatingDestination { .. } => {}
        }
    }

    /// Mark start of the copy phase.
    pub fn start_copy(&self) {
        self.copy_bar.enable_steady_tick(Duration::from_millis(120));
        self.copy_bar.set_message("Copying...".to_string());
    }

    /// Update the running count with the file just written.
    pub fn file_copied(&self, path: &Path, count: u64) {
        self.copy_bar.set_position(count);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.copy_bar
            .set_message(format!("{} files | {}", count, name));
    }

    /// Remove the spinner so the summary prints on a clean line.
    pub fn finish(&self) {
        self.copy_bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
