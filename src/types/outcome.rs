//! Results reported by the synchronizer

use std::path::PathBuf;

/// Files written by a completed copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyResult {
    pub files_copied: u64,
}

/// What happened to a destination that was already there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationState {
    /// Nothing existed; the destination was created
    Absent,

    /// Existing destination was deleted before copying (force)
    Cleared,

    /// Existing destination was copied over in place (update)
    Kept,
}

/// Result of a sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Destination already existed and no overwrite mode was requested
    Skipped,

    /// Copy ran to completion
    Completed {
        result: CopyResult,
        prior: DestinationState,
    },
}

impl SyncOutcome {
    /// Number of files written, zero when skipped
    pub fn files_copied(&self) -> u64 {
        match self {
            SyncOutcome::Skipped => 0,
            SyncOutcome::Completed { result, .. } => result.files_copied,
        }
    }
}

/// Progress events emitted while syncing
#[derive(Debug)]
pub enum SyncEvent {
    /// Existing destination is about to be removed
    ClearingDestination { path: PathBuf },

    /// Existing destination will be copied over without deleting
    UpdatingDestination { path: PathBuf },

    /// Recursive copy is starting
    Copying { destination: PathBuf },

    /// One file written; `count` is the running total
    FileCopied { path: PathBuf, count: u64 },
}

/// Optional callback used to receive sync events.
pub type SyncCallback<'a> = dyn Fn(&SyncEvent) + 'a;
