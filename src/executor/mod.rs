//! Executor module for filesystem operations

pub mod copy;

use crate::config::Mode;
use crate::types::{CopyResult, DestinationState, KitError, SyncCallback, SyncEvent, SyncOutcome};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

pub use copy::copy_dir_recursive;

/// Mirror `source` into `dest` according to `mode`
///
/// | destination | Fresh   | Force             | Update        |
/// |-------------|---------|-------------------|---------------|
/// | absent      | copy    | copy              | copy          |
/// | exists      | skipped | delete, then copy | copy over it  |
///
/// A destination inside the source (or above it) is refused with
/// `OverlappingRoots` before anything is touched, unless the run would be
/// skipped anyway.
///
/// Failures are not rolled back: an error partway through leaves whatever
/// was already written in place.
pub fn sync(
    source: &Path,
    dest: &Path,
    mode: Mode,
    on_event: Option<&SyncCallback<'_>>,
) -> Result<SyncOutcome, KitError> {
    if !source.is_dir() {
        return Err(KitError::SourceMissing {
            path: source.to_path_buf(),
        });
    }

    let skipped = mode == Mode::Fresh && dest.exists();
    if !skipped && roots_overlap(source, dest) {
        return Err(KitError::OverlappingRoots {
            path: dest.to_path_buf(),
        });
    }

    let prior = if dest.exists() {
        match mode {
            Mode::Fresh => {
                log::info!("{} exists, nothing to do in {} mode", dest.display(), mode);
                return Ok(SyncOutcome::Skipped);
            }
            Mode::Force => {
                emit_event(
                    on_event,
                    SyncEvent::ClearingDestination {
                        path: dest.to_path_buf(),
                    },
                );
                remove_destination(dest)?;
                DestinationState::Cleared
            }
            Mode::Update => {
                emit_event(
                    on_event,
                    SyncEvent::UpdatingDestination {
                        path: dest.to_path_buf(),
                    },
                );
                DestinationState::Kept
            }
        }
    } else {
        DestinationState::Absent
    };

    emit_event(
        on_event,
        SyncEvent::Copying {
            destination: dest.to_path_buf(),
        },
    );
    let files_copied = copy_dir_recursive(source, dest, on_event)?;
    log::info!(
        "{} files {} to {} ({:?} destination)",
        files_copied,
        mode.verb(),
        dest.display(),
        prior
    );

    Ok(SyncOutcome::Completed {
        result: CopyResult { files_copied },
        prior,
    })
}

/// True when one directory contains the other, or both are the same.
///
/// `dest` may not exist yet; its deepest existing ancestor is resolved and the
/// missing components are appended.
pub fn roots_overlap(source: &Path, dest: &Path) -> bool {
    let (Ok(source), Some(dest)) = (fs::canonicalize(source), resolve_lenient(dest)) else {
        return false;
    };
    source.starts_with(&dest) || dest.starts_with(&source)
}

fn resolve_lenient(path: &Path) -> Option<PathBuf> {
    let mut missing: Vec<&OsStr> = Vec::new();
    let mut current = path;
    loop {
        if let Ok(resolved) = fs::canonicalize(current) {
            return Some(missing.iter().rev().fold(resolved, |acc, part| acc.join(part)));
        }
        missing.push(current.file_name()?);
        let parent = current.parent()?;
        current = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
    }
}

/// Remove whatever sits at `dest`. Symlinks are removed, never followed.
fn remove_destination(dest: &Path) -> Result<(), KitError> {
    let metadata = fs::symlink_metadata(dest).map_err(KitError::at(dest))?;
    log::info!("removing existing {}", dest.display());

    if metadata.is_dir() {
        fs::remove_dir_all(dest).map_err(KitError::at(dest))
    } else {
        fs::remove_file(dest).map_err(KitError::at(dest))
    }
}

fn emit_event(on_event: Option<&SyncCallback<'_>>, event: SyncEvent) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}
