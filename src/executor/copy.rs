//! Recursive directory copy

use crate::types::{KitError, SyncCallback, SyncEvent};
use std::fs;
use std::path::Path;

/// Copy every file under `src` into `dest`, recreating the directory layout
///
/// `dest` (and any missing parents) is created first. Entries are visited in
/// whatever order the directory listing returns them. Existing files at the
/// destination are overwritten; files that exist only in `dest` are left alone.
/// Anything that is not a directory is copied as a file, so symlinks are
/// followed for their content.
///
/// # Returns
/// * `Ok(u64)` - Number of files written
/// * `Err(KitError)` - First filesystem failure; earlier writes are kept
///
/// # Example
/// ```no_run
/// use roots_kit::executor::copy_dir_recursive;
/// use std::path::Path;
///
/// let files = copy_dir_recursive(Path::new(".agent"), Path::new("/tmp/.agent"), None)?;
/// println!("{files} files");
/// # Ok::<(), roots_kit::KitError>(())
/// ```
pub fn copy_dir_recursive(
    src: &Path,
    dest: &Path,
    on_event: Option<&SyncCallback<'_>>,
) -> Result<u64, KitError> {
    let mut count = 0u64;
    copy_into(src, dest, &mut count, on_event)?;
    Ok(count)
}

fn copy_into(
    src: &Path,
    dest: &Path,
    count: &mut u64,
    on_event: Option<&SyncCallback<'_>>,
) -> Result<(), KitError> {
    fs::create_dir_all(dest).map_err(KitError::at(dest))?;

    for entry in fs::read_dir(src).map_err(KitError::at(src))? {
        let entry = entry.map_err(KitError::at(src))?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(KitError::at(&src_path))?;

        if file_type.is_dir() {
            copy_into(&src_path, &dest_path, count, on_event)?;
            continue;
        }

        fs::copy(&src_path, &dest_path).map_err(KitError::at(&dest_path))?;
        *count += 1;
        log::debug!("copied {} -> {}", src_path.display(), dest_path.display());

        if let Some(callback) = on_event {
            callback(&SyncEvent::FileCopied {
                path: dest_path,
                count: *count,
            });
        }
    }

    Ok(())
}
