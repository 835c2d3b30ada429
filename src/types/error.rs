//! Error types for roots-kit

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for roots-kit operations
#[derive(Debug, Error)]
pub enum KitError {
    /// The bundled template tree is not where the installation says it is
    #[error(".agent/ directory not found in package")]
    SourceMissing { path: PathBuf },

    /// Any filesystem failure while clearing, creating, listing or copying
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination is the template, inside it, or above it
    #[error("Destination overlaps the bundled template: {}", .path.display())]
    OverlappingRoots { path: PathBuf },
}

impl KitError {
    /// Wrap an io::Error with the path it happened on.
    ///
    /// Meant for `map_err`: `fs::create_dir_all(dest).map_err(KitError::at(dest))?`
    pub fn at(path: &Path) -> impl FnOnce(std::io::Error) -> KitError + '_ {
        move |source| KitError::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Check if this error means the installation is broken
    pub fn is_source_missing(&self) -> bool {
        matches!(self, KitError::SourceMissing { .. })
    }

    /// Check if this error came from the filesystem
    pub fn is_filesystem_error(&self) -> bool {
        matches!(self, KitError::Filesystem { .. })
    }

    /// Process exit status for this error. Every error is fatal.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Extra line shown under the error message, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            KitError::SourceMissing { path } => {
                Some(format!("Expected at: {}", path.display()))
            }
            KitError::Filesystem { .. } => None,
            KitError::OverlappingRoots { .. } => {
                Some("Run roots-kit from your project directory instead.".to_string())
            }
        }
    }
}
