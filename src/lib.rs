//! # roots-kit - AI agent configuration for Roots.io projects
//!
//! Copies the bundled `.agent/` template into the current project.
//! Without flags an existing `.agent/` is left untouched; `--force` deletes
//! and recreates it, `--update` copies over it in place.

// Module declarations
pub mod config;
pub mod executor;
pub mod ui;
pub mod commands;
pub mod types;

// Re-export commonly used types
pub use types::{CopyResult, KitError, SyncOutcome};
pub use config::{Config, Mode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
