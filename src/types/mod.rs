//! Core type definitions for roots-kit

mod error;
mod outcome;

pub use error::KitError;
pub use outcome::{CopyResult, DestinationState, SyncCallback, SyncEvent, SyncOutcome};
