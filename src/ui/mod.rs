//! Terminal output

pub mod messages;
pub mod progress;

pub use progress::ProgressReporter;
