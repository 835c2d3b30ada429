//! Main init command

use crate::executor::sync;
use crate::types::{KitError, SyncEvent, SyncOutcome};
use crate::ui::{messages, ProgressReporter};
use crate::Config;

/// Run the init operation
pub fn run(config: &Config) -> Result<SyncOutcome, KitError> {
    run_with(config, &ProgressReporter::new())
}

/// Run the init operation with a caller-supplied progress reporter
pub fn run_with(config: &Config, reporter: &ProgressReporter) -> Result<SyncOutcome, KitError> {
    println!("{}", messages::banner());
    config.validate()?;
    log::debug!(
        "syncing {} -> {} ({} mode)",
        config.source.display(),
        config.destination.display(),
        config.mode
    );

    let on_event = |event: &SyncEvent| match event {
        SyncEvent::ClearingDestination { .. } => println!("{}", messages::clearing()),
        SyncEvent::UpdatingDestination { .. } => println!("{}", messages::updating()),
        SyncEvent::Copying { destination } => {
            println!("{}", messages::copying_to(destination));
            reporter.handle(event);
        }
        SyncEvent::FileCopied { .. } => reporter.handle(event),
    };

    let result = sync(
        &config.source,
        &config.destination,
        config.mode,
        Some(&on_event),
    );
    reporter.finish();
    let outcome = result?;

    match outcome {
        SyncOutcome::Skipped => println!("{}", messages::already_exists()),
        SyncOutcome::Completed { result, .. } => {
            println!("{}", messages::done(result.files_copied, config.mode));
            println!("{}", messages::next_steps());
        }
    }

    Ok(outcome)
}
