//! Console text for each stage of a run

use crate::config::{Mode, AGENT_DIR};
use crate::types::KitError;
use console::style;
use std::path::Path;

/// Slash commands the copied agents provide
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/create", "Create features for Bedrock/Radicle"),
    ("/debug", "Systematic WordPress debugging"),
    ("/deploy", "Deploy via Trellis or Mina"),
    ("/enhance", "Improve existing code"),
    ("/plan", "Task breakdown & roadmap"),
    ("/status", "Project health check"),
    ("/test", "Run PestPHP / PHPUnit tests"),
    ("/brainstorm", "Discovery & ideation"),
];

pub fn banner() -> String {
    format!(
        "\n  {}\n  {}\n",
        style("🌱 Roots Kit — AI Agent Army for Roots.io").bold(),
        style("16 agents · 18 skills · 8 workflows").dim()
    )
}

/// Shown when the destination exists and neither flag was given
pub fn already_exists() -> String {
    format!(
        "  {}\n\n  Run {} to update files in place.\n  Run {} to overwrite everything.\n",
        style(format!("⚠ {AGENT_DIR}/ already exists in this directory.")).yellow(),
        style("roots-kit --update").bold(),
        style("roots-kit --force").bold()
    )
}

pub fn clearing() -> String {
    format!(
        "  {}",
        style(format!("⚠ Overwriting existing {AGENT_DIR}/ directory...")).yellow()
    )
}

pub fn updating() -> String {
    format!(
        "  {}",
        style(format!("↻ Updating existing {AGENT_DIR}/ directory...")).yellow()
    )
}

pub fn copying_to(destination: &Path) -> String {
    format!(
        "  {}",
        style(format!("→ Copying to {}", destination.display())).dim()
    )
}

/// Summary line after a completed copy
pub fn done(files: u64, mode: Mode) -> String {
    let verb = mode.verb();
    format!(
        "\n  {}\n",
        style(format!("✓ Done! {files} files {verb} to {AGENT_DIR}/")).green()
    )
}

/// Follow-on hints listing the slash commands
pub fn next_steps() -> String {
    let mut lines = vec![format!(
        "  {}",
        style("Your AI agents are ready. Available slash commands:").dim()
    )];
    for (command, description) in SLASH_COMMANDS {
        // pad before styling so escape codes don't skew the column
        lines.push(format!(
            "    {} {}",
            style(format!("{command:<11}")).bold(),
            description
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Error block for stderr
pub fn error(err: &KitError) -> String {
    format_error(&err.to_string(), err.hint().as_deref())
}

/// Error block for failures that happen outside the synchronizer
pub fn format_error(message: &str, hint: Option<&str>) -> String {
    let mut out = format!(
        "  {}",
        style(format!("✗ Error: {message}")).red().for_stderr()
    );
    if let Some(hint) = hint {
        out.push_str(&format!("\n    {}", style(hint).dim().for_stderr()));
    }
    out
}
