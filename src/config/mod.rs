//! Configuration management

mod mode;

pub use mode::Mode;

use super::executor::roots_overlap;
use super::types::KitError;
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name of the template directory, both in the package and in the target project
pub const AGENT_DIR: &str = ".agent";

pub const FORCE_FLAG: &str = "--force";
pub const UPDATE_FLAG: &str = "--update";

const PROGRAM_NAME: &str = "roots-kit";

/// Tokens handed to clap; everything else on the command line is dropped.
const RECOGNIZED_ARGS: &[&str] = &[FORCE_FLAG, UPDATE_FLAG, "-h", "--help", "-V", "--version"];

/// Command line interface
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Copy the Roots Kit agent configuration (.agent/) into the current directory",
    args_override_self = true,
    after_help = "With both flags, --force wins and the summary reports files as copied."
)]
pub struct Cli {
    /// Delete an existing .agent/ and copy everything fresh
    #[arg(long)]
    pub force: bool,

    /// Copy over an existing .agent/ without deleting files first
    #[arg(long)]
    pub update: bool,
}

impl Cli {
    /// Parse arguments, silently ignoring anything that is not a known flag.
    ///
    /// The first item is the program name, as with `std::env::args_os()`.
    /// Repeating a flag is the same as giving it once.
    /// Help and version requests come back as `clap::Error`; call `exit()` on it.
    pub fn try_parse_permissive<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from(PROGRAM_NAME));

        let mut known: Vec<OsString> = Vec::new();
        for arg in args.filter(is_recognized) {
            if !known.contains(&arg) {
                known.push(arg);
            }
        }

        Cli::try_parse_from(std::iter::once(program).chain(known))
    }

    /// Resolved operating mode
    pub fn mode(&self) -> Mode {
        Mode::resolve(self.force, self.update)
    }
}

fn is_recognized(arg: &OsString) -> bool {
    arg.to_str().is_some_and(|a| RECOGNIZED_ARGS.contains(&a))
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bundled template directory
    pub source: PathBuf,

    /// `.agent` inside the working directory
    pub destination: PathBuf,

    /// Collision policy
    pub mode: Mode,
}

impl Config {
    pub fn new(cli: &Cli, working_dir: &Path, source: PathBuf) -> Self {
        Self {
            source,
            destination: working_dir.join(AGENT_DIR),
            mode: cli.mode(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), KitError> {
        // Ensure source exists
        if !self.source.is_dir() {
            return Err(KitError::SourceMissing {
                path: self.source.clone(),
            });
        }

        // Copying into (or clearing above) the template would corrupt it
        let skipped = self.mode == Mode::Fresh && self.destination.exists();
        if !skipped && roots_overlap(&self.source, &self.destination) {
            return Err(KitError::OverlappingRoots {
                path: self.destination.clone(),
            });
        }

        Ok(())
    }
}

/// Find the bundled template for the executable at `exe_path`.
///
/// Candidates, first existing wins:
/// 1. `<exe_dir>/.agent`
/// 2. `<exe_dir>/../.agent` (installed layout, `bin/` next to `.agent/`)
/// 3. `.agent` in the crate directory this binary was built from
///
/// When none exist, candidate 2 is returned so the error can name it.
pub fn locate_source_root(exe_path: &Path) -> PathBuf {
    let exe_dir = exe_path.parent().unwrap_or_else(|| Path::new("."));
    let installed = exe_dir
        .parent()
        .map(|prefix| prefix.join(AGENT_DIR))
        .unwrap_or_else(|| exe_dir.join(AGENT_DIR));

    let candidates = [
        exe_dir.join(AGENT_DIR),
        installed.clone(),
        Path::new(env!("CARGO_MANIFEST_DIR")).join(AGENT_DIR),
    ];

    for candidate in candidates {
        if candidate.is_dir() {
            log::debug!("using template at {}", candidate.display());
            return candidate;
        }
        log::debug!("no template at {}", candidate.display());
    }

    installed
}
