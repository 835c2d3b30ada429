//! Mode - collision policy for an existing destination

use std::fmt;

/// What to do when the destination already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Leave an existing destination alone
    #[default]
    Fresh,

    /// Delete the existing destination, then copy
    Force,

    /// Copy over the existing destination without deleting
    Update,
}

impl Mode {
    /// Combine the two flags. Force takes precedence over update.
    pub fn resolve(force: bool, update: bool) -> Self {
        if force {
            Mode::Force
        } else if update {
            Mode::Update
        } else {
            Mode::Fresh
        }
    }

    /// Past-tense verb for the summary line
    pub fn verb(&self) -> &'static str {
        match self {
            Mode::Fresh | Mode::Force => "copied",
            Mode::Update => "updated",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Fresh => "fresh",
            Mode::Force => "force",
            Mode::Update => "update",
        };
        f.write_str(name)
    }
}
