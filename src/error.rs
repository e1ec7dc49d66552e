//! Failures that map to a distinct process exit code.
//!
//! Everything else travels as a plain `anyhow::Error` and exits with 1.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for filesystem and OS failures
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for usage errors (unknown version, bad arguments)
pub const EXIT_USAGE: u8 = 2;
/// Exit code when a switch left no active version behind
pub const EXIT_NO_ACTIVE: u8 = 3;

#[derive(Debug, Error)]
pub enum VgoError {
    #[error(
        "unknown go version: {requested}. List of available versions are: {}",
        available.join("/")
    )]
    UnknownVersion {
        requested: String,
        available: Vec<String>,
    },

    #[error("go path not found: {}", path.display())]
    MissingTarget { path: PathBuf },

    #[error(
        "you are trying to delete active version of go ({0}). Change the active version before deleting"
    )]
    ActiveVersion(String),

    #[error("unable to list versions in {}", path.display())]
    ListVersions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VgoError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownVersion { .. } | Self::ActiveVersion(_) => EXIT_USAGE,
            Self::MissingTarget { .. } => EXIT_NO_ACTIVE,
            Self::ListVersions { .. } => EXIT_FAILURE,
        }
    }
}

/// Resolve the exit code for any error coming out of a command
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<VgoError>())
        .map_or(EXIT_FAILURE, VgoError::exit_code)
}
