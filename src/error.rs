use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a walk. Per-entry status query failures are not errors;
/// they are reported through `ListingOutput::skipped` and the walk continues.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("cannot open directory '{}': {source}", path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot grow subdirectory list for '{}': {source}", path.display())]
    PendingGrowth {
        path: PathBuf,
        #[source]
        source: TryReserveError,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl WalkError {
    /// The directory being listed when the walk failed, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::OpenDir { path, .. } | Self::PendingGrowth { path, .. } => Some(path),
            Self::Output(_) => None,
        }
    }

    /// The reader of our output went away (e.g. `lsr | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
