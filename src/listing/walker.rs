//! DirectoryWalker - lists a level, then recurses into its subdirectories

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::EntrySnapshot;
use crate::error::WalkError;

use super::config::WalkerConfig;

/// Initial capacity of a level's subdirectory list.
const PENDING_INITIAL_CAPACITY: usize = 5;
/// Slots added each time the subdirectory list fills up.
const PENDING_GROWTH: usize = 5;

/// Receives the listing as it is produced.
pub trait ListingOutput {
    /// Called before any entry of `path` is listed.
    fn begin_directory(&mut self, path: &Path) -> io::Result<()>;

    fn entry(&mut self, entry: &EntrySnapshot) -> io::Result<()>;

    /// Called once every entry of `path` has been listed, before descending.
    fn end_directory(&mut self, path: &Path) -> io::Result<()>;

    /// An entry could not be read or queried and was left out of the listing.
    fn skipped(&mut self, path: &Path, error: &io::Error) -> io::Result<()> {
        eprintln!("lsr: cannot access '{}': {}", path.display(), error);
        Ok(())
    }
}

/// Counts gathered over one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Directories listed, including the starting one.
    pub directories: usize,
    /// Entries printed.
    pub entries: usize,
    /// Entries left out because they could not be read or queried.
    pub skipped: usize,
}

/// Depth-first walker that prints each directory level before its children.
pub struct DirectoryWalker {
    config: WalkerConfig,
}

impl DirectoryWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and stream the listing to `output`.
    ///
    /// Stops at the first directory that cannot be opened; the error unwinds
    /// through every level still in progress.
    pub fn walk<O: ListingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkSummary, WalkError> {
        let mut summary = WalkSummary::default();
        self.walk_dir(root, 0, output, &mut summary)?;
        Ok(summary)
    }

    fn walk_dir<O: ListingOutput>(
        &self,
        dir: &Path,
        depth: usize,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<(), WalkError> {
        output.begin_directory(dir)?;
        summary.directories += 1;

        let entries = fs::read_dir(dir).map_err(|source| WalkError::OpenDir {
            path: dir.to_path_buf(),
            source,
        })?;

        // Owned by this level only; dropped once its recursion returns.
        let mut pending: Vec<PathBuf> = Vec::with_capacity(PENDING_INITIAL_CAPACITY);

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    summary.skipped += 1;
                    output.skipped(dir, &e)?;
                    continue;
                }
            };

            let name = entry.file_name();
            if matches!(name.to_str(), Some(".") | Some("..")) {
                continue;
            }

            let path = dir.join(&name);

            // Follows symlinks, so a link to a directory is descended into.
            let meta = match fs::metadata(&path) {
                Ok(meta) => meta,
                Err(e) => {
                    summary.skipped += 1;
                    output.skipped(&path, &e)?;
                    continue;
                }
            };

            let snapshot = EntrySnapshot::from_metadata(name, &path, &meta);
            output.entry(&snapshot)?;
            summary.entries += 1;

            if snapshot.is_dir() {
                if pending.len() == pending.capacity() {
                    pending
                        .try_reserve_exact(PENDING_GROWTH)
                        .map_err(|source| WalkError::PendingGrowth {
                            path: dir.to_path_buf(),
                            source,
                        })?;
                }
                pending.push(path);
            }
        }

        output.end_directory(dir)?;

        if self.config.at_max_depth(depth) {
            return Ok(());
        }

        for subdir in pending {
            self.walk_dir(&subdir, depth + 1, output, summary)?;
        }

        Ok(())
    }
}
