//! Recursive directory listing
//!
//! `DirectoryWalker` lists one directory level in full, then descends into the
//! subdirectories it found, in the order it found them. Output is streamed to a
//! `ListingOutput` as the walk progresses, so memory use is bounded by the
//! depth of the tree times the width of each level's subdirectory list.

mod config;
mod walker;

pub use config::WalkerConfig;
pub use walker::{DirectoryWalker, ListingOutput, WalkSummary};
