//! lsr - recursive long-format directory listing

pub mod entry;
pub mod error;
pub mod listing;
pub mod output;
pub mod owners;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{EntryKind, EntrySnapshot, NameStyle, TypeMarker, permissions_to_string};
pub use error::WalkError;
pub use listing::{DirectoryWalker, ListingOutput, WalkSummary, WalkerConfig};
pub use output::{JsonFormatter, LongFormatter, OutputConfig};
pub use owners::{OwnerLookup, SystemOwners};
