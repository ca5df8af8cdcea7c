//! Listing formatters
//!
//! - `long` - the `ls -lR` style text listing, optionally coloured
//! - `json` - one JSON document per directory level
//!
//! Both implement `ListingOutput` and receive entries from `DirectoryWalker`
//! as they are read.

mod config;
mod json;
mod long;

pub use config::OutputConfig;
pub use json::{DirectoryRecord, EntryRecord, JsonFormatter};
pub use long::LongFormatter;
