//! JSON output formatting
//!
//! Each directory level is written as one JSON object on its own line once
//! its entries are complete, so output can be consumed as a stream.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entry::{EntryKind, EntrySnapshot};
use crate::listing::ListingOutput;
use crate::owners::{OwnerLookup, SystemOwners};

use super::config::OutputConfig;

/// Serializable form of one listed entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord {
    pub name: String,
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub permissions: String,
    pub links: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// Serializable form of one directory level.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryRecord {
    pub path: PathBuf,
    pub entries: Vec<EntryRecord>,
}

/// Buffers one directory level at a time and writes it as a JSON line.
pub struct JsonFormatter<W: Write, L: OwnerLookup = SystemOwners> {
    config: OutputConfig,
    out: W,
    owners: L,
    current: Option<DirectoryRecord>,
}

impl JsonFormatter<io::Stdout> {
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self::with_owners(out, config, SystemOwners)
    }
}

impl<W: Write, L: OwnerLookup> JsonFormatter<W, L> {
    pub fn with_owners(out: W, config: OutputConfig, owners: L) -> Self {
        Self {
            config,
            out,
            owners,
            current: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, L: OwnerLookup> ListingOutput for JsonFormatter<W, L> {
    fn begin_directory(&mut self, path: &Path) -> io::Result<()> {
        self.current = Some(DirectoryRecord {
            path: path.to_path_buf(),
            entries: Vec::new(),
        });
        Ok(())
    }

    fn entry(&mut self, entry: &EntrySnapshot) -> io::Result<()> {
        let record = EntryRecord {
            name: entry.name.to_string_lossy().into_owned(),
            path: entry.path.clone(),
            kind: entry.kind,
            permissions: entry.permissions(self.config.type_marker),
            links: entry.nlink,
            owner: self.owners.owner_or_id(entry.uid),
            group: self.owners.group_or_id(entry.gid),
            size: entry.size,
            modified: entry.modified,
        };
        if let Some(dir) = self.current.as_mut() {
            dir.entries.push(record);
        }
        Ok(())
    }

    fn end_directory(&mut self, _path: &Path) -> io::Result<()> {
        if let Some(dir) = self.current.take() {
            serde_json::to_writer(&mut self.out, &dir).map_err(io::Error::other)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}
