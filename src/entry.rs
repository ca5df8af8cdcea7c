//! Metadata snapshots and the permission/name rendering rules for one entry
//!
//! An `EntrySnapshot` is taken once per listed entry from a status query and
//! never mutated afterwards. Everything the formatters need to print a line is
//! derived from it here, so the rules can be tested without touching the disk.

use std::ffi::OsString;
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

const S_IXUSR: u32 = 0o100;

/// Permission bits in display order: owner, group, other × read, write, execute.
const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Mtime layout used by the long listing, e.g. `Mar 07 14:05`.
pub const MTIME_FORMAT: &str = "%b %d %H:%M";

/// File type as reported by the status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Unknown,
}

impl EntryKind {
    /// Decode the `S_IFMT` bits of a raw mode.
    pub fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFREG => EntryKind::Regular,
            S_IFDIR => EntryKind::Directory,
            S_IFLNK => EntryKind::Symlink,
            S_IFCHR => EntryKind::CharDevice,
            S_IFBLK => EntryKind::BlockDevice,
            S_IFIFO => EntryKind::Fifo,
            S_IFSOCK => EntryKind::Socket,
            _ => EntryKind::Unknown,
        }
    }

    /// Type character used by `TypeMarker::Exact`.
    fn marker(self) -> char {
        match self {
            EntryKind::Regular => '-',
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::CharDevice => 'c',
            EntryKind::BlockDevice => 'b',
            EntryKind::Fifo => 'p',
            EntryKind::Socket => 's',
            EntryKind::Unknown => '?',
        }
    }
}

/// How the first character of the permission string is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeMarker {
    /// `-` for regular files and `d` for everything else. Devices, pipes and
    /// sockets therefore show (and colour) as directories.
    #[default]
    Legacy,
    /// One character per real file type, `d` only for directories.
    Exact,
}

/// How an entry's name is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    Directory,
    Executable,
    Plain,
}

/// One entry's metadata, captured at listing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySnapshot {
    /// Name as returned by enumeration; not necessarily UTF-8.
    pub name: OsString,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

impl EntrySnapshot {
    /// Build a snapshot from the result of a status query on `path`.
    pub fn from_metadata(name: impl Into<OsString>, path: &Path, meta: &Metadata) -> Self {
        let modified = DateTime::from_timestamp(meta.mtime(), meta.mtime_nsec() as u32)
            .unwrap_or_default();
        Self {
            name: name.into(),
            path: path.to_path_buf(),
            kind: EntryKind::from_mode(meta.mode()),
            mode: meta.mode(),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            modified,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn permissions(&self, marker: TypeMarker) -> String {
        permissions_to_string(self.mode, marker)
    }

    pub fn name_style(&self, marker: TypeMarker) -> NameStyle {
        name_style(self.mode, marker)
    }
}

/// Render a raw mode as a 10-character `ls -l` style permission string.
pub fn permissions_to_string(mode: u32, marker: TypeMarker) -> String {
    let kind = EntryKind::from_mode(mode);
    let first = match marker {
        TypeMarker::Legacy if kind == EntryKind::Regular => '-',
        TypeMarker::Legacy => 'd',
        TypeMarker::Exact => kind.marker(),
    };

    let mut perms = String::with_capacity(10);
    perms.push(first);
    for (bit, c) in PERMISSION_BITS {
        perms.push(if mode & bit != 0 { c } else { '-' });
    }
    perms
}

/// Pick the name style: directories first, then owner-executable entries.
pub fn name_style(mode: u32, marker: TypeMarker) -> NameStyle {
    let shows_as_dir = match marker {
        TypeMarker::Legacy => EntryKind::from_mode(mode) != EntryKind::Regular,
        TypeMarker::Exact => EntryKind::from_mode(mode) == EntryKind::Directory,
    };
    if shows_as_dir {
        NameStyle::Directory
    } else if mode > 0 && mode & S_IXUSR != 0 {
        NameStyle::Executable
    } else {
        NameStyle::Plain
    }
}

/// Format a modification time for the long listing.
pub fn format_mtime<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(MTIME_FORMAT).to_string()
}
