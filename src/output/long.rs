//! Long-format text listing
//!
//! Writes one `<path>:` header per directory, one line per entry, and a blank
//! line after each directory's entries:
//!
//! ```text
//! ./src:
//! -rw-r--r-- 1 alice staff 2048       Mar 07 14:05 main.rs
//!
//! ```

use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use chrono::Local;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::entry::{EntrySnapshot, NameStyle, format_mtime};
use crate::listing::ListingOutput;
use crate::owners::{OwnerLookup, SystemOwners};

use super::config::OutputConfig;

const BOLD_BLUE: &[u8] = b"\x1b[1;34m";
const BOLD_GREEN: &[u8] = b"\x1b[1;32m";
const RESET: &[u8] = b"\x1b[0m";

/// Streams the long listing to a colour-capable writer.
pub struct LongFormatter<W: WriteColor, L: OwnerLookup = SystemOwners> {
    config: OutputConfig,
    out: W,
    owners: L,
}

impl LongFormatter<StandardStream> {
    /// Formatter writing to stdout, resolving owners from the system databases.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), config)
    }
}

impl<W: WriteColor> LongFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self::with_owners(out, config, SystemOwners)
    }
}

impl<W: WriteColor, L: OwnerLookup> LongFormatter<W, L> {
    pub fn with_owners(out: W, config: OutputConfig, owners: L) -> Self {
        Self {
            config,
            out,
            owners,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Combined bold + colour SGR sequence for a styled name.
    fn name_sgr(style: NameStyle) -> Option<&'static [u8]> {
        match style {
            NameStyle::Directory => Some(BOLD_BLUE),
            NameStyle::Executable => Some(BOLD_GREEN),
            NameStyle::Plain => None,
        }
    }

    fn write_name(&mut self, entry: &EntrySnapshot) -> io::Result<()> {
        let style = entry.name_style(self.config.type_marker);
        let colored = self.config.use_color && self.out.supports_color();
        match Self::name_sgr(style) {
            Some(sgr) if colored => {
                self.out.write_all(sgr)?;
                self.out.write_all(entry.name.as_bytes())?;
                self.out.write_all(RESET)?;
            }
            _ => self.out.write_all(entry.name.as_bytes())?,
        }
        Ok(())
    }
}

impl<W: WriteColor, L: OwnerLookup> ListingOutput for LongFormatter<W, L> {
    fn begin_directory(&mut self, path: &Path) -> io::Result<()> {
        // Raw bytes, so names that are not UTF-8 print unchanged
        self.out.write_all(path.as_os_str().as_bytes())?;
        self.out.write_all(b":\n")
    }

    fn entry(&mut self, entry: &EntrySnapshot) -> io::Result<()> {
        write!(
            self.out,
            "{} {} {} {} {:<10} {} ",
            entry.permissions(self.config.type_marker),
            entry.nlink,
            self.owners.owner_or_id(entry.uid),
            self.owners.group_or_id(entry.gid),
            entry.size,
            format_mtime(&entry.modified.with_timezone(&Local)),
        )?;
        self.write_name(entry)?;
        writeln!(self.out)
    }

    fn end_directory(&mut self, _path: &Path) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}
