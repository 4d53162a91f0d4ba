//! Sequential `ustar` archive traversal.
//!
//! An archive is a series of 512-byte header records, each followed by its
//! payload padded to a whole number of blocks. A header with an empty name
//! terminates the member list, and the file should end with two zero blocks.
//!
//! ## Architecture
//!
//! - [`header`]: decodes and validates one header record
//! - [`block`]: block padding arithmetic
//! - [`filter`]: the consume-once set of requested member names
//! - [`transfer`]: copies or skips member payloads
//! - [`walker`]: drives the header, select, transfer loop
//! - [`trailer`]: unmatched-name and trailing zero block checks
//!
//! ## Limitations
//!
//! - Only regular files (`typeflag '0'`); any other member type is fatal
//! - Only the GNU `"ustar  \0"` magic is accepted
//! - No `prefix` long names, GNU/pax extensions, sparse files or compression
//! - Permissions and ownership are not restored

pub mod block;
pub mod filter;
pub mod header;
pub mod trailer;
pub mod transfer;
pub mod walker;

#[doc(hidden)]
pub mod testutil;

pub use block::{BLOCK_SIZE, padded_size};
pub use filter::MemberFilter;
pub use header::{HeaderRecord, Record, parse_header};
pub use walker::{ArchiveWalker, WalkSummary};

use std::fmt;
use std::io::{self, Write};

use crate::PROGRAM_NAME;

/// Write a `warnx`-style diagnostic line and flush it.
pub(crate) fn warn<D: Write>(diag: &mut D, message: fmt::Arguments<'_>) -> io::Result<()> {
    writeln!(diag, "{PROGRAM_NAME}: {message}")?;
    diag.flush()
}
