//! # tarwalk
//!
//! A sequential reader for `ustar` tar archives.
//!
//! The archive is walked once from front to back: each 512-byte header is
//! validated, matched against an optional set of requested member names, and
//! its payload is either copied to disk or skipped. Once the terminator is
//! reached the unmatched names are reported and the archive tail is checked
//! for its two zero blocks.
//!
//! ## Features
//!
//! - List member names (`-t`)
//! - Extract regular files into a directory (`-x`)
//! - Restrict either operation to explicitly named members
//! - Detect truncated archives and keep a best-effort partial extraction
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use tarwalk::{ArchiveWalker, Config, LocalFileReader, Mode};
//!
//! fn main() -> anyhow::Result<()> {
//!     let reader = LocalFileReader::new(Path::new("archive.tar"))?;
//!     let config = Config::new(Mode::List);
//!
//!     let mut names = Vec::new();
//!     let mut diagnostics = Vec::new();
//!     ArchiveWalker::new(reader, &config, &mut names, &mut diagnostics).run()?;
//!
//!     print!("{}", String::from_utf8_lossy(&names));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod tar;

pub use cli::Cli;
pub use config::{Config, Mode};
pub use error::TarError;
pub use io::{ArchiveStream, LocalFileReader, MemoryReader, ReadAt};
pub use tar::{ArchiveWalker, HeaderRecord, MemberFilter, Record, WalkSummary};

/// Name used as the prefix of every diagnostic line.
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Exit status for every fatal condition.
pub const EXIT_TAR_FAILURE: u8 = 2;
