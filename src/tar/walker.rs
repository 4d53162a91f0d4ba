//! The archive walk.
//!
//! Each iteration reads one header, asks the [`MemberFilter`] whether the
//! member is wanted, and then either transfers the payload or skips over it.
//! The loop ends at the terminator record or when less than a full record is
//! left. The trailer checks then run over the whole archive.
//!
//! Format errors, I/O errors and truncation stop the walk immediately. A
//! member whose output file cannot be created is reported and skipped.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use log::debug;

use super::block::block_count;
use super::header::{HeaderRecord, Record, parse_header};
use super::trailer::{lone_zero_block, report_unmatched};
use super::transfer::{copy_payload, dump_remaining, skip_payload};
use super::{MemberFilter, warn};
use crate::config::{Config, Mode};
use crate::error::TarError;
use crate::io::{ArchiveStream, ReadAt};

/// Counters for a completed walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Member headers read
    pub members: u64,
    /// Members accepted by the filter
    pub selected: u64,
    /// Payload bytes written to disk
    pub extracted_bytes: u64,
}

/// Single forward pass over an archive.
///
/// Member names are written to `out`, one per line, flushed as soon as each
/// header is accepted. Warnings go to `diag`.
pub struct ArchiveWalker<'a, R: ReadAt, O: Write, D: Write> {
    stream: ArchiveStream<R>,
    filter: MemberFilter,
    config: &'a Config,
    out: O,
    diag: D,
    summary: WalkSummary,
}

impl<'a, R: ReadAt, O: Write, D: Write> ArchiveWalker<'a, R, O, D> {
    pub fn new(reader: R, config: &'a Config, out: O, diag: D) -> Self {
        Self {
            stream: ArchiveStream::new(reader),
            filter: MemberFilter::new(config.members.iter().cloned()),
            config,
            out,
            diag,
            summary: WalkSummary::default(),
        }
    }

    /// Walk the archive to the end.
    ///
    /// Returns [`TarError::NotFound`] if any requested name never matched,
    /// after every member that did match has been handled.
    pub fn run(mut self) -> Result<WalkSummary, TarError> {
        debug!(
            "walking {} byte archive, mode {:?}, {} requested name(s)",
            self.stream.size(),
            self.config.mode,
            self.filter.remaining().len()
        );

        while let Some(header) = self.next_header()? {
            self.process(header)?;
        }

        self.finalize()
    }

    fn next_header(&mut self) -> Result<Option<HeaderRecord>, TarError> {
        let offset = self.stream.position();
        let Some(block) = self.stream.read_block()? else {
            debug!("no full record at offset {offset}, stopping");
            return Ok(None);
        };

        match parse_header(&block, block_count(offset)) {
            Ok(Record::Header(header)) => {
                debug!("header at offset {offset}: {} ({} bytes)", header.name, header.size);
                Ok(Some(header))
            }
            Ok(Record::EndOfArchive) => {
                debug!("end of archive record at offset {offset}");
                Ok(None)
            }
            Err(err @ TarError::BadMagic { .. }) => {
                self.warn(format_args!("This does not look like a tar archive"))?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    fn process(&mut self, header: HeaderRecord) -> Result<(), TarError> {
        self.summary.members += 1;

        let selected = self.filter.is_selected(&header.name);
        if selected {
            self.summary.selected += 1;
            self.announce(&header.name)?;
        }

        let padded_size = header.padded_size();
        if !selected {
            skip_payload(&mut self.stream, padded_size);
            return Ok(());
        }

        if self.stream.remaining() < padded_size {
            return self.truncated(header);
        }

        match self.config.mode {
            Mode::List => {
                skip_payload(&mut self.stream, padded_size);
                Ok(())
            }
            Mode::Extract => self.extract(&header),
        }
    }

    fn announce(&mut self, name: &str) -> io::Result<()> {
        if self.config.mode == Mode::List || self.config.verbose {
            writeln!(self.out, "{name}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn extract(&mut self, header: &HeaderRecord) -> Result<(), TarError> {
        let padded_size = header.padded_size();
        let Some(mut file) = self.create_destination(&header.name)? else {
            skip_payload(&mut self.stream, padded_size);
            return Ok(());
        };

        copy_payload(&mut self.stream, &mut file, header.size, padded_size)?;
        file.flush()?;
        self.summary.extracted_bytes += header.size;
        Ok(())
    }

    /// The member claims more bytes than the archive has left.
    ///
    /// When extracting, whatever is left is still written out before the
    /// walk is abandoned.
    fn truncated(&mut self, header: HeaderRecord) -> Result<(), TarError> {
        self.warn(format_args!("Unexpected EOF in archive"))?;

        if self.config.mode == Mode::Extract
            && let Some(mut file) = self.create_destination(&header.name)?
        {
            let written = dump_remaining(&mut self.stream, &mut file)?;
            file.flush()?;
            debug!("{}: kept {} of {} bytes", header.name, written, header.size);
        }

        Err(TarError::Truncated { name: header.name })
    }

    /// Open the output file for `name`, truncating any existing file.
    ///
    /// Returns `None` after warning if it cannot be created.
    fn create_destination(&mut self, name: &str) -> io::Result<Option<BufWriter<File>>> {
        let created = match destination_path(&self.config.output_dir, name) {
            Some(path) => File::create(path),
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "path leads outside the output directory",
            )),
        };

        match created {
            Ok(file) => Ok(Some(BufWriter::new(file))),
            Err(e) => {
                self.warn(format_args!("{name}: Cannot create file: {e}"))?;
                Ok(None)
            }
        }
    }

    fn finalize(mut self) -> Result<WalkSummary, TarError> {
        let unmatched = report_unmatched(&mut self.filter, &mut self.diag)?;

        if let Some(at) = lone_zero_block(&self.stream)? {
            self.warn(format_args!("A lone zero block at {at}"))?;
        }

        if unmatched > 0 {
            return Err(TarError::NotFound { count: unmatched });
        }

        debug!("walk complete: {:?}", self.summary);
        Ok(self.summary)
    }

    fn warn(&mut self, message: fmt::Arguments<'_>) -> io::Result<()> {
        warn(&mut self.diag, message)
    }
}

/// Join a member name onto the output directory.
///
/// Absolute names and names containing `..` are refused.
fn destination_path(dir: &Path, name: &str) -> Option<PathBuf> {
    let relative = Path::new(name);
    let contained = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    contained.then(|| dir.join(relative))
}
