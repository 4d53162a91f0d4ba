//! Header record decoding.
//!
//! A header is one 512-byte record laid out as:
//!
//! | Offset | Size | Field      |
//! |-------:|-----:|------------|
//! |      0 |  100 | `name`     |
//! |    100 |    8 | `mode`     |
//! |    108 |    8 | `uid`      |
//! |    116 |    8 | `gid`      |
//! |    124 |   12 | `size`     |
//! |    136 |   12 | `mtime`    |
//! |    148 |    8 | `chksum`   |
//! |    156 |    1 | `typeflag` |
//! |    157 |  100 | `linkname` |
//! |    257 |    6 | `magic`    |
//! |    263 |    2 | `version`  |
//! |    265 |   32 | `uname`    |
//! |    297 |   32 | `gname`    |
//! |    329 |    8 | `devmajor` |
//! |    337 |    8 | `devminor` |
//! |    345 |  155 | `prefix`   |
//! |    500 |   12 | padding    |
//!
//! Only `name`, `size`, `typeflag` and `magic`/`version` are interpreted.

use std::ops::Range;

use crate::error::TarError;

use super::block::{BLOCK_SIZE, padded_size};

const NAME: Range<usize> = 0..100;
const SIZE: Range<usize> = 124..136;
const TYPEFLAG: usize = 156;
/// `magic` followed by `version`, compared as one 8-byte run.
const MAGIC: Range<usize> = 257..265;

/// GNU tar's magic and version: `"ustar "` then `" \0"`.
pub const USTAR_MAGIC: &[u8; 8] = b"ustar  \0";

/// Type flag of a regular file, the only member type supported.
pub const REGTYPE: u8 = b'0';

/// One decoded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Header(HeaderRecord),
    /// Record with an empty name, which terminates the archive.
    EndOfArchive,
}

/// Validated header of a regular-file member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    pub name: String,
    /// Payload length in bytes
    pub size: u64,
}

impl HeaderRecord {
    /// Payload length rounded up to whole blocks.
    pub fn padded_size(&self) -> u64 {
        padded_size(self.size)
    }
}

/// Decode a header record.
///
/// `block_index` is the record's position in the archive, counted in
/// 512-byte blocks. It is only used in error messages.
///
/// The end-of-archive check happens before any validation, so a zero record
/// never trips the magic check.
pub fn parse_header(block: &[u8; BLOCK_SIZE], block_index: u64) -> Result<Record, TarError> {
    if block[NAME.start] == 0 {
        return Ok(Record::EndOfArchive);
    }

    validate_magic(block, block_index)?;
    validate_typeflag(block, block_index)?;

    Ok(Record::Header(HeaderRecord {
        name: decode_name(&block[NAME]),
        size: decode_size(&block[SIZE]),
    }))
}

pub fn validate_magic(block: &[u8; BLOCK_SIZE], block_index: u64) -> Result<(), TarError> {
    if &block[MAGIC] != USTAR_MAGIC {
        return Err(TarError::BadMagic { block: block_index });
    }
    Ok(())
}

pub fn validate_typeflag(block: &[u8; BLOCK_SIZE], block_index: u64) -> Result<(), TarError> {
    let typeflag = block[TYPEFLAG];
    if typeflag != REGTYPE {
        return Err(TarError::UnsupportedEntryType {
            typeflag: char::from(typeflag),
            block: block_index,
        });
    }
    Ok(())
}

/// Decode an octal ASCII numeric field.
///
/// Leading spaces are skipped, then digits are read up to the first byte
/// that is not `0`-`7`. Whatever follows (NUL, space, junk) is ignored.
pub fn decode_size(field: &[u8]) -> u64 {
    field
        .iter()
        .skip_while(|&&b| b == b' ')
        .take_while(|&&b| (b'0'..=b'7').contains(&b))
        .fold(0u64, |acc, &b| acc.saturating_mul(8).saturating_add(u64::from(b - b'0')))
}

/// Name bytes up to the first NUL.
fn decode_name(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
