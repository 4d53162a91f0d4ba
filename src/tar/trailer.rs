//! Checks run once the walk has reached the end of the archive.

use std::io::{self, Write};

use log::debug;

use super::MemberFilter;
use super::block::{BLOCK_SIZE, block_count, is_zero_block};
use super::warn;
use crate::io::{ArchiveStream, ReadAt};

const BLOCK: u64 = BLOCK_SIZE as u64;

/// Warn about every request that matched nothing.
///
/// Returns how many there were. The filter is empty afterwards.
pub fn report_unmatched<D: Write>(filter: &mut MemberFilter, diag: &mut D) -> io::Result<usize> {
    let mut count = 0;
    for name in filter.drain_remaining() {
        warn(diag, format_args!("{name}: Not found in archive"))?;
        count += 1;
    }
    Ok(count)
}

/// Look for a single zero block at the end of the archive.
///
/// A well-formed archive ends with two zero blocks. When only the final
/// block is zero, returns the archive length in blocks, which is where the
/// lone block is reported.
pub fn lone_zero_block<R: ReadAt>(stream: &ArchiveStream<R>) -> io::Result<Option<u64>> {
    let total = stream.size();
    let second_to_last = zero_block_at(stream, total.checked_sub(2 * BLOCK))?;
    let last = zero_block_at(stream, total.checked_sub(BLOCK))?;
    debug!("trailing zero blocks: second to last {second_to_last}, last {last}");

    if !second_to_last && last {
        return Ok(Some(block_count(total)));
    }
    Ok(None)
}

fn zero_block_at<R: ReadAt>(stream: &ArchiveStream<R>, offset: Option<u64>) -> io::Result<bool> {
    let Some(offset) = offset else {
        return Ok(false);
    };
    Ok(stream
        .block_at(offset)?
        .is_some_and(|block| is_zero_block(&block)))
}
