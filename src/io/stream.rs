use std::io;

use log::trace;

use super::ReadAt;
use crate::tar::BLOCK_SIZE;

/// Sequential cursor over a [`ReadAt`] source.
///
/// The position is tracked here rather than in the source, so skipping is
/// plain arithmetic and may run past the end. Reads beyond the end return
/// nothing.
pub struct ArchiveStream<R: ReadAt> {
    reader: R,
    position: u64,
    size: u64,
}

impl<R: ReadAt> ArchiveStream<R> {
    pub fn new(reader: R) -> Self {
        let size = reader.size();
        Self {
            reader,
            position: 0,
            size,
        }
    }

    /// Absolute offset of the next byte to be read.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Total length of the archive.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Bytes between the current position and the end.
    pub fn remaining(&self) -> u64 {
        self.size.saturating_sub(self.position)
    }

    /// Advance the position by `n` bytes.
    pub fn skip(&mut self, n: u64) {
        trace!("skip {} bytes from offset {}", n, self.position);
        self.position = self.position.saturating_add(n);
    }

    /// Read the next 512-byte record.
    ///
    /// Returns `None` when less than a full record is left.
    pub fn read_block(&mut self) -> io::Result<Option<[u8; BLOCK_SIZE]>> {
        let mut block = [0u8; BLOCK_SIZE];
        let n = self.read_available(&mut block)?;
        if n < BLOCK_SIZE {
            return Ok(None);
        }
        Ok(Some(block))
    }

    /// Fill `buf` completely or fail with [`io::ErrorKind::UnexpectedEof`].
    pub fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let n = self.read_available(buf)?;
        if n < buf.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "archive ended after {} of {} bytes at offset {}",
                    n,
                    buf.len(),
                    self.position
                ),
            ));
        }
        Ok(())
    }

    /// Read as many bytes as the source has, up to `buf.len()`.
    pub fn read_available(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = fill_at(&self.reader, self.position, buf)?;
        self.position += n as u64;
        Ok(n)
    }

    /// Read the block starting at `offset` without moving the position.
    ///
    /// Returns `None` if the block does not lie entirely inside the archive.
    pub fn block_at(&self, offset: u64) -> io::Result<Option<[u8; BLOCK_SIZE]>> {
        let mut block = [0u8; BLOCK_SIZE];
        if fill_at(&self.reader, offset, &mut block)? < BLOCK_SIZE {
            return Ok(None);
        }
        Ok(Some(block))
    }
}

fn fill_at<R: ReadAt>(reader: &R, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read_at(offset + filled as u64, &mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryReader;

    #[test]
    fn short_record_reads_as_none() {
        let mut stream = ArchiveStream::new(MemoryReader::new(vec![7u8; BLOCK_SIZE + 100]));
        assert!(stream.read_block().unwrap().is_some());
        assert_eq!(stream.position(), BLOCK_SIZE as u64);
        assert!(stream.read_block().unwrap().is_none());
    }

    #[test]
    fn skip_past_end_leaves_nothing_to_read() {
        let mut stream = ArchiveStream::new(MemoryReader::new(vec![0u8; 1024]));
        assert_eq!(stream.size(), 1024);
        stream.skip(4096);
        assert_eq!(stream.remaining(), 0);
        assert!(stream.read_block().unwrap().is_none());
    }

    #[test]
    fn read_exact_reports_unexpected_eof() {
        let mut stream = ArchiveStream::new(MemoryReader::new(b"abc".to_vec()));
        let mut buf = [0u8; 5];
        let err = stream.read_exact(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn block_at_does_not_move_position() {
        let mut data = vec![0u8; 1536];
        data[512] = 1;
        let stream = ArchiveStream::new(MemoryReader::new(data));
        let block = stream.block_at(512).unwrap().unwrap();
        assert_eq!(block[0], 1);
        assert_eq!(stream.position(), 0);
        assert!(stream.block_at(1200).unwrap().is_none());
    }
}
