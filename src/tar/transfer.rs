//! Moving member payloads out of the archive stream.

use std::io::{self, Write};

use crate::io::{ArchiveStream, ReadAt};

/// Chunk size used when copying payloads.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Copy exactly `size` payload bytes into `sink`, then skip the block padding.
pub fn copy_payload<R: ReadAt, W: Write>(
    stream: &mut ArchiveStream<R>,
    sink: &mut W,
    size: u64,
    padded_size: u64,
) -> io::Result<()> {
    let mut buf = vec![0u8; size.min(COPY_BUFFER_SIZE as u64) as usize];
    let mut left = size;
    while left > 0 {
        let chunk = left.min(buf.len() as u64) as usize;
        stream.read_exact(&mut buf[..chunk])?;
        sink.write_all(&buf[..chunk])?;
        left -= chunk as u64;
    }
    stream.skip(padded_size - size);
    Ok(())
}

/// Pass over a payload without reading it.
pub fn skip_payload<R: ReadAt>(stream: &mut ArchiveStream<R>, padded_size: u64) {
    stream.skip(padded_size);
}

/// Copy everything from the current position to the end of the archive.
///
/// Returns the number of bytes written.
pub fn dump_remaining<R: ReadAt, W: Write>(
    stream: &mut ArchiveStream<R>,
    sink: &mut W,
) -> io::Result<u64> {
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut written = 0;
    loop {
        let n = stream.read_available(&mut buf)?;
        if n == 0 {
            return Ok(written);
        }
        sink.write_all(&buf[..n])?;
        written += n as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryReader;

    fn stream_of(data: Vec<u8>) -> ArchiveStream<MemoryReader> {
        ArchiveStream::new(MemoryReader::new(data))
    }

    #[test]
    fn copies_payload_and_skips_padding() {
        let mut data = b"hello".to_vec();
        data.resize(512, 0);
        data.extend_from_slice(b"next");
        let mut stream = stream_of(data);

        let mut out = Vec::new();
        copy_payload(&mut stream, &mut out, 5, 512).unwrap();
        assert_eq!(out, b"hello");
        assert_eq!(stream.position(), 512);
    }

    #[test]
    fn copies_payloads_larger_than_the_buffer() {
        let payload: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let mut data = payload.clone();
        data.resize(200_192, 0);
        let mut stream = stream_of(data);

        let mut out = Vec::new();
        copy_payload(&mut stream, &mut out, payload.len() as u64, 200_192).unwrap();
        assert_eq!(out, payload);
        assert_eq!(stream.position(), 200_192);
    }

    #[test]
    fn empty_payload_copies_nothing() {
        let mut stream = stream_of(vec![1u8; 512]);
        let mut out = Vec::new();
        copy_payload(&mut stream, &mut out, 0, 0).unwrap();
        assert!(out.is_empty());
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn short_payload_is_an_io_error() {
        let mut stream = stream_of(b"abc".to_vec());
        let mut out = Vec::new();
        let err = copy_payload(&mut stream, &mut out, 10, 512).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn dump_takes_what_is_left() {
        let mut stream = stream_of(b"0123456789".to_vec());
        stream.skip(4);
        let mut out = Vec::new();
        assert_eq!(dump_remaining(&mut stream, &mut out).unwrap(), 6);
        assert_eq!(out, b"456789");
    }
}
