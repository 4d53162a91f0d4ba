mod local;
mod memory;
mod stream;

pub use local::LocalFileReader;
pub use memory::MemoryReader;
pub use stream::ArchiveStream;

use std::io;

/// Trait for random access reading from a data source
pub trait ReadAt {
    /// Read data at the specified offset into the buffer.
    ///
    /// Returns the number of bytes read, which is 0 at or past the end.
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize>;

    /// Get the total size of the data source
    fn size(&self) -> u64;
}
