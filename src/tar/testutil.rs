//! In-memory archive construction for tests.
//!
//! Shared by the unit tests and the integration tests under `tests/`.

use super::block::{BLOCK_SIZE, padded_size};
use super::header::USTAR_MAGIC;

pub fn header_block(name: &str, size: u64, typeflag: u8) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    block[..name.len()].copy_from_slice(name.as_bytes());
    block[100..107].copy_from_slice(b"0000644");
    block[124..136].copy_from_slice(format!("{size:011o}\0").as_bytes());
    block[156] = typeflag;
    block[257..265].copy_from_slice(USTAR_MAGIC);
    block
}

/// Builds archive bytes member by member.
#[derive(Default)]
pub struct ArchiveBuilder {
    data: Vec<u8>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, name: &str, contents: &[u8]) -> Self {
        self.data
            .extend_from_slice(&header_block(name, contents.len() as u64, b'0'));
        self.data.extend_from_slice(contents);
        self.pad();
        self
    }

    pub fn entry(mut self, name: &str, typeflag: u8) -> Self {
        self.data.extend_from_slice(&header_block(name, 0, typeflag));
        self
    }

    /// Header claiming `declared` bytes followed by only `contents`.
    pub fn truncated_file(mut self, name: &str, declared: u64, contents: &[u8]) -> Self {
        self.data
            .extend_from_slice(&header_block(name, declared, b'0'));
        self.data.extend_from_slice(contents);
        self
    }

    pub fn zero_blocks(mut self, count: usize) -> Self {
        self.data.resize(self.data.len() + count * BLOCK_SIZE, 0);
        self
    }

    /// Terminator record plus the two trailing zero blocks.
    pub fn finish(self) -> Vec<u8> {
        self.zero_blocks(3).data
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }

    fn pad(&mut self) {
        let len = padded_size(self.data.len() as u64) as usize;
        self.data.resize(len, 0);
    }
}
