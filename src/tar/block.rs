//! 512-byte block arithmetic.

/// Size of every header record and the unit payloads are padded to.
pub const BLOCK_SIZE: usize = 512;

const BLOCK: u64 = BLOCK_SIZE as u64;

/// Round `n` up to the next multiple of [`BLOCK_SIZE`].
pub fn padded_size(n: u64) -> u64 {
    n + (BLOCK - n % BLOCK) % BLOCK
}

/// Number of whole blocks in `len` bytes.
pub fn block_count(len: u64) -> u64 {
    len / BLOCK
}

/// Whether every byte in the block is zero.
pub fn is_zero_block(block: &[u8; BLOCK_SIZE]) -> bool {
    block.iter().all(|&b| b == 0)
}
