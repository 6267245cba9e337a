//! BLAKE3-based chunk hashing implementation.

use crate::chunk::ChunkHash;

use super::ChunkDigest;

/// A hasher that computes BLAKE3 hashes.
#[derive(Debug, Clone)]
pub struct Blake3Hasher {
    state: blake3::Hasher,
}

impl Blake3Hasher {
    /// BLAKE3 output length in bytes.
    pub const OUTPUT_SIZE: usize = 32;

    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    /// Creates a new hasher with a key for keyed hashing.
    ///
    /// Useful as an oracle when digests must not be predictable without the key:
    ///
    /// ```
    /// use chunkdelta::{diff, Blake3Hasher, DigestCompare};
    ///
    /// let key = [7u8; 32];
    /// let oracle = DigestCompare::new(|| Blake3Hasher::new_keyed(&key));
    /// let result = diff(&b"Same files"[..], &b"Same fires"[..], oracle, 5)?;
    ///
    /// assert_eq!(result.reusables.len(), 1);
    /// assert_eq!(result.modified.len(), 1);
    /// # Ok::<(), chunkdelta::DiffError>(())
    /// ```
    pub fn new_keyed(key: &[u8; 32]) -> Self {
        Self {
            state: blake3::Hasher::new_keyed(key),
        }
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> ChunkHash {
        ChunkHash::new(blake3::hash(data).into())
    }
}

impl ChunkDigest for Blake3Hasher {
    fn output_size(&self) -> usize {
        Self::OUTPUT_SIZE
    }

    fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    fn finalize(&self) -> ChunkHash {
        ChunkHash::new(self.state.finalize().into())
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}
