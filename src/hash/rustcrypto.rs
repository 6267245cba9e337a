//! Adapter for RustCrypto digests (SHA-2 family).

use sha2::digest::Digest;

use crate::chunk::ChunkHash;

use super::ChunkDigest;

/// A [`ChunkDigest`] backed by any RustCrypto [`Digest`].
///
/// Digests longer than [`ChunkHash::MAX_SIZE`] cannot be represented and
/// are rejected as a malformed oracle on first use.
#[derive(Debug, Clone)]
pub struct DigestHasher<D> {
    state: D,
}

/// SHA-256 chunk hasher.
pub type Sha256Hasher = DigestHasher<sha2::Sha256>;

/// SHA-512 chunk hasher.
pub type Sha512Hasher = DigestHasher<sha2::Sha512>;

impl<D: Digest + Clone> DigestHasher<D> {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self { state: D::new() }
    }
}

impl<D: Digest + Clone> ChunkDigest for DigestHasher<D> {
    fn output_size(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }

    fn finalize(&self) -> ChunkHash {
        let output = self.state.clone().finalize();
        ChunkHash::from_slice(&output).unwrap_or_else(ChunkHash::empty)
    }

    fn reset(&mut self) {
        self.state = D::new();
    }
}

impl<D: Digest + Clone> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}
