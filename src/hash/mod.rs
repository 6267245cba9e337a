//! Digest implementations used as equality oracles.
//!
//! This module defines the [`ChunkDigest`] interface and the hashers that
//! ship with the crate:
//!
//! - [`Blake3Hasher`] - BLAKE3 (requires `hash-blake3` feature, on by default)
//! - [`DigestHasher`] - any RustCrypto `Digest`, with [`Sha256Hasher`] and
//!   [`Sha512Hasher`] aliases (requires `hash-sha2` feature)
//!
//! Any other hash function can be plugged in by implementing [`ChunkDigest`].

use crate::chunk::ChunkHash;

#[cfg(feature = "hash-blake3")]
mod blake3;

#[cfg(feature = "hash-sha2")]
mod rustcrypto;

#[cfg(feature = "hash-blake3")]
pub use self::blake3::Blake3Hasher;

#[cfg(feature = "hash-sha2")]
pub use self::rustcrypto::{DigestHasher, Sha256Hasher, Sha512Hasher};

/// An incremental digest that produces a fixed-length [`ChunkHash`].
///
/// A fresh value is created for every chunk that gets compared, so
/// implementations never see bytes from two different chunks.
///
/// # Example
///
/// A toy digest (not collision resistant, only shows the shape):
///
/// ```
/// use chunkdelta::{ChunkDigest, ChunkHash};
///
/// #[derive(Default)]
/// struct Xor([u8; 4], usize);
///
/// impl ChunkDigest for Xor {
///     fn output_size(&self) -> usize {
///         4
///     }
///
///     fn update(&mut self, data: &[u8]) {
///         for &byte in data {
///             self.0[self.1 % 4] ^= byte;
///             self.1 += 1;
///         }
///     }
///
///     fn finalize(&self) -> ChunkHash {
///         ChunkHash::from_slice(&self.0).unwrap()
///     }
///
///     fn reset(&mut self) {
///         *self = Self::default();
///     }
/// }
/// ```
pub trait ChunkDigest {
    /// The length in bytes of every digest this hasher produces.
    fn output_size(&self) -> usize;

    /// Feeds more data into the digest.
    fn update(&mut self, data: &[u8]);

    /// Returns the digest of all data fed since creation or the last reset.
    fn finalize(&self) -> ChunkHash;

    /// Returns the hasher to its freshly created state.
    fn reset(&mut self);
}
