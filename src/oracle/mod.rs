//! Equality oracles deciding whether two aligned chunks match.
//!
//! - [`ByteCompare`] - direct byte-for-byte comparison
//! - [`DigestCompare`] - compares per-chunk digests from a [`ChunkDigest`] constructor
//!
//! Both are selected at the call site and dispatched statically.

use std::fmt;

use crate::chunk::ChunkHash;
use crate::error::DiffError;
use crate::hash::ChunkDigest;

/// Decides whether the original and updated chunk at one position are equal.
pub trait EqualityOracle {
    /// Returns `true` if the two chunks should be classified as reusable.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::MalformedOracle`] if the oracle cannot produce a
    /// valid verdict.
    fn chunks_equal(&self, original: &[u8], updated: &[u8]) -> Result<bool, DiffError>;
}

/// Direct byte-for-byte comparison. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCompare;

impl EqualityOracle for ByteCompare {
    fn chunks_equal(&self, original: &[u8], updated: &[u8]) -> Result<bool, DiffError> {
        Ok(original == updated)
    }
}

/// Digest comparison: each side of each position is hashed by a freshly
/// constructed digest and the finalized values are compared.
///
/// No digest state is ever shared between two chunks.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "hash-blake3")]
/// # {
/// use chunkdelta::{Blake3Hasher, DigestCompare, EqualityOracle};
///
/// let oracle = DigestCompare::new(Blake3Hasher::new);
/// assert!(oracle.chunks_equal(b"same", b"same")?);
/// assert!(!oracle.chunks_equal(b"same", b"diff")?);
/// # }
/// # Ok::<(), chunkdelta::DiffError>(())
/// ```
#[derive(Clone, Copy)]
pub struct DigestCompare<F> {
    make_digest: F,
}

impl<F, D> DigestCompare<F>
where
    F: Fn() -> D,
    D: ChunkDigest,
{
    /// Creates an oracle from a digest constructor.
    pub fn new(make_digest: F) -> Self {
        Self { make_digest }
    }

    /// Hashes `data` with a fresh digest, checking its fixed-length contract.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::MalformedOracle`] if the declared output size is
    /// zero or above [`ChunkHash::MAX_SIZE`], or if the finalized digest does
    /// not have the declared length.
    pub fn digest(&self, data: &[u8]) -> Result<ChunkHash, DiffError> {
        let mut digest = (self.make_digest)();
        let size = digest.output_size();

        if size == 0 {
            return Err(DiffError::MalformedOracle {
                message: "digest output size must be non-zero",
            });
        }
        if size > ChunkHash::MAX_SIZE {
            return Err(DiffError::MalformedOracle {
                message: "digest output size exceeds supported maximum",
            });
        }

        digest.update(data);
        let hash = digest.finalize();

        if hash.len() != size {
            return Err(DiffError::MalformedOracle {
                message: "finalized digest length differs from declared output size",
            });
        }

        Ok(hash)
    }
}

impl<F, D> EqualityOracle for DigestCompare<F>
where
    F: Fn() -> D,
    D: ChunkDigest,
{
    fn chunks_equal(&self, original: &[u8], updated: &[u8]) -> Result<bool, DiffError> {
        Ok(self.digest(original)? == self.digest(updated)?)
    }
}

#[cfg(feature = "hash-blake3")]
impl DigestCompare<fn() -> crate::hash::Blake3Hasher> {
    /// Digest comparison using BLAKE3.
    pub fn blake3() -> Self {
        Self::new(crate::hash::Blake3Hasher::new)
    }
}

#[cfg(feature = "hash-sha2")]
impl DigestCompare<fn() -> crate::hash::Sha256Hasher> {
    /// Digest comparison using SHA-256.
    pub fn sha256() -> Self {
        Self::new(crate::hash::Sha256Hasher::new)
    }
}

#[cfg(feature = "hash-sha2")]
impl DigestCompare<fn() -> crate::hash::Sha512Hasher> {
    /// Digest comparison using SHA-512.
    pub fn sha512() -> Self {
        Self::new(crate::hash::Sha512Hasher::new)
    }
}

impl<F> fmt::Debug for DigestCompare<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestCompare")
            .field("make_digest", &std::any::type_name::<F>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Sums bytes into a fixed-width digest of `declared` bytes, but emits
    /// `emitted` bytes on finalize.
    struct SumDigest {
        sum: u8,
        declared: usize,
        emitted: usize,
    }

    impl ChunkDigest for SumDigest {
        fn output_size(&self) -> usize {
            self.declared
        }

        fn update(&mut self, data: &[u8]) {
            for &b in data {
                self.sum = self.sum.wrapping_add(b);
            }
        }

        fn finalize(&self) -> ChunkHash {
            ChunkHash::from_slice(&vec![self.sum; self.emitted]).unwrap_or_else(ChunkHash::empty)
        }

        fn reset(&mut self) {
            self.sum = 0;
        }
    }

    fn sum_digest(declared: usize, emitted: usize) -> impl Fn() -> SumDigest {
        move || SumDigest {
            sum: 0,
            declared,
            emitted,
        }
    }

    #[test]
    fn test_byte_compare() {
        assert!(ByteCompare.chunks_equal(b"abc", b"abc").unwrap());
        assert!(!ByteCompare.chunks_equal(b"abc", b"abd").unwrap());
        assert!(!ByteCompare.chunks_equal(b"abc", b"").unwrap());
        assert!(ByteCompare.chunks_equal(b"", b"").unwrap());
    }

    #[test]
    fn test_digest_compare_custom_digest() {
        let oracle = DigestCompare::new(sum_digest(2, 2));
        assert!(oracle.chunks_equal(b"ab", b"ab").unwrap());
        // Collision by construction: same byte sum.
        assert!(oracle.chunks_equal(b"ab", b"ba").unwrap());
        assert!(!oracle.chunks_equal(b"ab", b"ac").unwrap());
    }

    #[test]
    fn test_fresh_digest_per_chunk() {
        let built = Cell::new(0);
        let oracle = DigestCompare::new(|| {
            built.set(built.get() + 1);
            SumDigest {
                sum: 0,
                declared: 1,
                emitted: 1,
            }
        });

        assert!(oracle.chunks_equal(b"x", b"x").unwrap());
        assert!(oracle.chunks_equal(b"x", b"x").unwrap());
        assert_eq!(built.get(), 4);
    }

    #[test]
    fn test_zero_output_size_is_malformed() {
        let oracle = DigestCompare::new(sum_digest(0, 0));
        assert!(matches!(
            oracle.chunks_equal(b"a", b"a"),
            Err(DiffError::MalformedOracle { .. })
        ));
    }

    #[test]
    fn test_oversized_output_is_malformed() {
        let oracle = DigestCompare::new(sum_digest(ChunkHash::MAX_SIZE + 1, 4));
        assert!(matches!(
            oracle.digest(b"a"),
            Err(DiffError::MalformedOracle { .. })
        ));
    }

    #[test]
    fn test_length_mismatch_is_malformed() {
        let oracle = DigestCompare::new(sum_digest(4, 3));
        assert!(matches!(
            oracle.digest(b"a"),
            Err(DiffError::MalformedOracle { .. })
        ));
    }

    #[test]
    #[cfg(feature = "hash-blake3")]
    fn test_blake3_oracle() {
        let oracle = DigestCompare::blake3();
        assert!(oracle.chunks_equal(b"Same ", b"Same ").unwrap());
        assert!(!oracle.chunks_equal(b"Same ", b"sure ").unwrap());
        assert_eq!(oracle.digest(b"").unwrap().len(), 32);
    }

    #[test]
    #[cfg(feature = "hash-sha2")]
    fn test_sha2_oracles() {
        assert!(DigestCompare::sha256().chunks_equal(b"a", b"a").unwrap());
        assert_eq!(DigestCompare::sha512().digest(b"a").unwrap().len(), 64);
    }

    #[test]
    fn test_debug_names_constructor() {
        let oracle = DigestCompare::new(sum_digest(1, 1));
        assert!(format!("{:?}", oracle).starts_with("DigestCompare"));
    }
}
