//! Position-aligned diffing of two chunk sequences.
//!
//! - [`Differ`] - Classifies aligned chunk pairs with an [`EqualityOracle`]
//! - [`diff`] / [`diff_with_config`] / [`diff_default`] - chunk two buffers and diff them
//! - [`DiffResult`] / [`ChunkEntry`] - classification output
//!
//! # Alignment
//!
//! Chunks are compared strictly by position. When one sequence is shorter,
//! it is padded with empty chunks at its tail. There is no resynchronization:
//! inserting or deleting bytes anywhere but the end shifts every following
//! chunk boundary, and every following position is reported as modified.

mod result;

pub use result::{ChunkEntry, DiffResult};

use bytes::Bytes;
use tracing::{debug, trace};

use crate::chunk::Chunk;
use crate::chunker::Chunker;
use crate::config::DiffConfig;
use crate::error::DiffError;
use crate::oracle::{ByteCompare, EqualityOracle};

/// Classifies aligned chunk pairs into reusable, modified and removed.
///
/// # Example
///
/// ```
/// use chunkdelta::{ByteCompare, ChunkEntry, DiffConfig, Differ};
///
/// let differ = Differ::new(ByteCompare);
/// let result = differ.diff(&b"Same sure files"[..], &b"Same files"[..], &DiffConfig::new(5)?)?;
///
/// assert_eq!(result.reusables, vec![ChunkEntry::new(0, &b"Same "[..])]);
/// assert_eq!(result.modified[0], ChunkEntry::new(1, &b"files"[..]));
/// assert_eq!(result.removed[0], ChunkEntry::new(1, &b"sure "[..]));
/// # Ok::<(), chunkdelta::DiffError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Differ<O> {
    oracle: O,
}

impl<O: EqualityOracle> Differ<O> {
    /// Creates a differ using `oracle` to decide chunk equality.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Returns the equality oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Chunks both buffers with `config` and classifies every position.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidConfig`] before any chunking if the chunk
    /// size is zero, and [`DiffError::MalformedOracle`] if the oracle fails.
    pub fn diff(
        &self,
        original: impl Into<Bytes>,
        updated: impl Into<Bytes>,
        config: &DiffConfig,
    ) -> Result<DiffResult, DiffError> {
        let chunker = Chunker::new(*config)?;
        let original_chunks = chunker.chunk_bytes(original);
        let updated_chunks = chunker.chunk_bytes(updated);

        self.diff_chunks(&original_chunks, &updated_chunks)
    }

    /// Classifies two chunk sequences produced with the same chunk size.
    ///
    /// Position `i` compares `original[i]` with `updated[i]`; a missing side
    /// counts as an empty chunk. Each bucket of the result is ascending by
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::MalformedOracle`] if the oracle fails; no partial
    /// result is returned.
    pub fn diff_chunks(
        &self,
        original: &[Chunk],
        updated: &[Chunk],
    ) -> Result<DiffResult, DiffError> {
        let positions = original.len().max(updated.len());
        let mut result = DiffResult::with_capacity(positions);

        for index in 0..positions {
            let original_data = side_data(original, index);
            let updated_data = side_data(updated, index);

            if self.oracle.chunks_equal(&original_data, &updated_data)? {
                trace!(index, len = original_data.len(), "reusable chunk");
                result.reusables.push(ChunkEntry::new(index, original_data));
            } else {
                trace!(
                    index,
                    original_len = original_data.len(),
                    updated_len = updated_data.len(),
                    "modified chunk"
                );
                result.modified.push(ChunkEntry::new(index, updated_data));
                result.removed.push(ChunkEntry::new(index, original_data));
            }
        }

        debug!(
            original_chunks = original.len(),
            updated_chunks = updated.len(),
            reusable = result.reusables.len(),
            modified = result.modified.len(),
            "diff complete"
        );

        Ok(result)
    }
}

/// Content at `index`, or an empty chunk past the end of the sequence.
fn side_data(chunks: &[Chunk], index: usize) -> Bytes {
    chunks
        .get(index)
        .map(|chunk| chunk.data.clone())
        .unwrap_or_default()
}

/// Diffs `original` against `updated` using `chunk_size`-byte chunks.
///
/// # Errors
///
/// Returns [`DiffError::InvalidConfig`] if `chunk_size` is zero and
/// [`DiffError::MalformedOracle`] if a digest oracle breaks its contract.
///
/// # Example
///
/// ```
/// use chunkdelta::{diff, ByteCompare, ChunkEntry};
///
/// let result = diff(&b"Same files"[..], &b"Same files, larger!!"[..], ByteCompare, 10)?;
///
/// assert_eq!(result.reusables, vec![ChunkEntry::new(0, &b"Same files"[..])]);
/// assert_eq!(result.modified, vec![ChunkEntry::new(1, &b", larger!!"[..])]);
/// assert_eq!(result.removed, vec![ChunkEntry::new(1, &b""[..])]);
/// # Ok::<(), chunkdelta::DiffError>(())
/// ```
pub fn diff<O: EqualityOracle>(
    original: impl Into<Bytes>,
    updated: impl Into<Bytes>,
    oracle: O,
    chunk_size: usize,
) -> Result<DiffResult, DiffError> {
    let config = DiffConfig::new(chunk_size)?;
    diff_with_config(original, updated, oracle, &config)
}

/// Diffs `original` against `updated` with an explicit configuration.
///
/// # Errors
///
/// Same as [`diff`].
pub fn diff_with_config<O: EqualityOracle>(
    original: impl Into<Bytes>,
    updated: impl Into<Bytes>,
    oracle: O,
    config: &DiffConfig,
) -> Result<DiffResult, DiffError> {
    Differ::new(oracle).diff(original, updated, config)
}

/// Diffs with direct byte comparison and the default 1 KiB chunk size.
///
/// # Errors
///
/// Never fails in practice; the signature matches [`diff`].
pub fn diff_default(
    original: impl Into<Bytes>,
    updated: impl Into<Bytes>,
) -> Result<DiffResult, DiffError> {
    diff_with_config(original, updated, ByteCompare, &DiffConfig::default())
}
