//! Core chunking engine - fixed-stride Chunker with one-shot and streaming API.
//!
//! - [`Chunker::chunk_bytes`] - Split a whole in-memory buffer
//! - [`Chunker::push`] - Feed data in any size (1 byte, 8KB, 1MB, etc.)
//! - [`Chunker::finish`] - Flush the final short chunk when the stream ends
//!
//! Both paths produce identical chunks for identical input.
//!
//! # Example
//!
//! ```
//! use chunkdelta::{Chunker, DiffConfig};
//! use bytes::Bytes;
//!
//! let mut chunker = Chunker::new(DiffConfig::new(4)?)?;
//!
//! let mut chunks = chunker.push(Bytes::from_static(b"hello "));
//! chunks.extend(chunker.push(Bytes::from_static(b"world")));
//! chunks.extend(chunker.finish());
//!
//! let joined: Vec<u8> = chunks.iter().flat_map(|c| c.data.to_vec()).collect();
//! assert_eq!(joined, b"hello world");
//! assert_eq!(chunks.len(), 3);
//! # Ok::<(), chunkdelta::DiffError>(())
//! ```

use bytes::Bytes;
use tracing::trace;

use crate::chunk::Chunk;
use crate::config::DiffConfig;
use crate::error::DiffError;

/// A chunker that splits bytes into position-indexed, fixed-size chunks.
///
/// Chunk `i` covers byte offsets `[i * chunk_size, min((i + 1) * chunk_size, len))`.
/// Every chunk is exactly `chunk_size` long except possibly the last, which
/// is shorter but never empty. An empty input yields no chunks.
///
/// # Zero-Copy
///
/// Chunk data is sliced from the input `Bytes` wherever a chunk lies within
/// a single input buffer. In streaming mode a chunk that straddles two
/// `push()` calls is copied once.
#[derive(Debug, Clone)]
pub struct Chunker {
    config: DiffConfig,
    pending: Option<Bytes>,
    offset: u64,
    next_index: usize,
}

impl Chunker {
    /// Creates a new chunker with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidConfig`] if the chunk size is zero.
    pub fn new(config: DiffConfig) -> Result<Self, DiffError> {
        config.validate()?;

        Ok(Self {
            config,
            pending: None,
            offset: 0,
            next_index: 0,
        })
    }

    /// Chunks an in-memory buffer.
    ///
    /// This is independent of any streaming state held by the chunker.
    ///
    /// # Example
    ///
    /// ```
    /// use chunkdelta::{Chunker, DiffConfig};
    ///
    /// let chunker = Chunker::new(DiffConfig::new(5)?)?;
    /// let chunks = chunker.chunk_bytes(&b"Same sure files"[..]);
    ///
    /// assert_eq!(chunks.len(), 3);
    /// assert_eq!(chunks[1].data.as_ref(), b"sure ");
    /// # Ok::<(), chunkdelta::DiffError>(())
    /// ```
    pub fn chunk_bytes(&self, data: impl Into<Bytes>) -> Vec<Chunk> {
        let data = data.into();
        let size = self.config.chunk_size();
        let mut chunks = Vec::with_capacity(data.len().div_ceil(size));

        let mut start = 0usize;
        while start < data.len() {
            let end = start.saturating_add(size).min(data.len());
            chunks.push(Chunk::new(data.slice(start..end), chunks.len(), start as u64));
            start = end;
        }

        chunks
    }

    /// Pushes data into the chunker and returns every chunk completed by it.
    ///
    /// Bytes that do not yet fill a whole chunk are held internally and
    /// prepended to the next `push()`. Call [`Chunker::finish`] when the
    /// stream ends to receive them.
    pub fn push(&mut self, mut data: Bytes) -> Vec<Chunk> {
        let size = self.config.chunk_size();
        let mut chunks = Vec::new();

        if let Some(pending) = self.pending.take() {
            let missing = size - pending.len();
            if data.len() < missing {
                self.pending = Some(crate::util::combine_bytes(&pending, &data));
                return chunks;
            }

            let head = data.split_to(missing);
            let chunk_data = crate::util::combine_bytes(&pending, &head);
            chunks.push(self.emit(chunk_data));
        }

        while data.len() >= size {
            let chunk_data = data.split_to(size);
            chunks.push(self.emit(chunk_data));
        }

        if !data.is_empty() {
            self.pending = Some(data);
        }

        chunks
    }

    /// Finalizes the stream and returns the final short chunk, if any.
    ///
    /// After calling `finish()`, the chunker is reset and can be reused for
    /// a new stream.
    pub fn finish(&mut self) -> Option<Chunk> {
        let chunk = self
            .pending
            .take()
            .filter(|pending| !pending.is_empty())
            .map(|pending| self.emit(pending));

        self.reset();
        chunk
    }

    /// Resets the streaming state, discarding pending bytes.
    pub fn reset(&mut self) {
        self.pending = None;
        self.offset = 0;
        self.next_index = 0;
    }

    /// Returns the byte offset of the next chunk to be emitted.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the position of the next chunk to be emitted.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Returns the number of bytes waiting for more input.
    pub fn pending_len(&self) -> usize {
        self.pending.as_ref().map(|b| b.len()).unwrap_or(0)
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    fn emit(&mut self, data: Bytes) -> Chunk {
        let chunk = Chunk::new(data, self.next_index, self.offset);
        trace!(index = chunk.index, offset = chunk.offset, len = chunk.len(), "emit chunk");

        self.offset += chunk.len() as u64;
        self.next_index += 1;
        chunk
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            config: DiffConfig::default(),
            pending: None,
            offset: 0,
            next_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker(size: usize) -> Chunker {
        Chunker::new(DiffConfig::new(size).unwrap()).unwrap()
    }

    #[test]
    fn test_chunker_empty() {
        let chunks = Chunker::default().chunk_bytes(&b""[..]);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_rejects_zero_chunk_size() {
        let config = DiffConfig::default().with_chunk_size(0);
        assert!(matches!(
            Chunker::new(config),
            Err(DiffError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_exact_multiple() {
        let chunks = chunker(5).chunk_bytes(&b"Same files"[..]);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].data.as_ref(), b"Same ");
        assert_eq!(chunks[1].data.as_ref(), b"files");
    }

    #[test]
    fn test_short_tail() {
        let chunks = chunker(4).chunk_bytes(&b"Testx"[..]);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].data.as_ref(), b"x");
        assert_eq!(chunks[1].offset, 4);
    }

    #[test]
    fn test_chunk_larger_than_input() {
        let chunks = Chunker::default().chunk_bytes(&b"Same files"[..]);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 10);
    }

    #[test]
    fn test_huge_chunk_size_does_not_overflow() {
        let chunks = chunker(usize::MAX).chunk_bytes(&b"abc"[..]);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_indices_and_offsets() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let chunks = chunker(64).chunk_bytes(data.clone());

        assert_eq!(chunks.len(), 16);
        let mut expected_offset = 0u64;
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert_eq!(chunk.offset, expected_offset);
            expected_offset += chunk.len() as u64;
        }
        assert_eq!(expected_offset, data.len() as u64);
    }

    #[test]
    fn test_push_holds_pending() {
        let mut chunker = chunker(8);
        let chunks = chunker.push(Bytes::from_static(b"small"));
        assert!(chunks.is_empty());
        assert_eq!(chunker.pending_len(), 5);

        let chunks = chunker.push(Bytes::from_static(b" additional"));
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].data.as_ref(), b"small ad");
        assert_eq!(chunks[1].data.as_ref(), b"ditional");
        assert_eq!(chunker.pending_len(), 0);
        assert!(chunker.finish().is_none());
    }

    #[test]
    fn test_finish_resets() {
        let mut chunker = chunker(4);
        chunker.push(Bytes::from_static(b"abcdef"));
        let last = chunker.finish().unwrap();
        assert_eq!(last.data.as_ref(), b"ef");
        assert_eq!(last.index, 1);

        assert_eq!(chunker.offset(), 0);
        assert_eq!(chunker.next_index(), 0);
        assert!(chunker.finish().is_none());
    }
}
