//! The Chunk type - represents one fixed-stride segment of a buffer.

use bytes::Bytes;
use std::fmt;

/// A fixed-stride chunk with its position metadata.
///
/// `data` is a zero-copy slice of the buffer the chunk was cut from.
///
/// # Example
///
/// ```
/// use chunkdelta::Chunk;
/// use bytes::Bytes;
///
/// let chunk = Chunk::new(Bytes::from_static(b"world"), 1, 5);
///
/// assert_eq!(chunk.len(), 5);
/// assert_eq!(chunk.range(), 5..10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk data.
    pub data: Bytes,

    /// The position of this chunk in its sequence.
    pub index: usize,

    /// The byte offset of this chunk in its source buffer.
    pub offset: u64,
}

impl Chunk {
    /// Creates a new chunk.
    pub fn new(data: impl Into<Bytes>, index: usize, offset: u64) -> Self {
        Self {
            data: data.into(),
            index,
            offset,
        }
    }

    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the position of the chunk.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the start offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk as a byte range of its source buffer.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk(#{}, {} bytes @ {})",
            self.index,
            self.len(),
            self.offset
        )
    }
}
