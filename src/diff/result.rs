//! Classification output of a diff.

use std::fmt;

use bytes::{Bytes, BytesMut};

/// One classified position: the chunk index and the content recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkEntry {
    /// Position shared by the original and updated chunk sequences.
    pub index: usize,

    /// Content of the chunk on the side this entry describes.
    pub data: Bytes,
}

impl ChunkEntry {
    /// Creates a new entry.
    pub fn new(index: usize, data: impl Into<Bytes>) -> Self {
        Self {
            index,
            data: data.into(),
        }
    }

    /// Returns the position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the content.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the content length.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true for padding entries and other empty content.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Display for ChunkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Index: {}, Data: {}",
            self.index,
            String::from_utf8_lossy(&self.data)
        )
    }
}

/// The three buckets produced by a diff, each ascending by position.
///
/// Every visited position is either in `reusables` exactly once, or in both
/// `modified` (updated content) and `removed` (original content) exactly
/// once. Positions that exist on one side only are compared against an empty
/// chunk, so they always land in `modified`/`removed` with empty content on
/// the missing side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Positions whose original and updated content are identical.
    pub reusables: Vec<ChunkEntry>,

    /// Updated content of every position that changed.
    pub modified: Vec<ChunkEntry>,

    /// Original content of every position that changed.
    pub removed: Vec<ChunkEntry>,
}

impl DiffResult {
    pub(crate) fn with_capacity(positions: usize) -> Self {
        Self {
            reusables: Vec::with_capacity(positions),
            modified: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Number of positions visited, `max(original_chunks, updated_chunks)`.
    pub fn positions(&self) -> usize {
        self.reusables.len() + self.modified.len()
    }

    /// Returns true if no position changed.
    pub fn is_unchanged(&self) -> bool {
        self.modified.is_empty()
    }

    /// Total number of updated bytes that would have to be transferred.
    pub fn modified_len(&self) -> usize {
        self.modified.iter().map(ChunkEntry::len).sum()
    }

    /// Rebuilds the updated buffer from `reusables` and `modified`.
    pub fn reconstruct_updated(&self) -> Bytes {
        merge_by_index(&self.reusables, &self.modified)
    }

    /// Rebuilds the original buffer from `reusables` and `removed`.
    pub fn reconstruct_original(&self) -> Bytes {
        merge_by_index(&self.reusables, &self.removed)
    }
}

/// Concatenates the content of two position-sorted entry lists in position order.
fn merge_by_index(a: &[ChunkEntry], b: &[ChunkEntry]) -> Bytes {
    let total = a.iter().chain(b).map(ChunkEntry::len).sum();
    let mut out = BytesMut::with_capacity(total);

    let mut a = a.iter().peekable();
    let mut b = b.iter().peekable();
    loop {
        let next = match (a.peek(), b.peek()) {
            (Some(x), Some(y)) if x.index <= y.index => a.next(),
            (Some(_), Some(_)) => b.next(),
            (Some(_), None) => a.next(),
            (None, Some(_)) => b.next(),
            (None, None) => break,
        };
        if let Some(entry) = next {
            out.extend_from_slice(&entry.data);
        }
    }

    out.freeze()
}

fn write_bucket(f: &mut fmt::Formatter<'_>, entries: &[ChunkEntry]) -> fmt::Result {
    write!(f, "[")?;
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{{{}}}", entry)?;
    }
    write!(f, "]")
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reusables: ")?;
        write_bucket(f, &self.reusables)?;
        write!(f, ", Modified: ")?;
        write_bucket(f, &self.modified)?;
        write!(f, ", Removed: ")?;
        write_bucket(f, &self.removed)
    }
}
