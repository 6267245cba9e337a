//! chunkdelta
//!
//! Fixed-stride, position-aligned chunk diffing for Rust.
//!
//! `chunkdelta` splits an *original* and an *updated* byte buffer into
//! chunks of the same fixed size and classifies every position:
//!
//! - **reusable** - both chunks are identical
//! - **modified** - the updated chunk differs (recorded with updated content)
//! - **removed** - the original counterpart of every modified position
//!
//! It is a coarse building block for incremental transfer or storage, where
//! only modified chunks need to be re-sent or re-persisted.
//!
//! The crate intentionally:
//! - does NOT read files or manage paths
//! - does NOT resynchronize after insertions or deletions
//! - does NOT use content-defined chunk boundaries
//! - does NOT compute a minimal edit script
//!
//! Because alignment is purely positional, inserting or deleting bytes shifts
//! every later chunk boundary and every later position is reported as
//! modified, even when its content is a shifted copy. Length differences at
//! the very end are handled by padding the shorter side with empty chunks.
//!
//! # Byte comparison
//!
//! ```
//! use chunkdelta::{diff, ByteCompare, ChunkEntry};
//!
//! let result = diff(&b"Same sure files"[..], &b"Same files"[..], ByteCompare, 5)?;
//!
//! assert_eq!(result.reusables, vec![ChunkEntry::new(0, &b"Same "[..])]);
//! assert_eq!(result.modified.len(), 2);
//! assert_eq!(result.reconstruct_updated().as_ref(), b"Same files");
//! # Ok::<(), chunkdelta::DiffError>(())
//! ```
//!
//! # Digest comparison (feature = "hash-blake3")
//!
//! ```
//! # #[cfg(feature = "hash-blake3")]
//! # {
//! use chunkdelta::{diff, Blake3Hasher, DigestCompare};
//!
//! let result = diff(&b"Testx"[..], &b"Testz"[..], DigestCompare::new(Blake3Hasher::new), 1)?;
//! assert_eq!(result.reusables.len(), 4);
//! # }
//! # Ok::<(), chunkdelta::DiffError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod diff;
mod error;
mod oracle;

mod hash;
mod util;

//
// Public surface
//

pub use chunk::{Chunk, ChunkHash};
pub use chunker::Chunker;
pub use config::{DEFAULT_CHUNK_SIZE, DiffConfig};
pub use diff::{ChunkEntry, DiffResult, Differ, diff, diff_default, diff_with_config};
pub use error::DiffError;
pub use hash::ChunkDigest;
pub use oracle::{ByteCompare, DigestCompare, EqualityOracle};

#[cfg(feature = "hash-blake3")]
pub use hash::Blake3Hasher;

#[cfg(feature = "hash-sha2")]
pub use hash::{DigestHasher, Sha256Hasher, Sha512Hasher};
