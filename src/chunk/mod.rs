//! Chunk types.
//!
//! - [`Chunk`] - Fixed-stride chunk with data, position and offset
//! - [`ChunkHash`] - Fixed-length digest value produced by a [`ChunkDigest`](crate::ChunkDigest)

mod data;
mod hash;

pub use data::Chunk;
pub use hash::ChunkHash;
