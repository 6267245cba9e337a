//! Fixed-stride chunking engine.
//!
//! - [`Chunker`] - Splits buffers in one shot with `chunk_bytes()`, or
//!   incrementally with `push()`/`finish()`

mod engine;

pub use engine::Chunker;
