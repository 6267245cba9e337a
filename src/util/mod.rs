//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

use bytes::{Bytes, BytesMut};

/// Combines two byte slices into a new Bytes object.
///
/// Used when pending streaming bytes need to be joined with new data
/// to form a complete chunk.
pub(crate) fn combine_bytes(a: &[u8], b: &[u8]) -> Bytes {
    let mut combined = BytesMut::with_capacity(a.len() + b.len());
    combined.extend_from_slice(a);
    combined.extend_from_slice(b);
    combined.freeze()
}
