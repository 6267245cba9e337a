//! Chunk hash types.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash as StdHash, Hasher};

/// A fixed-length digest value representing chunk content.
///
/// Digest algorithms differ in output length (20 bytes for SHA-1, 32 for
/// BLAKE3 and SHA-256, 64 for SHA-512), so the value is stored inline with
/// room for up to [`ChunkHash::MAX_SIZE`] bytes and stays `Copy`.
#[derive(Clone, Copy)]
pub struct ChunkHash {
    bytes: [u8; ChunkHash::MAX_SIZE],
    len: u8,
}

impl ChunkHash {
    /// The largest supported digest length in bytes.
    pub const MAX_SIZE: usize = 64;

    /// Creates a new chunk hash from a 32-byte array.
    pub const fn new(digest: [u8; 32]) -> Self {
        let mut bytes = [0u8; Self::MAX_SIZE];
        let mut i = 0;
        while i < 32 {
            bytes[i] = digest[i];
            i += 1;
        }
        Self { bytes, len: 32 }
    }

    /// A zero-length value, used when a digest cannot be represented.
    #[allow(dead_code)]
    pub(crate) const fn empty() -> Self {
        Self {
            bytes: [0u8; Self::MAX_SIZE],
            len: 0,
        }
    }

    /// Creates a new chunk hash from a slice.
    ///
    /// Returns `None` if the slice is empty or longer than [`ChunkHash::MAX_SIZE`].
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.is_empty() || slice.len() > Self::MAX_SIZE {
            return None;
        }
        let mut bytes = [0u8; Self::MAX_SIZE];
        bytes[..slice.len()].copy_from_slice(slice);
        Some(Self {
            bytes,
            len: slice.len() as u8,
        })
    }

    /// Returns the digest as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Returns the digest length in bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true if the digest holds no bytes.
    ///
    /// Values built through the constructors are never empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut result = String::with_capacity(self.len() * 2);
        for byte in self.as_bytes() {
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0xf) as usize] as char);
        }
        result
    }

    /// Creates a digest from a hex string.
    ///
    /// Returns `None` if the string is not valid hex, has odd length, or
    /// decodes to an empty or oversized digest.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() % 2 != 0 || !hex_str.is_ascii() {
            return None;
        }
        let len = hex_str.len() / 2;
        if len == 0 || len > Self::MAX_SIZE {
            return None;
        }
        let mut bytes = [0u8; Self::MAX_SIZE];
        for (i, byte) in bytes.iter_mut().take(len).enumerate() {
            *byte = u8::from_str_radix(&hex_str[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self {
            bytes,
            len: len as u8,
        })
    }
}

impl PartialEq for ChunkHash {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ChunkHash {}

impl PartialOrd for ChunkHash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChunkHash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl AsRef<[u8]> for ChunkHash {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl StdHash for ChunkHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.as_bytes());
    }
}

impl fmt::Debug for ChunkHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkHash({})", self)
    }
}

impl fmt::Display for ChunkHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
