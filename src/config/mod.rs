//! Configuration for diffing behavior.
//!
//! - [`DiffConfig`] - Controls the fixed chunk stride used on both buffers
//!
//! # Example
//!
//! ```
//! use chunkdelta::DiffConfig;
//!
//! // Custom chunk size
//! let config = DiffConfig::new(4096)?;
//! assert_eq!(config.chunk_size(), 4096);
//!
//! // Builder pattern
//! let config = DiffConfig::default().with_chunk_size(64);
//! config.validate()?;
//!
//! # Ok::<(), chunkdelta::DiffError>(())
//! ```

use crate::error::DiffError;

/// Default chunk size (1 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Configuration for fixed-stride chunking and diffing.
///
/// Both buffers of a diff are always chunked with the same configuration, so
/// positions line up. The chunk size is the length of every chunk except
/// possibly the last chunk of a buffer, which may be shorter.
///
/// # Size Constraints
///
/// The chunk size must be non-zero. Unlike content-defined chunking there is
/// no power-of-two requirement: any stride works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiffConfig {
    /// Chunk size in bytes.
    chunk_size: usize,
}

impl DiffConfig {
    /// Creates a new configuration with the specified chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidConfig`] if `chunk_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use chunkdelta::DiffConfig;
    ///
    /// assert!(DiffConfig::new(5).is_ok());
    /// assert!(DiffConfig::new(0).is_err());
    /// ```
    pub fn new(chunk_size: usize) -> Result<Self, DiffError> {
        if chunk_size == 0 {
            return Err(DiffError::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }

        Ok(Self { chunk_size })
    }

    /// Sets the chunk size.
    ///
    /// Note: This does not validate the configuration. Use [`DiffConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use chunkdelta::DiffConfig;
    ///
    /// let config = DiffConfig::default().with_chunk_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), DiffError> {
        Self::new(self.chunk_size).map(|_| ())
    }
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
