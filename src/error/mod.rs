//! Error types for chunkdelta.

use std::fmt;

/// Errors that can occur while diffing two buffers.
///
/// Both variants abort the whole call: no partial [`DiffResult`](crate::DiffResult)
/// is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Invalid configuration parameter (for example a zero chunk size).
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The digest used as equality oracle broke its fixed-length contract.
    MalformedOracle {
        /// Description of the violation.
        message: &'static str,
    },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            DiffError::MalformedOracle { message } => {
                write!(f, "malformed oracle: {}", message)
            }
        }
    }
}

impl std::error::Error for DiffError {}
