//! Error types shared by the codec and the command line front end.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffError>;

/// Everything that can go wrong while encoding or decoding.
#[derive(Debug, Error)]
pub enum HuffError {
    /// The input file named on the command line does not exist.
    #[error("input file {} doesn't exist", .0.display())]
    InputNotFound(PathBuf),

    /// A code tree was requested for zero symbols. The codec handles empty input before
    /// it gets this far, so seeing this means a caller skipped that check.
    #[error("cannot build a code tree from an empty alphabet")]
    EmptyAlphabetInternal,

    /// The code table in the container header is duplicated, inconsistent or cut short.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The payload ended in the middle of a code.
    #[error("truncated payload: {0}")]
    TruncatedPayload(String),

    /// The encoded message does not fit the 32 bit length field of the container.
    #[error("encoded message of {bits} bits is too long for the container")]
    MessageTooLong { bits: u64 },

    /// Underlying read/write failure.
    #[error("I/O error: {0}")]
    IoFailure(#[from] std::io::Error),
}
