//! Error types for the gifcrypt pipeline.
//!
//! All operations return structured errors rather than panicking.
//! Every failure identifies the pipeline stage it came from; the caller
//! layer decides how to present it. Key mismatch and container corruption
//! are not distinguishable from each other and surface uniformly as
//! header/payload truncation errors.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Bits: byte-alignment problems in a bit sequence
/// - Header: framing header encode/decode failures
/// - Cipher: key construction failures
/// - Chunk: frame-index gaps or repeats during reassembly
/// - Container: animated-container read/write failures
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Bit sequence not byte-aligned where required
    #[error("bit sequence error: {0}")]
    Bits(#[from] BitsError),

    /// Header framing error (overflow, truncation)
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// Cipher key error
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Frame chunking/reassembly error
    #[error("chunk error: {0}")]
    Chunk(#[from] ChunkError),

    /// Animated container error
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// Source file could not be opened or read
    #[error("cannot read source file {path:?}: {source}")]
    UnreadableSource {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bit-sequence alignment errors.
#[derive(Debug, Error)]
pub enum BitsError {
    /// A bit sequence was required to be a whole number of bytes
    #[error("bit length {len} is not a multiple of 8")]
    MalformedLength { len: usize },
}

/// Header framing errors.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Encoded filename does not fit the 16-bit length field
    #[error("filename encodes to {bits} bits, exceeding the 16-bit length field")]
    Overflow { bits: usize },

    /// Fewer bits available than the fixed header fields require
    #[error("truncated header: need {required} bits, have {available}")]
    TruncatedHeader { required: usize, available: usize },

    /// Header claims more payload bits than remain
    #[error("truncated payload: header claims {required} bits, {available} remain")]
    TruncatedPayload { required: usize, available: usize },
}

/// Cipher key errors.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Key must contain at least one bit
    #[error("cipher key must contain at least one bit")]
    EmptyKey,

    /// Key digit string contained something other than '0' or '1'
    #[error("cipher key contains non-binary digit {digit:?}")]
    InvalidKeyDigit { digit: char },
}

/// Frame chunking and reassembly errors.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// Frame capacity must hold at least one pixel
    #[error("frame capacity must be at least 1 pixel")]
    ZeroCapacity,

    /// Gap in the frame index sequence during reassembly
    #[error("missing frame index {expected}")]
    MissingFrame { expected: u32 },

    /// The same frame index appeared more than once
    #[error("duplicate frame index {index}")]
    DuplicateFrame { index: u32 },
}

/// Animated container read/write errors.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Container file could not be opened or decoded
    #[error("cannot read container {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Container or staged frame could not be written
    #[error("cannot write {path:?}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Container decoded to zero frames
    #[error("container {path:?} holds no frames")]
    Empty { path: PathBuf },

    /// A staged frame file name carries no parseable index
    #[error("staged frame {path:?} has no parseable index")]
    BadFrameName { path: PathBuf },
}

/// Convenience Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
