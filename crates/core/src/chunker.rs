//! Splitting a pixel sequence across fixed-capacity frames and merging
//! frames back together.
//!
//! Frames carry an embedded index because they may pass through storage
//! whose enumeration order is unspecified (the staging directory, for one).
//! Reassembly is always by ascending numeric index, never by arrival order:
//! [`merge`] sorts its input and then requires the indices to be contiguous
//! from 0.

use crate::error::{ChunkError, Result};
use image::Rgb;

/// One frame's worth of pixels, tagged with its position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelChunk {
    /// 0-based frame index
    pub index: u32,

    /// Pixels for this frame, at most the frame capacity
    pub pixels: Vec<Rgb<u8>>,
}

impl PixelChunk {
    /// Create a chunk.
    pub fn new(index: u32, pixels: Vec<Rgb<u8>>) -> Self {
        Self { index, pixels }
    }
}

/// Partition pixels into consecutive chunks of at most `capacity` each.
///
/// The last chunk may be shorter. Chunk count is
/// `ceil(pixels.len() / capacity)`; an empty input yields no chunks.
///
/// # Errors
/// `ChunkError::ZeroCapacity` if `capacity` is 0.
pub fn split(pixels: &[Rgb<u8>], capacity: usize) -> Result<Vec<PixelChunk>> {
    if capacity == 0 {
        return Err(ChunkError::ZeroCapacity.into());
    }

    Ok(pixels
        .chunks(capacity)
        .enumerate()
        .map(|(index, chunk)| PixelChunk::new(index as u32, chunk.to_vec()))
        .collect())
}

/// Reassemble chunks into one pixel sequence by ascending embedded index.
///
/// Chunks may arrive in any order. After sorting, indices must be
/// contiguous starting at 0.
///
/// # Errors
/// - `ChunkError::DuplicateFrame` if an index appears twice
/// - `ChunkError::MissingFrame` if the index sequence has a gap
pub fn merge(mut chunks: Vec<PixelChunk>) -> Result<Vec<Rgb<u8>>> {
    chunks.sort_by_key(|chunk| chunk.index);

    for (expected, chunk) in chunks.iter().enumerate() {
        let expected = expected as u32;
        if chunk.index < expected {
            return Err(ChunkError::DuplicateFrame { index: chunk.index }.into());
        }
        if chunk.index > expected {
            return Err(ChunkError::MissingFrame { expected }.into());
        }
    }

    let total: usize = chunks.iter().map(|chunk| chunk.pixels.len()).sum();
    let mut pixels = Vec::with_capacity(total);
    for chunk in chunks {
        pixels.extend(chunk.pixels);
    }
    Ok(pixels)
}
