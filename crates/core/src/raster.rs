//! Bit-to-pixel mapping and canvas rendering.
//!
//! Every bit becomes one pixel: 0 is pure black, 1 is pure white. The
//! system never produces an intermediate tone. The inverse mapping is an
//! asymmetric threshold kept for bit-compatibility with existing
//! containers: a pixel that is exactly pure black reads as 0, and
//! *anything else* reads as 1, so any corruption away from pure black is
//! interpreted as a 1 bit.

use crate::error::{ChunkError, Result};
use image::{Rgb, RgbImage};

/// Bit 0 renders as pure black. Also the canvas padding filler: padding is
/// never read back past `payload_len`, so its value is irrelevant to
/// correctness.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Bit 1 renders as pure white.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// A frame resolution. Presets cover the supported container sizes; the
/// core accepts any positive width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// 3840x2160, about 8.3 Mbit per frame.
    pub const FOUR_K: Resolution = Resolution {
        width: 3840,
        height: 2160,
    };

    /// 1920x1080, about 2.1 Mbit per frame.
    pub const HD: Resolution = Resolution {
        width: 1920,
        height: 1080,
    };

    /// Create an arbitrary resolution.
    ///
    /// # Errors
    /// `ChunkError::ZeroCapacity` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ChunkError::ZeroCapacity.into());
        }
        Ok(Self { width, height })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (= bits) one frame holds.
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Map bits to pixels in order: 0 -> black, 1 -> white.
pub fn bits_to_pixels(sequence: &[u8]) -> Vec<Rgb<u8>> {
    sequence
        .iter()
        .map(|&bit| if bit == 0 { BLACK } else { WHITE })
        .collect()
}

/// Map pixels back to bits: exactly pure black -> 0, anything else -> 1.
pub fn pixels_to_bits(pixels: &[Rgb<u8>]) -> Vec<u8> {
    pixels
        .iter()
        .map(|&px| if px == BLACK { 0 } else { 1 })
        .collect()
}

/// Render one chunk of pixels onto a canvas, row-major from the top left.
///
/// Unused trailing pixels are filled with [`BLACK`]. The chunk must fit the
/// canvas; the chunker guarantees this.
pub fn render_canvas(pixels: &[Rgb<u8>], resolution: Resolution) -> RgbImage {
    debug_assert!(pixels.len() <= resolution.capacity());

    let mut canvas = RgbImage::from_pixel(resolution.width, resolution.height, BLACK);
    for (i, px) in pixels.iter().enumerate() {
        let x = i as u32 % resolution.width;
        let y = i as u32 / resolution.width;
        canvas.put_pixel(x, y, *px);
    }
    canvas
}

/// Read a canvas back as its row-major pixel sequence.
pub fn canvas_pixels(canvas: &RgbImage) -> Vec<Rgb<u8>> {
    canvas.pixels().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_bits_to_pixels_mapping() {
        assert_eq!(bits_to_pixels(&[0, 1, 1]), vec![BLACK, WHITE, WHITE]);
    }

    #[test]
    fn test_pixel_threshold_is_asymmetric() {
        // Only exact black reads as 0; any corruption reads as 1
        let pixels = vec![BLACK, WHITE, Rgb([1, 0, 0]), Rgb([128, 128, 128])];
        assert_eq!(pixels_to_bits(&pixels), vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_pixel_round_trip() {
        let sequence = vec![1, 0, 0, 1, 1, 0];
        assert_eq!(pixels_to_bits(&bits_to_pixels(&sequence)), sequence);
    }

    #[test]
    fn test_render_canvas_row_major_with_padding() {
        let resolution = Resolution::new(3, 2).unwrap();
        let canvas = render_canvas(&[WHITE, BLACK, WHITE, WHITE], resolution);

        assert_eq!(canvas.get_pixel(0, 0), &WHITE);
        assert_eq!(canvas.get_pixel(1, 0), &BLACK);
        assert_eq!(canvas.get_pixel(2, 0), &WHITE);
        assert_eq!(canvas.get_pixel(0, 1), &WHITE);
        // Padding beyond the chunk is black
        assert_eq!(canvas.get_pixel(1, 1), &BLACK);
        assert_eq!(canvas.get_pixel(2, 1), &BLACK);
    }

    #[test]
    fn test_canvas_pixels_round_trip() {
        let resolution = Resolution::new(4, 4).unwrap();
        let pixels: Vec<_> = (0..16)
            .map(|i| if i % 3 == 0 { BLACK } else { WHITE })
            .collect();
        let canvas = render_canvas(&pixels, resolution);
        assert_eq!(canvas_pixels(&canvas), pixels);
    }

    #[test]
    fn test_preset_capacities() {
        assert_eq!(Resolution::FOUR_K.capacity(), 3840 * 2160);
        assert_eq!(Resolution::HD.capacity(), 1920 * 1080);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Resolution::new(0, 10),
            Err(Error::Chunk(ChunkError::ZeroCapacity))
        ));
        assert!(matches!(
            Resolution::new(10, 0),
            Err(Error::Chunk(ChunkError::ZeroCapacity))
        ));
    }
}
