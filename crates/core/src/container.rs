//! Animated container serialization.
//!
//! The container is an animated GIF: each canvas becomes one frame,
//! displayed for a fixed duration, and the stored frame order is
//! authoritative on read. Index-based reordering happens earlier, while
//! frames still live as separate numbered rasters in the staging
//! directory; by the time they reach this layer they are already ordered.
//!
//! The rest of the pipeline is agnostic to the container format. Only this
//! module names GIF.

use crate::error::{ContainerError, Result};
use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, Delay, DynamicImage, Frame, RgbImage};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

/// File extension for containers.
pub const CONTAINER_EXT: &str = "gif";

/// Default per-frame display duration.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(100);

/// Serialize ordered canvases as successive frames of one animated GIF.
///
/// # Arguments
/// - `path`: output container path
/// - `canvases`: frames in display order; all the same size
/// - `frame_duration`: per-frame display duration
///
/// # Errors
/// `ContainerError::WriteFailed` on encoding failure, `Error::Io` if the
/// file cannot be created.
pub fn write(path: &Path, canvases: Vec<RgbImage>, frame_duration: Duration) -> Result<()> {
    let file = File::create(path)?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|source| ContainerError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let delay = Delay::from_saturating_duration(frame_duration);
    for canvas in canvases {
        let frame = Frame::from_parts(DynamicImage::ImageRgb8(canvas).into_rgba8(), 0, 0, delay);
        encoder
            .encode_frame(frame)
            .map_err(|source| ContainerError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
    }
    Ok(())
}

/// Deserialize every frame of a container, in stored order.
///
/// # Errors
/// - `ContainerError::Unreadable` if the file cannot be opened or decoded
/// - `ContainerError::Empty` if it holds no frames
pub fn read(path: &Path) -> Result<Vec<RgbImage>> {
    let file = File::open(path).map_err(|e| ContainerError::Unreadable {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(e),
    })?;

    let decoder =
        GifDecoder::new(BufReader::new(file)).map_err(|source| ContainerError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let frames =
        decoder
            .into_frames()
            .collect_frames()
            .map_err(|source| ContainerError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;

    if frames.is_empty() {
        return Err(ContainerError::Empty {
            path: path.to_path_buf(),
        }
        .into());
    }

    Ok(frames
        .into_iter()
        .map(|frame| DynamicImage::ImageRgba8(frame.into_buffer()).to_rgb8())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{render_canvas, Resolution, BLACK, WHITE};
    use image::Rgb;

    fn checker_canvas(resolution: Resolution, phase: usize) -> RgbImage {
        let pixels: Vec<Rgb<u8>> = (0..resolution.capacity())
            .map(|i| if (i + phase) % 2 == 0 { BLACK } else { WHITE })
            .collect();
        render_canvas(&pixels, resolution)
    }

    #[test]
    fn test_write_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames.gif");
        let resolution = Resolution::new(8, 6).unwrap();

        let canvases: Vec<_> = (0..4).map(|i| checker_canvas(resolution, i)).collect();
        write(&path, canvases.clone(), DEFAULT_FRAME_DURATION).unwrap();

        let recovered = read(&path).unwrap();
        assert_eq!(recovered.len(), 4);

        // Stored order is authoritative and pixels survive exactly
        for (canvas, original) in recovered.iter().zip(&canvases) {
            assert_eq!(canvas.dimensions(), original.dimensions());
            assert_eq!(canvas.as_raw(), original.as_raw());
        }
    }

    #[test]
    fn test_single_frame_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.gif");
        let resolution = Resolution::new(4, 4).unwrap();

        write(
            &path,
            vec![checker_canvas(resolution, 0)],
            DEFAULT_FRAME_DURATION,
        )
        .unwrap();

        assert_eq!(read(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_container_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let result = read(&dir.path().join("nope.gif"));
        assert!(matches!(
            result,
            Err(crate::error::Error::Container(ContainerError::Unreadable { .. }))
        ));
    }

    #[test]
    fn test_garbage_container_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.gif");
        std::fs::write(&path, b"definitely not a gif").unwrap();

        let result = read(&path);
        assert!(matches!(
            result,
            Err(crate::error::Error::Container(ContainerError::Unreadable { .. }))
        ));
    }
}
