//! End-to-end encode and decode entrypoints.
//!
//! Encode: file bytes -> bits -> header prepend -> cipher -> pixels ->
//! frame chunks -> staged per-frame rasters -> animated container.
//! Decode runs the exact inverse.
//!
//! The pipeline is single-threaded and sequential: each stage fully
//! consumes its predecessor's output. The staging directory in
//! [`EncodeOptions::workdir`] is owned exclusively by one invocation at a
//! time; callers running encodes concurrently must hand each one its own
//! directory.
//!
//! The core never prints or logs; each entrypoint returns a report struct
//! with the numbers a caller might want to show.

use crate::cipher::CipherKey;
use crate::container::CONTAINER_EXT;
use crate::error::{ContainerError, Error, Result};
use crate::raster::Resolution;
use crate::{bits, chunker, cipher, container, header, raster};
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Options for one encode invocation.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Frame resolution (capacity = width * height bits per frame)
    pub resolution: Resolution,

    /// Per-frame display duration in the container
    pub frame_duration: Duration,

    /// Scratch directory for staged per-frame rasters; exclusively owned
    /// by this invocation
    pub workdir: PathBuf,

    /// Directory the container is written into
    pub output_dir: PathBuf,
}

/// Options for one decode invocation.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Directory the recovered file is written into
    pub output_dir: PathBuf,
}

/// What an encode produced.
#[derive(Debug, Clone)]
pub struct EncodeReport {
    /// Path of the written container
    pub container_path: PathBuf,

    /// Bytes read from the source file
    pub source_bytes: u64,

    /// Bits after header prepend and encryption (= pixels rendered)
    pub total_bits: u64,

    /// Frames in the container
    pub frames: u32,

    /// Wall time for the whole encode
    pub elapsed: Duration,
}

/// What a decode produced.
#[derive(Debug, Clone)]
pub struct DecodeReport {
    /// Path of the recovered file
    pub recovered_path: PathBuf,

    /// Bytes written to the recovered file
    pub recovered_bytes: u64,

    /// Frames read from the container
    pub frames: u32,

    /// Wall time for the whole decode
    pub elapsed: Duration,
}

/// Encode a file into an animated container.
///
/// The container is named `<source basename>.gif` inside
/// `options.output_dir`.
///
/// # Errors
/// - `Error::UnreadableSource` if the source cannot be read
/// - any pipeline-stage error (header overflow, container write failure)
pub fn encode_file(
    source: &Path,
    key: &CipherKey,
    options: &EncodeOptions,
) -> Result<EncodeReport> {
    let started = Instant::now();

    let data = fs::read(source).map_err(|e| Error::UnreadableSource {
        path: source.to_path_buf(),
        source: e,
    })?;
    let basename = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "default_name".to_string());

    let payload = bits::bytes_to_bits(&data);
    let framed = header::encode_header(&payload, &basename)?;
    let sealed = cipher::encrypt(&framed, key);
    let total_bits = sealed.len() as u64;

    let pixels = raster::bits_to_pixels(&sealed);
    let chunks = chunker::split(&pixels, options.resolution.capacity())?;
    let frames = chunks.len() as u32;

    // Stage every frame as <basename>-<index>.png in the workdir
    prepare_workdir(&options.workdir)?;
    for chunk in &chunks {
        let canvas = raster::render_canvas(&chunk.pixels, options.resolution);
        let frame_path = options
            .workdir
            .join(format!("{}-{}.png", basename, chunk.index));
        canvas
            .save(&frame_path)
            .map_err(|source| ContainerError::WriteFailed {
                path: frame_path.clone(),
                source,
            })?;
    }

    // Gather staged frames by embedded index; directory enumeration order
    // is unspecified
    let staged = collect_staged(&options.workdir)?;
    let canvases = order_staged(staged)?;

    fs::create_dir_all(&options.output_dir)?;
    let container_path = options
        .output_dir
        .join(format!("{}.{}", basename, CONTAINER_EXT));
    container::write(&container_path, canvases, options.frame_duration)?;

    Ok(EncodeReport {
        container_path,
        source_bytes: data.len() as u64,
        total_bits,
        frames,
        elapsed: started.elapsed(),
    })
}

/// Decode an animated container back into the original file.
///
/// The recovered file is named `<stem>-recovered.<ext>` inside
/// `options.output_dir`, where the stem and extension come from the
/// decoded filename; a name without a dot gets the extension `bin`.
///
/// # Errors
/// - `ContainerError::Unreadable` if the container cannot be read
/// - `HeaderError::TruncatedHeader` / `TruncatedPayload` if the container
///   holds fewer bits than its header claims (corruption and a wrong key
///   or resolution are indistinguishable here and report the same way)
pub fn decode_file(
    container_path: &Path,
    key: &CipherKey,
    options: &DecodeOptions,
) -> Result<DecodeReport> {
    let started = Instant::now();

    let canvases = container::read(container_path)?;
    let frames = canvases.len() as u32;

    // Stored order is authoritative at the container layer
    let chunks: Vec<_> = canvases
        .iter()
        .enumerate()
        .map(|(i, canvas)| chunker::PixelChunk::new(i as u32, raster::canvas_pixels(canvas)))
        .collect();
    let pixels = chunker::merge(chunks)?;

    let sealed = raster::pixels_to_bits(&pixels);
    let opened = cipher::decrypt(&sealed, key);
    let (filename, payload) = header::decode_header(&opened)?;
    let data = bits::bits_to_bytes(&payload);

    fs::create_dir_all(&options.output_dir)?;
    let recovered_path = options.output_dir.join(recovered_filename(&filename));
    fs::write(&recovered_path, &data)?;

    Ok(DecodeReport {
        recovered_path,
        recovered_bytes: data.len() as u64,
        frames,
        elapsed: started.elapsed(),
    })
}

/// Create the staging directory and clear stale staged frames from a
/// previous aborted run.
fn prepare_workdir(workdir: &Path) -> Result<()> {
    fs::create_dir_all(workdir)?;
    for entry in fs::read_dir(workdir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "png") {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Load every staged frame in the workdir together with its embedded index.
///
/// Returned in directory enumeration order, which is unspecified.
fn collect_staged(workdir: &Path) -> Result<Vec<(u32, RgbImage)>> {
    let mut staged = Vec::new();
    for entry in fs::read_dir(workdir)? {
        let path = entry?.path();
        if !path.extension().is_some_and(|ext| ext == "png") {
            continue;
        }

        let index = frame_index(&path).ok_or_else(|| ContainerError::BadFrameName {
            path: path.clone(),
        })?;
        let canvas = image::open(&path)
            .map_err(|source| ContainerError::Unreadable {
                path: path.clone(),
                source,
            })?
            .to_rgb8();
        staged.push((index, canvas));
    }
    Ok(staged)
}

/// Parse the frame index out of a staged `<basename>-<index>.png` name.
///
/// The basename itself may contain `-`, so the index is taken from the
/// last dash.
fn frame_index(path: &Path) -> Option<u32> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".png")?;
    let (_, index) = stem.rsplit_once('-')?;
    index.parse().ok()
}

/// Sort staged frames by embedded index and require the sequence to be
/// contiguous from 0.
fn order_staged(mut staged: Vec<(u32, RgbImage)>) -> Result<Vec<RgbImage>> {
    staged.sort_by_key(|(index, _)| *index);

    for (expected, (index, _)) in staged.iter().enumerate() {
        let expected = expected as u32;
        if *index < expected {
            return Err(crate::error::ChunkError::DuplicateFrame { index: *index }.into());
        }
        if *index > expected {
            return Err(crate::error::ChunkError::MissingFrame { expected }.into());
        }
    }

    Ok(staged.into_iter().map(|(_, canvas)| canvas).collect())
}

/// Build the recovered-file name: first-dot stem plus `-recovered` plus the
/// last-dot extension, defaulting to `bin` when the name has no dot.
fn recovered_filename(name: &str) -> String {
    if name.contains('.') {
        let stem = name.split('.').next().unwrap_or(name);
        let ext = name.rsplit('.').next().unwrap_or("bin");
        format!("{stem}-recovered.{ext}")
    } else {
        format!("{name}-recovered.bin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovered_filename() {
        assert_eq!(recovered_filename("t.bin"), "t-recovered.bin");
        assert_eq!(recovered_filename("song.mp3"), "song-recovered.mp3");
        assert_eq!(recovered_filename("archive.tar.gz"), "archive-recovered.gz");
        assert_eq!(recovered_filename("noext"), "noext-recovered.bin");
    }

    #[test]
    fn test_frame_index_parsing() {
        assert_eq!(frame_index(Path::new("/tmp/t.bin-7.png")), Some(7));
        assert_eq!(frame_index(Path::new("my-file.txt-12.png")), Some(12));
        assert_eq!(frame_index(Path::new("noindex.png")), None);
        assert_eq!(frame_index(Path::new("t.bin-x.png")), None);
    }

    #[test]
    fn test_order_staged_rejects_gap() {
        let canvas = RgbImage::from_pixel(1, 1, crate::raster::BLACK);
        let staged = vec![(0, canvas.clone()), (2, canvas)];
        assert!(order_staged(staged).is_err());
    }
}
