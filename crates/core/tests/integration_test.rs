//! Integration tests for the full gifcrypt pipeline.
//!
//! These verify end-to-end behavior: source file -> bits -> header ->
//! cipher -> pixels -> frames -> container, and back, with the output
//! compared byte-for-byte against the input.

use gifcrypt_core::{
    container, decode_file, encode_file, CipherKey, DecodeOptions, EncodeOptions, Resolution,
};
use std::fs;
use std::path::Path;
use std::time::Duration;

fn encode_options(root: &Path, resolution: Resolution) -> EncodeOptions {
    EncodeOptions {
        resolution,
        frame_duration: Duration::from_millis(100),
        workdir: root.join("stage"),
        output_dir: root.join("out"),
    }
}

fn decode_options(root: &Path) -> DecodeOptions {
    DecodeOptions {
        output_dir: root.join("recovered"),
    }
}

#[test]
fn test_full_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    // Mixed text and binary content
    let mut data = b"The quick brown fox jumps over the lazy dog. ".repeat(20);
    data.extend((0..=255u8).cycle().take(1000));

    let source = root.join("report.txt");
    fs::write(&source, &data).unwrap();

    let key = CipherKey::from_text("SECRET").unwrap();
    let resolution = Resolution::new(40, 30).unwrap();

    let encoded = encode_file(&source, &key, &encode_options(root, resolution)).unwrap();
    assert_eq!(encoded.source_bytes, data.len() as u64);
    assert_eq!(
        encoded.container_path.file_name().unwrap(),
        "report.txt.gif"
    );

    // Header: 16 + 80 ("report.txt" is 10 bytes) + 64 bits, then the payload
    let expected_bits = 160 + 8 * data.len() as u64;
    assert_eq!(encoded.total_bits, expected_bits);
    let expected_frames = (expected_bits as usize).div_ceil(resolution.capacity()) as u32;
    assert_eq!(encoded.frames, expected_frames);

    let decoded = decode_file(&encoded.container_path, &key, &decode_options(root)).unwrap();
    assert_eq!(decoded.frames, encoded.frames);
    assert_eq!(
        decoded.recovered_path.file_name().unwrap(),
        "report-recovered.txt"
    );

    let recovered = fs::read(&decoded.recovered_path).unwrap();
    assert_eq!(recovered, data, "round trip must be bit-exact");
}

/// Encoding 3 bytes as "t.bin" at 2x2 must give exactly 36 frames:
/// header 16 + 40 + 64 = 120 bits, payload 24 bits, 144 / 4 = 36.
#[test]
fn test_concrete_36_frame_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let source = root.join("t.bin");
    fs::write(&source, [0x41, 0x42, 0x43]).unwrap();

    let key = CipherKey::parse("1010").unwrap();
    let resolution = Resolution::new(2, 2).unwrap();

    let encoded = encode_file(&source, &key, &encode_options(root, resolution)).unwrap();
    assert_eq!(encoded.total_bits, 144);
    assert_eq!(encoded.frames, 36);

    let decoded = decode_file(&encoded.container_path, &key, &decode_options(root)).unwrap();
    assert_eq!(decoded.frames, 36);
    assert_eq!(
        decoded.recovered_path.file_name().unwrap(),
        "t-recovered.bin"
    );
    assert_eq!(fs::read(&decoded.recovered_path).unwrap(), [0x41, 0x42, 0x43]);
}

/// Removing the container's last frame must surface as TruncatedPayload,
/// never a silently short file.
#[test]
fn test_truncated_container_detected() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let source = root.join("t.bin");
    fs::write(&source, [0x41, 0x42, 0x43]).unwrap();

    let key = CipherKey::parse("1010").unwrap();
    let resolution = Resolution::new(2, 2).unwrap();
    let encoded = encode_file(&source, &key, &encode_options(root, resolution)).unwrap();

    // Re-write the container without its final frame
    let mut frames = container::read(&encoded.container_path).unwrap();
    frames.pop();
    assert_eq!(frames.len(), 35);
    let truncated_path = root.join("truncated.gif");
    container::write(&truncated_path, frames, Duration::from_millis(100)).unwrap();

    let result = decode_file(&truncated_path, &key, &decode_options(root));
    assert!(matches!(
        result,
        Err(gifcrypt_core::Error::Header(
            gifcrypt_core::error::HeaderError::TruncatedPayload {
                required: 24,
                available: 20,
            }
        ))
    ));
}

/// A wrong key garbles the header lengths; the decode must fail rather
/// than produce a wrong file. Complementary keys flip every bit, which
/// makes the claimed name length far larger than the container.
#[test]
fn test_wrong_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let source = root.join("small.txt");
    fs::write(&source, b"short payload").unwrap();

    let key = CipherKey::parse("10").unwrap();
    let resolution = Resolution::new(16, 16).unwrap();
    let encoded = encode_file(&source, &key, &encode_options(root, resolution)).unwrap();

    let wrong_key = CipherKey::parse("01").unwrap();
    let result = decode_file(&encoded.container_path, &wrong_key, &decode_options(root));
    assert!(result.is_err(), "wrong key must not decode successfully");
}

#[test]
fn test_empty_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let source = root.join("empty.dat");
    fs::write(&source, []).unwrap();

    let key = CipherKey::from_text("k").unwrap();
    let resolution = Resolution::new(8, 8).unwrap();

    let encoded = encode_file(&source, &key, &encode_options(root, resolution)).unwrap();
    // Header only: 16 + 72 + 64 = 152 bits over 64-bit frames
    assert_eq!(encoded.total_bits, 152);
    assert_eq!(encoded.frames, 3);

    let decoded = decode_file(&encoded.container_path, &key, &decode_options(root)).unwrap();
    assert_eq!(decoded.recovered_bytes, 0);
    assert!(fs::read(&decoded.recovered_path).unwrap().is_empty());
}

#[test]
fn test_missing_source_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let key = CipherKey::from_text("k").unwrap();
    let resolution = Resolution::new(8, 8).unwrap();

    let result = encode_file(
        &root.join("does-not-exist.bin"),
        &key,
        &encode_options(root, resolution),
    );
    assert!(matches!(
        result,
        Err(gifcrypt_core::Error::UnreadableSource { .. })
    ));
}

/// The filename travels inside the container and is sanitized on the way
/// out.
#[test]
fn test_filename_sanitization_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let source = root.join("my file (copy).txt");
    fs::write(&source, b"payload").unwrap();

    let key = CipherKey::from_text("SECRET").unwrap();
    let resolution = Resolution::new(16, 16).unwrap();

    let encoded = encode_file(&source, &key, &encode_options(root, resolution)).unwrap();
    let decoded = decode_file(&encoded.container_path, &key, &decode_options(root)).unwrap();

    assert_eq!(
        decoded.recovered_path.file_name().unwrap(),
        "my_file__copy_-recovered.txt"
    );
    assert_eq!(fs::read(&decoded.recovered_path).unwrap(), b"payload");
}
