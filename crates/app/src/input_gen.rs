//! Sample input generation for the demo mode.
//!
//! When no file is specified, we generate a sample with recognizably mixed
//! content: readable text sections and binary sections. Recovering it and
//! comparing against the original makes the round trip easy to eyeball.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;

const WORDS: &[&str] = &[
    "frame", "pixel", "cipher", "header", "payload", "canvas", "stream", "binary", "black",
    "white", "index", "chunk",
];

/// Generate sample bytes with mixed text and binary sections.
///
/// Deterministic for a given seed and size.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        match rng.gen_range(0..3u8) {
            // Word-salad text section
            0 => {
                for _ in 0..rng.gen_range(20..80) {
                    let word = WORDS[rng.gen_range(0..WORDS.len())];
                    data.extend_from_slice(word.as_bytes());
                    data.push(b' ');
                }
                data.push(b'\n');
            }

            // Run of one byte value
            1 => {
                let value: u8 = rng.gen();
                let run = rng.gen_range(64..512);
                data.extend(std::iter::repeat(value).take(run));
            }

            // Raw binary section
            _ => {
                for _ in 0..rng.gen_range(64..512) {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size_bytes);
    data
}

/// Write generated sample data to a file.
pub fn write_sample_file(
    path: &std::path::Path,
    seed: u64,
    size_bytes: usize,
) -> std::io::Result<()> {
    let data = generate_sample_data(seed, size_bytes);
    let mut file = std::fs::File::create(path)?;
    file.write_all(&data)?;
    Ok(())
}
