//! gifcrypt-core: encode arbitrary files into encrypted animated GIFs and
//! recover them bit-exactly.
//!
//! A file's bytes are expanded to bits, prefixed with a self-describing
//! header (filename + lengths), run through a two-stage cipher, rendered
//! as pure black/white pixels, split across fixed-resolution frames, and
//! assembled into one animated GIF. Decoding is the exact inverse.
//!
//! # Architecture
//!
//! The pipeline is built from clear module boundaries, leaves first:
//! - `bits`: byte <-> bit-sequence expansion (MSB-first)
//! - `header`: self-describing framing header with fixed-width bit fields
//! - `cipher`: pairwise substitution + keyed XOR stream, both self-inverse
//! - `raster`: bit <-> pixel mapping and canvas rendering
//! - `chunker`: splitting pixels across frames, index-ordered reassembly
//! - `container`: animated GIF serialization
//! - `pipeline`: the encode/decode entrypoints gluing the stages together
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Bit-exact round trip**: `decode(encode(bytes))` returns the bytes
//! - **Self-describing**: a container decodes with nothing but the key
//! - **Silent core**: the library never logs; entrypoints return reports
//!
//! The cipher is an obfuscation layer, not cryptography. Anyone with the
//! key recovers the file; anyone without it sees monochrome noise.

pub mod bits;
pub mod chunker;
pub mod cipher;
pub mod container;
pub mod error;
pub mod header;
pub mod pipeline;
pub mod raster;

// Re-export commonly used types
pub use cipher::CipherKey;
pub use error::{Error, Result};
pub use pipeline::{decode_file, encode_file, DecodeOptions, EncodeOptions};
pub use raster::Resolution;
