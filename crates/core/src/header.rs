//! Self-describing header prefixed to every payload.
//!
//! The header makes a container decodable without out-of-band metadata:
//! it carries the original filename and the exact payload bit length.
//!
//! # Header Format (bit offsets)
//!
//! ```text
//! +--------------------+
//! | name_len (16 bits) |  big-endian bit length of the encoded filename
//! +--------------------+
//! | name               |  filename bytes expanded MSB-first (name_len bits)
//! | (variable)         |
//! +--------------------+
//! | payload_len (64)   |  big-endian bit length of the payload
//! +--------------------+
//! | payload            |  payload_len bits; anything beyond is ignored
//! | (variable)         |
//! +--------------------+
//! ```
//!
//! Both length fields are fixed-width big-endian bit strings regardless of
//! value magnitude. A filename whose encoded bit length exceeds 65535 cannot
//! be framed.
//!
//! # Filename Recovery
//!
//! On decode the filename bytes must be valid UTF-8; otherwise the name
//! falls back to the literal `"default_name"`. Either way, every character
//! outside `[A-Za-z0-9_.]` is replaced with `_` before the name is used.

use crate::bits;
use crate::error::{BitsError, HeaderError, Result};

/// Width of the filename length field, in bits.
const NAME_LEN_BITS: usize = 16;

/// Width of the payload length field, in bits.
const PAYLOAD_LEN_BITS: usize = 64;

/// Name used when the decoded filename bytes are not valid UTF-8.
const FALLBACK_NAME: &str = "default_name";

/// Prepend the framing header to a payload bit sequence.
///
/// # Arguments
/// - `payload`: unpacked payload bits
/// - `filename`: original file name, encoded as its UTF-8 bytes
///
/// # Returns
/// `header ++ payload` as one bit sequence.
///
/// # Errors
/// `HeaderError::Overflow` if the filename's encoded bit length does not
/// fit in 16 bits.
pub fn encode_header(payload: &[u8], filename: &str) -> Result<Vec<u8>> {
    let name_bits = bits::bytes_to_bits(filename.as_bytes());
    if name_bits.len() > (1 << NAME_LEN_BITS) - 1 {
        return Err(HeaderError::Overflow {
            bits: name_bits.len(),
        }
        .into());
    }

    let mut out =
        Vec::with_capacity(NAME_LEN_BITS + name_bits.len() + PAYLOAD_LEN_BITS + payload.len());
    push_fixed(&mut out, name_bits.len() as u64, NAME_LEN_BITS);
    out.extend_from_slice(&name_bits);
    push_fixed(&mut out, payload.len() as u64, PAYLOAD_LEN_BITS);
    out.extend_from_slice(payload);
    Ok(out)
}

/// Parse the framing header and slice out exactly the payload it promises.
///
/// Bits beyond `payload_len` are ignored (canvas padding ends up there).
///
/// # Errors
/// - `HeaderError::TruncatedHeader` if fewer than `16 + name_len + 64` bits
///   are available
/// - `BitsError::MalformedLength` if `name_len` is not a multiple of 8
/// - `HeaderError::TruncatedPayload` if fewer than `payload_len` bits follow
///   the header
pub fn decode_header(sequence: &[u8]) -> Result<(String, Vec<u8>)> {
    if sequence.len() < NAME_LEN_BITS {
        return Err(HeaderError::TruncatedHeader {
            required: NAME_LEN_BITS,
            available: sequence.len(),
        }
        .into());
    }

    let name_len = read_fixed(&sequence[..NAME_LEN_BITS]) as usize;

    let header_len = NAME_LEN_BITS + name_len + PAYLOAD_LEN_BITS;
    if sequence.len() < header_len {
        return Err(HeaderError::TruncatedHeader {
            required: header_len,
            available: sequence.len(),
        }
        .into());
    }

    if name_len % 8 != 0 {
        return Err(BitsError::MalformedLength { len: name_len }.into());
    }

    let name_bits = &sequence[NAME_LEN_BITS..NAME_LEN_BITS + name_len];
    let payload_len_bits = &sequence[NAME_LEN_BITS + name_len..header_len];
    let payload_len = read_fixed(payload_len_bits) as usize;

    let available = sequence.len() - header_len;
    if available < payload_len {
        return Err(HeaderError::TruncatedPayload {
            required: payload_len,
            available,
        }
        .into());
    }

    let filename = match String::from_utf8(bits::bits_to_bytes(name_bits)) {
        Ok(name) => sanitize(&name),
        Err(_) => FALLBACK_NAME.to_string(),
    };

    let payload = sequence[header_len..header_len + payload_len].to_vec();
    Ok((filename, payload))
}

/// Append `value` as a fixed-width big-endian bit string.
fn push_fixed(out: &mut Vec<u8>, value: u64, width: usize) {
    for shift in (0..width).rev() {
        out.push(((value >> shift) & 1) as u8);
    }
}

/// Read a fixed-width big-endian bit string as an integer.
///
/// Caller guarantees `field.len() <= 64`.
fn read_fixed(field: &[u8]) -> u64 {
    field.iter().fold(0u64, |acc, &bit| (acc << 1) | bit as u64)
}

/// Replace every character outside `[A-Za-z0-9_.]` with `_`.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
