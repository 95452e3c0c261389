//! Byte-to-bit expansion and contraction.
//!
//! The whole pipeline works on unpacked bit sequences: a `Vec<u8>` whose
//! elements are all 0 or 1. Bytes expand MSB-first, so `0x41` becomes
//! `0 1 0 0 0 0 0 1` in that order.
//!
//! # Truncation Policy
//!
//! `bits_to_bytes` groups bits into 8-bit chunks from index 0 and silently
//! drops a trailing partial group. Callers that need byte alignment enforced
//! validate it themselves (the header parser raises
//! `BitsError::MalformedLength` before converting a filename). On the decode
//! path the payload is always sliced to an exact multiple of 8, so the drop
//! never loses payload data.

/// Expand bytes into an unpacked bit sequence, MSB-first.
///
/// Output length is exactly `8 * bytes.len()`. Never fails.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Pack an unpacked bit sequence back into bytes, MSB-first.
///
/// Groups of 8 are consumed from index 0; a trailing group of fewer than
/// 8 bits is dropped (see module docs for the policy).
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|group| group.iter().fold(0u8, |byte, &bit| (byte << 1) | bit))
        .collect()
}
