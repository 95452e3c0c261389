//! Two-stage bit cipher: pairwise substitution composed with a keyed
//! XOR stream.
//!
//! Both stages are fixed-function and individually self-inverse:
//!
//! 1. **Pairwise substitution** — the bit sequence is split into
//!    non-overlapping 2-bit pairs from index 0 and each pair is replaced
//!    under the fixed permutation `00↔11, 01↔10`. Applying it twice is the
//!    identity on even-length sequences.
//! 2. **Keyed XOR stream** — the key bits repeat to the data length and each
//!    data bit is XORed with the key bit at its index. Its own inverse for
//!    a fixed key.
//!
//! Encode order is substitution then stream; decode is stream then
//! substitution.
//!
//! # Dangling Bit
//!
//! An odd-length input to [`substitute`] loses its final bit: the dangling
//! bit is dropped, not carried through, and is NOT reinserted on decode.
//! The pipeline never feeds the cipher an odd-length sequence (header plus
//! byte payload is always even), but callers using the stage directly must
//! accept this lossy edge.
//!
//! This scheme is an obfuscation layer, not real cryptography: the
//! substitution is keyless and the stream is a short-period repeating XOR.

use crate::error::{CipherError, Result};

/// A non-empty repeating binary key for the XOR stream stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherKey {
    bits: Vec<u8>,
}

impl CipherKey {
    /// Build a key from raw bits.
    ///
    /// # Errors
    /// `CipherError::EmptyKey` if `bits` is empty. Values must already be
    /// 0 or 1; this is debug-asserted, not validated.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if bits.is_empty() {
            return Err(CipherError::EmptyKey.into());
        }
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Ok(Self { bits })
    }

    /// Parse a key from a string of '0'/'1' digits, e.g. `"1010"`.
    ///
    /// # Errors
    /// - `CipherError::InvalidKeyDigit` for any other character
    /// - `CipherError::EmptyKey` for an empty string
    pub fn parse(digits: &str) -> Result<Self> {
        let bits = digits
            .chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(CipherError::InvalidKeyDigit { digit: other }),
            })
            .collect::<std::result::Result<Vec<u8>, _>>()?;
        Self::from_bits(bits)
    }

    /// Derive a key from a textual passphrase, one bit pair per character.
    ///
    /// Each character contributes the two low bits of its code point, high
    /// bit first. The derivation only needs to be deterministic and
    /// non-empty; it carries no cryptographic weight.
    ///
    /// # Errors
    /// `CipherError::EmptyKey` for an empty passphrase.
    pub fn from_text(passphrase: &str) -> Result<Self> {
        let mut bits = Vec::with_capacity(passphrase.chars().count() * 2);
        for c in passphrase.chars() {
            let code = c as u32;
            bits.push(((code >> 1) & 1) as u8);
            bits.push((code & 1) as u8);
        }
        Self::from_bits(bits)
    }

    /// The key bits.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Number of bits in the key.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false; keys are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Apply the fixed pairwise substitution `00↔11, 01↔10`.
///
/// Self-inverse on even-length input. A dangling final bit is dropped
/// (see module docs).
pub fn substitute(sequence: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(sequence.len() & !1);
    for pair in sequence.chunks_exact(2) {
        // Each entry of the 4-pair table is the bitwise complement of its key
        out.push(pair[0] ^ 1);
        out.push(pair[1] ^ 1);
    }
    out
}

/// XOR the sequence with the key repeated to the data length.
///
/// Self-inverse for a fixed key; encrypt and decrypt share this function.
pub fn xor_stream(sequence: &[u8], key: &CipherKey) -> Vec<u8> {
    sequence
        .iter()
        .zip(key.bits().iter().cycle())
        .map(|(&bit, &key_bit)| bit ^ key_bit)
        .collect()
}

/// Encrypt: substitution, then keyed stream.
pub fn encrypt(sequence: &[u8], key: &CipherKey) -> Vec<u8> {
    xor_stream(&substitute(sequence), key)
}

/// Decrypt: inverse stream (same operation), then inverse substitution
/// (same operation).
pub fn decrypt(sequence: &[u8], key: &CipherKey) -> Vec<u8> {
    substitute(&xor_stream(sequence, key))
}
