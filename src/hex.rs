//! Constant-time hexadecimal encoding
//!
//! Both directions avoid lookup tables and value-dependent branches, so the
//! running time and memory access pattern of encoding or decoding secret
//! material does not depend on its content.
//!
//! # Example
//!
//! ```
//! use cookie_signer::hex::{self, Padding};
//!
//! let encoded = hex::encode(&[0xde, 0xad, 0xbe, 0xef]);
//! assert_eq!(encoded, "deadbeef");
//! assert_eq!(hex::decode(&encoded, Padding::Strict).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
//!
//! // Odd-length input gains a leading zero nibble unless strict
//! assert_eq!(hex::decode("abc", Padding::Lenient).unwrap(), vec![0x0a, 0xbc]);
//! assert!(hex::decode("abc", Padding::Strict).is_err());
//! ```

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("Invalid hex character at index {index}")]
    InvalidCharacter { index: usize },

    #[error("Hex string has odd length {len}")]
    OddLength { len: usize },
}

/// Handling of odd-length input in [`decode`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Padding {
    /// Left-pad with a `'0'` before decoding
    #[default]
    Lenient,
    /// Reject with [`HexError::OddLength`]
    Strict,
}

/// Map a nibble (0..=15) to its lowercase hex character
///
/// `(n - 10) >> 8` is all ones for `n < 10` and zero otherwise, which selects
/// between the `'0'` and `'a'` bases without a branch.
#[inline]
fn encode_nibble(n: u8) -> u8 {
    let n = i32::from(n);
    (87 + n + (((n - 10) >> 8) & !38)) as u8
}

/// Map a hex character to `(value, valid)`
///
/// `valid` is `0xff` for `0-9`, `a-f` and `A-F`, and `0` for anything else.
/// The digit and letter masks are computed in parallel and merged with bit
/// operations only.
#[inline]
fn decode_nibble(c: u8) -> (u8, u8) {
    let c = i32::from(c);

    let num = c ^ 48;
    let num_mask = ((num - 10) >> 8) & 0xff;

    let alpha = (c & !32) - 55;
    let alpha_mask = (((alpha - 10) ^ (alpha - 16)) >> 8) & 0xff;

    let value = (num_mask & num) | (alpha_mask & alpha);
    (value as u8, (num_mask | alpha_mask) as u8)
}

/// Encode bytes as a lowercase hex string
pub fn encode(bytes: &[u8]) -> String {
    let mut out = Vec::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(encode_nibble(b >> 4));
        out.push(encode_nibble(b & 0x0f));
    }
    // Every byte pushed above is in [0-9a-f]
    out.into_iter().map(char::from).collect()
}

/// Decode a hex string (either case)
///
/// Every character is processed before validity is checked; on failure the
/// error names the first offending index of the original input.
pub fn decode(input: &str, padding: Padding) -> Result<Vec<u8>, HexError> {
    let bytes = input.as_bytes();
    let odd = bytes.len() % 2 == 1;

    if odd && padding == Padding::Strict {
        return Err(HexError::OddLength { len: bytes.len() });
    }

    let mut padded;
    let digits: &[u8] = if odd {
        padded = Vec::with_capacity(bytes.len() + 1);
        padded.push(b'0');
        padded.extend_from_slice(bytes);
        &padded
    } else {
        bytes
    };

    let mut out = Vec::with_capacity(digits.len() / 2);
    let mut valid = 0xffu8;
    for pair in digits.chunks_exact(2) {
        let (hi, hi_ok) = decode_nibble(pair[0]);
        let (lo, lo_ok) = decode_nibble(pair[1]);
        valid &= hi_ok & lo_ok;
        out.push((hi << 4) | lo);
    }

    if valid != 0xff {
        let index = bytes
            .iter()
            .position(|&c| decode_nibble(c).1 == 0)
            .unwrap_or_default();
        return Err(HexError::InvalidCharacter { index });
    }

    Ok(out)
}
