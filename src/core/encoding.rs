//! # Byte Encoding
//!
//! Fixed-width and byte-oriented encodings used when building inputs for
//! address derivation and on-chain key construction.
//!
//! All functions here are pure and keep no state.
//!
//! ## Text
//! [`encode_ascii`] and [`text_to_bytes`] emit one byte per character: the low
//! eight bits of its code point. Callers must pass 7/8-bit clean text; wider
//! characters are truncated, not rejected. Use [`encode_ascii_strict`] when the
//! input is not trusted.
//!
//! ## Integers
//! [`encode_u64_be`] writes exactly eight bytes, most significant first.
//! ```text
//! 1            -> [00 00 00 00 00 00 00 01]
//! 2^64 - 1     -> [FF FF FF FF FF FF FF FF]
//! 2^64         -> EncodingRange
//! ```

use crate::error::{constants, MarshalError, Result};
use std::fmt::Display;

/// Width of an encoded `u64` in bytes
pub const U64_WIDTH: usize = 8;

/// Largest code point that survives [`encode_ascii`] unchanged
pub const MAX_BYTE_CHAR: u32 = 0xFF;

/// Encode text as one byte per character, in input order.
///
/// Characters above U+00FF keep only their low byte.
pub fn encode_ascii(text: &str) -> Vec<u8> {
    text.chars().map(|c| c as u8).collect()
}

/// Alias of [`encode_ascii`] for call sites that convert labels and seeds
#[inline]
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    encode_ascii(text)
}

/// Checked variant of [`encode_ascii`].
///
/// Fails with [`MarshalError::EncodingRange`] on the first character that does
/// not fit in one byte.
pub fn encode_ascii_strict(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| {
            let code = u32::from(c);
            if code > MAX_BYTE_CHAR {
                Err(MarshalError::out_of_range(format!("U+{code:04X}"), 8))
            } else {
                Ok(c as u8)
            }
        })
        .collect()
}

/// Encode an unsigned 64-bit value as eight big-endian bytes.
///
/// Any integer type is accepted; negative values and values of 2^64 or more
/// fail with [`MarshalError::EncodingRange`].
pub fn encode_u64_be<V>(value: V) -> Result<[u8; U64_WIDTH]>
where
    V: TryInto<u64> + Display + Copy,
{
    match value.try_into() {
        Ok(v) => Ok(v.to_be_bytes()),
        Err(_) => Err(MarshalError::out_of_range(value, 64)),
    }
}

/// Encode a decimal integer of arbitrary length as eight big-endian bytes.
///
/// The text must be a non-empty run of ASCII digits.
pub fn encode_u64_be_decimal(text: &str) -> Result<[u8; U64_WIDTH]> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MarshalError::out_of_range(
            format!("{text:?} ({})", constants::ERR_NOT_DECIMAL),
            64,
        ));
    }

    // digits only, so the single failure mode left is overflow
    text.parse::<u64>()
        .map(u64::to_be_bytes)
        .map_err(|_| MarshalError::out_of_range(text, 64))
}
