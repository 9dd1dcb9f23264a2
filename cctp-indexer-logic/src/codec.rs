//! Big-endian byte layout helpers shared by the message decoder and the
//! identifier deriver.

use alloy::primitives::B256;

use crate::error::CodecError;

/// Width of a single ABI word.
pub const WORD: usize = 32;

/// Returns a `length`-byte buffer with `data` right-aligned and zeros in front.
///
/// Inputs longer than `length` are rejected rather than truncated, since a
/// truncated field would silently change any identifier derived from it.
pub fn left_pad(data: &[u8], length: usize) -> Result<Vec<u8>, CodecError> {
    if data.len() > length {
        return Err(CodecError::InputTooLong {
            actual: data.len(),
            target: length,
        });
    }
    let mut padded = vec![0u8; length];
    padded[length - data.len()..].copy_from_slice(data);
    Ok(padded)
}

/// Left-pads `data` into a full ABI word.
pub fn left_pad_word(data: &[u8]) -> Result<B256, CodecError> {
    left_pad(data, WORD).map(|padded| B256::from_slice(&padded))
}

/// Big-endian bytes of `value` without leading zero bytes. Zero is empty.
pub fn minimal_be_bytes(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let first_significant = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[first_significant..].to_vec()
}

/// Encodes a nonce the way the receiving side always has: minimal big-endian
/// bytes, widened to at least 4 bytes, then widened to a full word.
///
/// The result equals the nonce as a 32-byte big-endian integer, which is what
/// the sending side produces from the 8-byte packed field.
pub fn pad_nonce(nonce: u64) -> Result<B256, CodecError> {
    let minimal = minimal_be_bytes(nonce);
    let widened = left_pad(&minimal, minimal.len().max(4))?;
    left_pad_word(&widened)
}
