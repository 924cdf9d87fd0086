//! Literal string packing.
//!
//! SPIR-V strings are UTF-8, NUL terminated, and padded with zero bytes to a
//! whole number of words. Bytes fill each word little-endian first.

use crate::{Word, WordError};

/// Number of words `s` occupies once encoded (terminator included).
#[inline]
pub fn literal_string_word_len(s: &str) -> usize {
    s.len() / 4 + 1
}

/// Encode `s` as a literal string operand.
///
/// A NUL inside `s` terminates the string early when decoded; see
/// [`check_literal_string`].
pub fn encode_literal_string(s: &str) -> Vec<Word> {
    let mut words = Vec::with_capacity(literal_string_word_len(s));
    let mut chunks = s.as_bytes().chunks_exact(4);
    for chunk in chunks.by_ref() {
        words.push(Word::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    // Remainder plus the terminator always fits in one more word.
    let mut last = [0u8; 4];
    let rest = chunks.remainder();
    last[..rest.len()].copy_from_slice(rest);
    words.push(Word::from_le_bytes(last));
    words
}

/// Reject strings that would not survive encoding intact.
pub fn check_literal_string(s: &str) -> Result<(), WordError> {
    match s.bytes().position(|b| b == 0) {
        Some(at) => Err(WordError::InteriorNul(at)),
        None => Ok(()),
    }
}

/// Decode a literal string from the front of `words`.
///
/// Returns the string and the number of words it consumed.
pub fn decode_literal_string(words: &[Word]) -> Result<(String, usize), WordError> {
    let mut bytes = Vec::new();
    for (i, word) in words.iter().enumerate() {
        for byte in word.to_le_bytes() {
            if byte == 0 {
                let s = String::from_utf8(bytes).map_err(|_| WordError::InvalidUtf8)?;
                return Ok((s, i + 1));
            }
            bytes.push(byte);
        }
    }
    Err(WordError::UnterminatedString)
}
